use std::ops::{Add, Mul};

use ndarray::Array2;

use super::Matrix;
use crate::error::{MatrixError, Result};

impl Matrix {
    /// Whether `a * b` is defined, i.e. `a.cols() == b.rows()`.
    pub fn multiply_compatible(a: &Matrix, b: &Matrix) -> bool {
        a.cols() == b.rows()
    }

    /// Naive triple-loop product of `a` and `b`, shaped `a.rows() x b.cols()`. The result
    /// carries the creation date of `a`.
    pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        if !Self::multiply_compatible(a, b) {
            return Err(MatrixError::IncompatibleShape {
                op: "multiply",
                left: a.shape(),
                right: b.shape(),
            });
        }

        let mut data = Array2::<f64>::zeros((a.rows(), b.cols()));
        for i in 0..a.rows() {
            for j in 0..b.cols() {
                for k in 0..b.rows() {
                    data[[i, j]] += a.data[[i, k]] * b.data[[k, j]];
                }
            }
        }
        Ok(Matrix::from_parts(None, data, a.created_at))
    }

    /// Elementwise sum of two matrices of identical shape.
    pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        if a.shape() != b.shape() {
            return Err(MatrixError::IncompatibleShape {
                op: "add",
                left: a.shape(),
                right: b.shape(),
            });
        }
        Ok(Matrix::from_parts(None, &a.data + &b.data, a.created_at))
    }

    /// Raises the matrix to the power `n` by repeated naive multiplication.
    ///
    /// `n <= 1` returns an unnamed copy. Each further step is a full multiplication, so
    /// large `n` or large matrices get expensive quickly.
    pub fn power(&self, n: u32) -> Result<Matrix> {
        let mut result = Matrix::from_parts(None, self.clone_data(), self.created_at);
        for _ in 1..n {
            result = Matrix::multiply(self, &result)?;
        }
        Ok(result)
    }

    /// New matrix whose row `i` is column `i` of this one.
    pub fn transpose(&self) -> Matrix {
        Matrix::from_parts(None, self.data.t().to_owned(), self.created_at)
    }

    /// Sum of the main diagonal, bounded by the shorter side.
    pub fn trace(&self) -> f64 {
        (0..self.rows().min(self.cols()))
            .map(|i| self.data[[i, i]])
            .sum()
    }
}

impl Add for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: Self) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: Self) -> Self::Output {
        Matrix::multiply(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::new(None, rows, None).unwrap()
    }

    #[test]
    fn test_multiply() {
        let a = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = matrix(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);

        let product = Matrix::multiply(&a, &b).unwrap();
        assert_eq!(product.as_array(), array![[2.0, 1.0], [4.0, 3.0]]);
        assert_eq!(product.name(), None);
        assert_eq!((&a * &b).unwrap(), product);
    }

    #[test]
    fn test_multiply_rectangular() {
        let a = matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = matrix(vec![
            vec![1.0, 0.0, 2.0, 1.0],
            vec![0.0, 1.0, 0.0, 1.0],
            vec![1.0, 1.0, 1.0, 0.0],
        ]);

        assert!(Matrix::multiply_compatible(&a, &b));
        assert!(!Matrix::multiply_compatible(&b, &a));

        let product = Matrix::multiply(&a, &b).unwrap();
        assert_eq!(product.shape(), (2, 4));
        assert_eq!(
            product.as_array(),
            array![[4.0, 5.0, 5.0, 3.0], [10.0, 11.0, 14.0, 9.0]]
        );

        assert_eq!(
            Matrix::multiply(&b, &a).unwrap_err(),
            MatrixError::IncompatibleShape {
                op: "multiply",
                left: (3, 4),
                right: (2, 3),
            }
        );
    }

    #[test]
    fn test_add() {
        let a = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = matrix(vec![vec![0.5, -2.0], vec![1.0, 0.0]]);

        let sum = Matrix::add(&a, &b).unwrap();
        assert_eq!(sum.as_array(), array![[1.5, 0.0], [4.0, 4.0]]);
        assert_eq!((&b + &a).unwrap(), sum);

        let c = matrix(vec![vec![1.0, 2.0]]);
        assert!(matches!(
            Matrix::add(&a, &c),
            Err(MatrixError::IncompatibleShape { op: "add", .. })
        ));
    }

    #[test]
    fn test_scalar_multiply_in_place() {
        let mut a = matrix(vec![vec![1.0, -2.0], vec![0.5, 4.0]]);
        a.scalar_multiply(2.0).scalar_multiply(0.5).scalar_multiply(-1.0);
        assert_eq!(a.as_array(), array![[-1.0, 2.0], [-0.5, -4.0]]);
    }

    #[test]
    fn test_power() {
        let a = matrix(vec![vec![1.0, 1.0], vec![1.0, 0.0]]);

        assert_eq!(a.power(0).unwrap(), a);
        assert_eq!(a.power(1).unwrap(), a);
        assert_eq!(a.power(2).unwrap(), Matrix::multiply(&a, &a).unwrap());
        // Fibonacci numbers
        assert_eq!(a.power(10).unwrap().as_array(), array![[89.0, 55.0], [55.0, 34.0]]);

        let rect = matrix(vec![vec![1.0, 2.0, 3.0]]);
        assert_eq!(rect.power(1).unwrap(), rect);
        assert!(rect.power(2).is_err());
    }

    #[test]
    fn test_transpose() {
        let a = matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = a.transpose();

        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.row(2).unwrap(), a.column(2).unwrap());
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_trace() {
        assert_eq!(Matrix::identity(4).unwrap().trace(), 4.0);
        assert_eq!(matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).trace(), 5.0);
        // Non-square matrices only sum the diagonal that exists
        assert_eq!(matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).trace(), 6.0);
        assert_eq!(matrix(vec![vec![7.0], vec![1.0]]).trace(), 7.0);
    }
}
