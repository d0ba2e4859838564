use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::DMatrix;
use ndarray::Array2;

use super::Matrix;
use crate::error::MatrixError;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "{}:", name)?;
        }
        for row in self.data.rows() {
            let cells: Vec<String> = row.iter().map(|val| val.to_string()).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl From<&Matrix> for DMatrix<f64> {
    fn from(matrix: &Matrix) -> Self {
        DMatrix::from_fn(matrix.rows(), matrix.cols(), |i, j| matrix.data[[i, j]])
    }
}

impl TryFrom<&DMatrix<f64>> for Matrix {
    type Error = MatrixError;

    fn try_from(matrix: &DMatrix<f64>) -> Result<Self, Self::Error> {
        let data = Array2::from_shape_fn((matrix.nrows(), matrix.ncols()), |(i, j)| matrix[(i, j)]);
        Matrix::from_array(data)
    }
}
