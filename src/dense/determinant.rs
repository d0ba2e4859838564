//! Determinants and cofactors by recursive expansion.
//!
//! Everything here is a pure function over an [`ArrayView2`]; minors are copied into
//! fresh arrays so no buffer is shared between recursive calls.

use ndarray::{Array2, ArrayView2};
use num_traits::Zero;

/// Returns `data` with `row` and `col` removed.
///
/// See: https://en.wikipedia.org/wiki/Minor_(linear_algebra)
pub fn minor_submatrix(data: ArrayView2<f64>, row: usize, col: usize) -> Array2<f64> {
    let kept_rows: Vec<usize> = (0..data.nrows()).filter(|&r| r != row).collect();
    let kept_cols: Vec<usize> = (0..data.ncols()).filter(|&c| c != col).collect();

    Array2::from_shape_fn((kept_rows.len(), kept_cols.len()), |(i, j)| {
        data[[kept_rows[i], kept_cols[j]]]
    })
}

/// Determinant of a square array.
///
/// Sizes up to 3 use closed forms; larger arrays are expanded along the first column,
/// skipping zero entries. The empty array has determinant 1.
pub fn determinant(data: ArrayView2<f64>) -> f64 {
    debug_assert_eq!(data.nrows(), data.ncols());
    match data.nrows() {
        0 => 1.0,
        1 => data[[0, 0]],
        2 => data[[0, 0]] * data[[1, 1]] - data[[0, 1]] * data[[1, 0]],
        3 => diagonal_rule(data),
        _ => expand_first_column(data),
    }
}

/// Sum of the wrapped forward diagonal products minus the wrapped anti-diagonal products.
fn diagonal_rule(data: ArrayView2<f64>) -> f64 {
    let n = data.nrows();
    (0..n)
        .map(|i| {
            let (forward, backward) = (0..n).fold((1.0, 1.0), |(forward, backward), j| {
                let row = (j + i + 1) % n;
                (forward * data[[row, j]], backward * data[[row, n - j - 1]])
            });
            forward - backward
        })
        .sum()
}

fn expand_first_column(data: ArrayView2<f64>) -> f64 {
    (0..data.nrows())
        .filter(|&h| !data[[h, 0]].is_zero())
        .map(|h| {
            let sign = if h % 2 == 0 { 1.0 } else { -1.0 };
            sign * data[[h, 0]] * determinant(minor_submatrix(data, h, 0).view())
        })
        .sum()
}

/// Matrix of signed minors: `C[i][j] = (-1)^(i+j) * det(minor(i, j))`.
pub fn cofactor_array(data: ArrayView2<f64>) -> Array2<f64> {
    Array2::from_shape_fn(data.dim(), |(i, j)| {
        let minor = determinant(minor_submatrix(data, i, j).view());
        if (i + j) % 2 == 0 {
            minor
        } else {
            -minor
        }
    })
}
