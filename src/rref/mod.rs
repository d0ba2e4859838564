//! # Reduced Row-Echelon Form
//!
//! Gauss–Jordan elimination written only in terms of the three elementary row
//! operations of [`Matrix`]: swap, scale and add-multiple. The source matrix is never
//! touched; elimination runs on a copy of its data.
//!
//! Pivot cells are stored as exactly 1 and cleared cells as exactly 0, so reducing a
//! result a second time scales by 1 and adds zero multiples, leaving it unchanged.

use log::trace;
use num_traits::Zero;

use crate::dense::Matrix;

/// A matrix in reduced row-echelon form together with its pivot structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Rref {
    matrix: Matrix,
    /// Pivot column of each pivot row, in row order.
    pivots: Vec<usize>,
}

impl Rref {
    /// Reduces a copy of `source`.
    ///
    /// Columns are scanned left to right. For each column the first row at or below the
    /// current pivot row with a nonzero entry is swapped up, scaled so the pivot is 1, and
    /// used to clear the column in every other row. A column without such a row is
    /// skipped without advancing the pivot row.
    pub fn of(source: &Matrix) -> Rref {
        let mut work = Matrix::from_parts(None, source.clone_data(), source.created_at());
        let (rows, cols) = work.shape();
        let mut pivots = Vec::with_capacity(rows.min(cols));
        let mut pivot_row = 0;

        for col in 0..cols {
            if pivot_row >= rows {
                break;
            }

            let candidate = (pivot_row..rows).find(|&r| !work.as_array()[[r, col]].is_zero());
            let Some(candidate) = candidate else {
                trace!("Column {} has no pivot", col);
                continue;
            };

            if candidate != pivot_row {
                trace!("Swapping rows {} and {}", pivot_row, candidate);
                work.swap_rows(pivot_row, candidate);
            }

            let pivot = work.as_array()[[pivot_row, col]];
            work.scale_row(pivot_row, 1.0 / pivot);
            work.put(pivot_row, col, 1.0);

            for r in 0..rows {
                let factor = work.as_array()[[r, col]];
                if r == pivot_row || factor.is_zero() {
                    continue;
                }
                work.add_row_multiple(r, pivot_row, -factor);
                work.put(r, col, 0.0);
            }

            trace!("Pivot {} at row {}, column {}", pivot, pivot_row, col);
            pivots.push(col);
            pivot_row += 1;
        }

        Rref {
            matrix: work,
            pivots,
        }
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Number of pivots.
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    pub fn pivot_columns(&self) -> &[usize] {
        &self.pivots
    }

    pub fn is_full_rank(&self) -> bool {
        let (rows, cols) = self.matrix.shape();
        self.rank() == rows.min(cols)
    }
}

/// Checks that `matrix` is in reduced row-echelon form: pivots equal to 1, each pivot
/// the only nonzero in its column, pivots moving strictly right, zero rows at the bottom.
pub fn is_reduced_echelon(matrix: &Matrix) -> bool {
    let data = matrix.as_array();
    let mut lead: Option<usize> = None;

    for (i, row) in data.rows().into_iter().enumerate() {
        match row.iter().position(|val| !val.is_zero()) {
            None => {
                return data
                    .rows()
                    .into_iter()
                    .skip(i + 1)
                    .all(|rest| rest.iter().all(|val| val.is_zero()));
            }
            Some(pivot_col) => {
                if lead.is_some_and(|prev| pivot_col <= prev) {
                    return false;
                }
                lead = Some(pivot_col);

                if row[pivot_col] != 1.0 {
                    return false;
                }
                if data
                    .column(pivot_col)
                    .iter()
                    .enumerate()
                    .any(|(r, val)| r != i && !val.is_zero())
                {
                    return false;
                }
            }
        }
    }
    true
}
