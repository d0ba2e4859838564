use chrono::NaiveDate;
use ndarray::Array2;

use super::{today, validate_shape, Matrix};
use crate::error::{MatrixError, Result};

enum Source {
    Rows(Vec<Vec<f64>>),
    Array(Array2<f64>),
}

/// Step-by-step construction of a [`Matrix`] with optional name and creation date.
///
/// ```
/// use dense_algebra::MatrixBuilder;
///
/// let m = MatrixBuilder::new()
///     .name("Identity2")
///     .rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]])
///     .build()
///     .unwrap();
/// assert_eq!(m.determinant().unwrap(), 1.0);
/// ```
#[derive(Default)]
pub struct MatrixBuilder {
    name: Option<String>,
    created_at: Option<NaiveDate>,
    source: Option<Source>,
}

impl MatrixBuilder {
    pub fn new() -> Self {
        MatrixBuilder {
            name: None,
            created_at: None,
            source: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn created_at(mut self, date: NaiveDate) -> Self {
        self.created_at = Some(date);
        self
    }

    /// Row-major data, one `Vec` per row.
    pub fn rows(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.source = Some(Source::Rows(rows));
        self
    }

    pub fn array(mut self, data: Array2<f64>) -> Self {
        self.source = Some(Source::Array(data));
        self
    }

    pub fn build(self) -> Result<Matrix> {
        let data = match self.source {
            Some(Source::Rows(rows)) => rows_to_array(rows)?,
            Some(Source::Array(data)) => data,
            None => return Err(MatrixError::invalid_shape("no data supplied")),
        };
        validate_shape(&data)?;
        Ok(Matrix::from_parts(
            self.name,
            data,
            self.created_at.unwrap_or_else(today),
        ))
    }
}

fn rows_to_array(rows: Vec<Vec<f64>>) -> Result<Array2<f64>> {
    let n_rows = rows.len();
    let n_cols = rows
        .first()
        .map(Vec::len)
        .ok_or_else(|| MatrixError::invalid_shape("matrix has no rows"))?;

    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n_cols) {
        return Err(MatrixError::invalid_shape(format!(
            "row {} has {} columns, expected {}",
            i,
            row.len(),
            n_cols
        )));
    }

    let values: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((n_rows, n_cols), values)
        .map_err(|e| MatrixError::invalid_shape(e.to_string()))
}
