//! # Dense Matrices
//!
//! [`Matrix`] is a row-major `rows × cols` array of `f64` whose shape is fixed at
//! construction while its contents can be edited in place through elementary row
//! operations, scalar multiplication and [`Matrix::normalize`].
//!
//! Derived quantities (determinant, cofactor matrix, inverse, reduced row-echelon form)
//! are computed on first request and memoized. Every in-place mutator drops the memoized
//! values, so a cached result always describes the current contents.

use chrono::{Local, NaiveDate};
use log::{debug, warn};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use parking_lot::Mutex;

use crate::error::{MatrixError, Result};
use crate::rref::Rref;
use crate::utils::{Direction, Normalize, NORMALIZE_DECIMALS};

mod arithmetic;
mod builder;
pub mod determinant;
mod eigen;
mod interop;

pub use builder::MatrixBuilder;
pub use eigen::Eigenvalues;

impl Normalize for Array2<f64> {
    fn normalize_decimals(&mut self, decimals: i32) {
        let scale = 10f64.powi(decimals);
        self.mapv_inplace(|val| {
            // Halves round up, towards positive infinity
            let rounded = (val * scale + 0.5).floor() / scale;
            // -0.0 == 0.0, so this also turns negative zeros positive
            if rounded == 0.0 {
                0.0
            } else {
                rounded
            }
        });
    }
}

/// Values computed from the matrix contents, filled lazily.
#[derive(Debug, Clone, Default)]
struct Derived {
    determinant: Option<f64>,
    cofactor: Option<Box<Matrix>>,
    /// `Some(None)` records that the matrix is known to be singular.
    inverse: Option<Option<Box<Matrix>>>,
    rref: Option<Box<Rref>>,
}

impl Derived {
    fn is_empty(&self) -> bool {
        self.determinant.is_none()
            && self.cofactor.is_none()
            && self.inverse.is_none()
            && self.rref.is_none()
    }
}

#[derive(Debug)]
pub struct Matrix {
    name: Option<String>,
    data: Array2<f64>,
    created_at: NaiveDate,
    derived: Mutex<Derived>,
}

impl Matrix {
    /// Creates a matrix from row-major data.
    ///
    /// # Parameters
    /// - `name`: Optional display label
    /// - `data`: One `Vec` per row, all of the same non-zero length
    /// - `date`: Creation date, defaults to today
    ///
    /// # Errors
    /// [`MatrixError::InvalidShape`] if `data` has no rows, no columns, or ragged rows.
    pub fn new(name: Option<&str>, data: Vec<Vec<f64>>, date: Option<NaiveDate>) -> Result<Self> {
        let mut builder = MatrixBuilder::new().rows(data);
        if let Some(name) = name {
            builder = builder.name(name);
        }
        if let Some(date) = date {
            builder = builder.created_at(date);
        }
        builder.build()
    }

    /// Wraps an existing array as an unnamed matrix created today.
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        validate_shape(&data)?;
        Ok(Self::from_parts(None, data, today()))
    }

    pub fn identity(n: usize) -> Result<Self> {
        Self::from_array(Array2::eye(n))
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_array(Array2::zeros((rows, cols)))
    }

    /// Assembles a matrix from already validated parts. Matrices derived from another one
    /// pass on its creation date.
    pub(crate) fn from_parts(name: Option<String>, data: Array2<f64>, created_at: NaiveDate) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Matrix {
            name,
            data,
            created_at,
            derived: Mutex::new(Derived::default()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<&str>) {
        self.name = name.map(str::to_owned);
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Read-only view of the backing storage.
    pub fn as_array(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Deep copy of the backing storage.
    pub fn clone_data(&self) -> Array2<f64> {
        self.data.to_owned()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(Direction::ROW, row)?;
        self.check_index(Direction::COLUMN, col)?;
        Ok(self.data[[row, col]])
    }

    /// Overwrites a single cell, dropping every memoized value.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<&mut Self> {
        self.check_index(Direction::ROW, row)?;
        self.check_index(Direction::COLUMN, col)?;
        self.put(row, col, value);
        Ok(self)
    }

    /// Returns a full row or column.
    pub fn lane(&self, direction: Direction, index: usize) -> Result<ArrayView1<'_, f64>> {
        self.check_index(direction, index)?;
        let lane = match direction {
            Direction::ROW => self.data.index_axis(Axis(0), index),
            Direction::COLUMN => self.data.index_axis(Axis(1), index),
        };
        Ok(lane)
    }

    pub fn row(&self, index: usize) -> Result<ArrayView1<'_, f64>> {
        self.lane(Direction::ROW, index)
    }

    pub fn column(&self, index: usize) -> Result<ArrayView1<'_, f64>> {
        self.lane(Direction::COLUMN, index)
    }

    fn check_index(&self, direction: Direction, index: usize) -> Result<()> {
        let len = match direction {
            Direction::ROW => self.rows(),
            Direction::COLUMN => self.cols(),
        };
        if index >= len {
            return Err(MatrixError::IndexOutOfRange {
                axis: direction.axis_name(),
                index,
                len,
            });
        }
        Ok(())
    }

    fn ensure_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    /// Drops every memoized value. Called by all in-place mutators.
    fn invalidate(&mut self) {
        let derived = self.derived.get_mut();
        if !derived.is_empty() {
            debug!(
                "Contents of {}x{} matrix changed, dropping memoized values",
                self.data.nrows(),
                self.data.ncols()
            );
            *derived = Derived::default();
        }
    }

    /// Rounds every cell to 10 decimal places and turns negative zeros positive.
    pub fn normalize(&mut self) -> &mut Self {
        self.invalidate();
        self.data.normalize_decimals(NORMALIZE_DECIMALS);
        self
    }

    /// Multiplies every cell by `c` in place.
    pub fn scalar_multiply(&mut self, c: f64) -> &mut Self {
        self.invalidate();
        self.data.mapv_inplace(|val| val * c);
        self
    }

    // Elementary row operations

    /// Exchanges rows `row1` and `row2`.
    pub fn ero_swap(&mut self, row1: usize, row2: usize) -> Result<&mut Self> {
        self.check_index(Direction::ROW, row1)?;
        self.check_index(Direction::ROW, row2)?;
        self.swap_rows(row1, row2);
        Ok(self)
    }

    /// Multiplies every cell of `row` by `scalar`.
    pub fn ero_scale(&mut self, row: usize, scalar: f64) -> Result<&mut Self> {
        self.check_index(Direction::ROW, row)?;
        self.scale_row(row, scalar);
        Ok(self)
    }

    /// `row1 <- row1 + scalar * row2`
    pub fn ero_add_multiple(&mut self, row1: usize, row2: usize, scalar: f64) -> Result<&mut Self> {
        self.check_index(Direction::ROW, row1)?;
        self.check_index(Direction::ROW, row2)?;
        self.add_row_multiple(row1, row2, scalar);
        Ok(self)
    }

    pub(crate) fn swap_rows(&mut self, row1: usize, row2: usize) {
        self.invalidate();
        if row1 == row2 {
            return;
        }
        for col in 0..self.data.ncols() {
            self.data.swap([row1, col], [row2, col]);
        }
    }

    pub(crate) fn scale_row(&mut self, row: usize, scalar: f64) {
        self.invalidate();
        self.data.row_mut(row).mapv_inplace(|val| val * scalar);
    }

    pub(crate) fn add_row_multiple(&mut self, row1: usize, row2: usize, scalar: f64) {
        self.invalidate();
        let source = self.data.row(row2).to_owned();
        self.data.row_mut(row1).scaled_add(scalar, &source);
    }

    pub(crate) fn put(&mut self, row: usize, col: usize, value: f64) {
        self.invalidate();
        self.data[[row, col]] = value;
    }

    // Derived quantities

    /// Determinant of a square matrix, computed once and memoized.
    pub fn determinant(&self) -> Result<f64> {
        self.ensure_square()?;
        let cached = self.derived.lock().determinant;
        if let Some(det) = cached {
            return Ok(det);
        }

        let det = determinant::determinant(self.data.view());
        debug!("Computed determinant of {}x{} matrix: {}", self.rows(), self.cols(), det);
        let det = *self.derived.lock().determinant.get_or_insert(det);
        Ok(det)
    }

    /// Matrix of signed minors, `C[i][j] = (-1)^(i+j) * det(minor(i, j))`.
    ///
    /// Needs one `(n-1)`-sized determinant per cell, which makes this the most expensive
    /// operation on a matrix. The result is memoized.
    pub fn cofactor_matrix(&self) -> Result<Matrix> {
        self.ensure_square()?;
        let cached = self.derived.lock().cofactor.as_deref().cloned();
        if let Some(cofactor) = cached {
            return Ok(cofactor);
        }

        let cofactor = Matrix::from_parts(
            None,
            determinant::cofactor_array(self.data.view()),
            self.created_at,
        );
        debug!("Computed cofactor matrix of {}x{} matrix", self.rows(), self.cols());
        let mut derived = self.derived.lock();
        let cofactor = derived.cofactor.get_or_insert_with(|| Box::new(cofactor));
        Ok(Matrix::clone(cofactor))
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// Inverse via `adjugate / determinant`, normalized to 10 decimal places.
    ///
    /// Returns `Ok(None)` for a singular matrix. The result, including the absence of an
    /// inverse, is memoized.
    pub fn inverse(&self) -> Result<Option<Matrix>> {
        self.ensure_square()?;
        let cached = self
            .derived
            .lock()
            .inverse
            .as_ref()
            .map(|inverse| inverse.as_deref().cloned());
        if let Some(inverse) = cached {
            return Ok(inverse);
        }

        let det = self.determinant()?;
        let inverse = if det == 0.0 {
            warn!("Matrix is singular, no inverse exists");
            None
        } else {
            let mut inverse = self.adjugate()?;
            inverse.scalar_multiply(1.0 / det).normalize();
            debug!("Computed inverse of {}x{} matrix", self.rows(), self.cols());
            Some(Box::new(inverse))
        };

        let mut derived = self.derived.lock();
        let inverse = derived.inverse.get_or_insert(inverse);
        Ok(inverse.as_deref().cloned())
    }

    pub fn is_invertible(&self) -> Result<bool> {
        Ok(self.determinant()? != 0.0)
    }

    /// Reduced row-echelon form, computed once on a copy of the data and memoized.
    pub fn reduced_echelon_form(&self) -> Rref {
        let cached = self.derived.lock().rref.as_deref().cloned();
        if let Some(rref) = cached {
            return rref;
        }

        let rref = Rref::of(self);
        debug!(
            "Computed reduced echelon form of {}x{} matrix, rank {}",
            self.rows(),
            self.cols(),
            rref.rank()
        );
        let mut derived = self.derived.lock();
        let rref = derived.rref.get_or_insert_with(|| Box::new(rref));
        Rref::clone(rref)
    }
}

impl Clone for Matrix {
    fn clone(&self) -> Self {
        Matrix {
            name: self.name.clone(),
            data: self.data.clone(),
            created_at: self.created_at,
            derived: Mutex::new(self.derived.lock().clone()),
        }
    }
}

/// Equality compares shape and cells only; name, date and memoized values are ignored.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn validate_shape(data: &Array2<f64>) -> Result<()> {
    match data.dim() {
        (0, _) => Err(MatrixError::invalid_shape("matrix has no rows")),
        (_, 0) => Err(MatrixError::invalid_shape("matrix has no columns")),
        _ => Ok(()),
    }
}
