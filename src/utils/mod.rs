/// Number of decimal places [`crate::Matrix::normalize`] keeps.
pub const NORMALIZE_DECIMALS: i32 = 10;

/// Orientation of a lane (a full row or a full column) of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ROW,
    COLUMN,
}

impl Direction {
    pub(crate) fn axis_name(&self) -> &'static str {
        match self {
            Direction::ROW => "row",
            Direction::COLUMN => "column",
        }
    }
}

pub trait Normalize {
    /// Replaces negative zeros with positive zeros and rounds every value to
    /// `decimals` decimal places.
    fn normalize_decimals(&mut self, decimals: i32);
}
