pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors raised by matrix construction, access and arithmetic.
///
/// A singular matrix is not an error: [`crate::Matrix::inverse`] reports it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("Invalid matrix shape: {reason}")]
    InvalidShape { reason: String },

    #[error("Incompatible shapes for {op}: {left:?} and {right:?}")]
    IncompatibleShape {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("{axis} index {index} is out of range for length {len}")]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Operation requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
}

impl MatrixError {
    pub(crate) fn invalid_shape(reason: impl Into<String>) -> Self {
        MatrixError::InvalidShape {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MatrixError::IncompatibleShape {
            op: "add",
            left: (2, 3),
            right: (3, 2),
        };
        assert_eq!(err.to_string(), "Incompatible shapes for add: (2, 3) and (3, 2)");

        let err = MatrixError::IndexOutOfRange {
            axis: "row",
            index: 4,
            len: 2,
        };
        assert_eq!(err.to_string(), "row index 4 is out of range for length 2");

        let err = MatrixError::invalid_shape("matrix has no rows");
        assert_eq!(err.to_string(), "Invalid matrix shape: matrix has no rows");
    }

    #[test]
    fn test_converts_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(err.downcast_ref::<MatrixError>().is_some());
    }
}
