pub mod dense;
mod error;
pub mod rref;
mod utils;

pub use dense::{Eigenvalues, Matrix, MatrixBuilder};
pub use error::{MatrixError, Result};
pub use rref::{is_reduced_echelon, Rref};
pub use utils::Direction;
pub use utils::Normalize;
pub use utils::NORMALIZE_DECIMALS;
