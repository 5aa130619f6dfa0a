//! Matrix engine error and result types.

use std::fmt;

use nalgebra::DMatrix;

/// Why a matrix input or operation was rejected.
///
/// The `Display` strings of the three dimension-mismatch variants are fixed
/// by the wire contract and must not be reworded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// Zero rows or zero columns; nothing to operate on.
    InvalidDimensions,
    /// A row's length differs from the first row's.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Addition requires identical shapes.
    AddShape,
    /// Subtraction requires identical shapes.
    SubtractShape,
    /// Multiplication requires `a.ncols() == b.nrows()`.
    MultiplyShape,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidDimensions => {
                write!(f, "Matrix must have at least one row and one column")
            }
            MatrixError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "Matrix rows must all have the same length (row {} has {} values, expected {})",
                row, found, expected
            ),
            MatrixError::AddShape => {
                write!(f, "Matrices must have same dimensions for addition")
            }
            MatrixError::SubtractShape => {
                write!(f, "Matrices must have same dimensions for subtraction")
            }
            MatrixError::MultiplyShape => write!(
                f,
                "Number of columns in first matrix must equal number of rows in second matrix"
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

/// The three outcomes of one evaluation of an `(A, B)` pair.
///
/// Every field is recomputed on each call; a failure in one operation is
/// recorded in its own slot and never aborts the others.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixOps {
    pub addition: Result<DMatrix<f64>, MatrixError>,
    pub subtraction: Result<DMatrix<f64>, MatrixError>,
    pub multiplication: Result<DMatrix<f64>, MatrixError>,
}
