//! Boundary validation and the three binary operations.

use nalgebra::DMatrix;

use super::types::{MatrixError, MatrixOps};

/// Validate a row-of-rows input and pack it into a `DMatrix`.
///
/// Rejects empty inputs (`InvalidDimensions`) and unequal row lengths
/// (`RaggedRows`); on success the shape lives in the matrix itself, so no
/// later code ever indexes into a possibly-empty first row.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<DMatrix<f64>, MatrixError> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if nrows == 0 || ncols == 0 {
        return Err(MatrixError::InvalidDimensions);
    }
    for (row, values) in rows.iter().enumerate() {
        if values.len() != ncols {
            return Err(MatrixError::RaggedRows {
                row,
                expected: ncols,
                found: values.len(),
            });
        }
    }
    Ok(DMatrix::from_fn(nrows, ncols, |i, j| rows[i][j]))
}

/// Unpack a matrix into the row-of-rows wire shape.
pub fn to_rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    (0..m.nrows())
        .map(|i| (0..m.ncols()).map(|j| m[(i, j)]).collect())
        .collect()
}

/// `A + B`, valid iff the shapes are identical.
pub fn add(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<DMatrix<f64>, MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::AddShape);
    }
    Ok(a + b)
}

/// `A - B`, valid iff the shapes are identical.
pub fn subtract(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<DMatrix<f64>, MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::SubtractShape);
    }
    Ok(a - b)
}

/// `A × B`, valid iff `a.ncols() == b.nrows()`; result is `a.nrows() × b.ncols()`.
pub fn multiply(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<DMatrix<f64>, MatrixError> {
    if a.ncols() != b.nrows() {
        return Err(MatrixError::MultiplyShape);
    }
    Ok(a * b)
}

/// Evaluate all three operations against the same pair.
///
/// Unconditional and independent: the caller always receives three
/// outcomes, never a computation that stops at the first failure.
pub fn evaluate_all(a: &DMatrix<f64>, b: &DMatrix<f64>) -> MatrixOps {
    MatrixOps {
        addition: add(a, b),
        subtraction: subtract(a, b),
        multiplication: multiply(a, b),
    }
}
