//! Dense small-matrix arithmetic with explicit shape validation.
//!
//! Purpose
//! - Evaluate addition, subtraction, and multiplication over one pair of
//!   matrices, each operation independently: a shape mismatch in one never
//!   suppresses the other two.
//!
//! Conventions
//! - Internally a matrix is `nalgebra::DMatrix<f64>` with its shape stored
//!   explicitly; row-of-rows input is validated once at the boundary by
//!   [`from_rows`] and never re-inferred from `rows[0]` afterwards.
//! - The `Display` strings of the dimension-mismatch errors are part of the
//!   wire contract; callers forward them verbatim.

mod ops;
mod types;

pub use ops::{add, evaluate_all, from_rows, multiply, subtract, to_rows};
pub use types::{MatrixError, MatrixOps};
