//! Core engines for the fieldbook suite.
//!
//! Two independent, pure computations:
//! - [`traverse`]: land-survey traverse. Distance/bearing legs to absolute
//!   pillar coordinates, enclosed parcel area by the cross-coordinate method.
//! - [`matrix`]: dense small-matrix add/subtract/multiply with explicit
//!   shape validation.
//!
//! [`api`] wraps both in a transport-agnostic request/response contract; the
//! HTTP server and the CLI subcommands are external callers of that module
//! and own all presentation formatting.

pub mod api;
pub mod matrix;
pub mod traverse;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports under the surveying names used throughout.
pub use nalgebra::{DMatrix, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{
        run_matrix, run_traverse, MatrixRequest, MatrixResponse, OpOutcome, RequestError,
        TraverseRequest, TraverseResponse,
    };
    pub use crate::matrix::{evaluate_all, from_rows, to_rows, MatrixError, MatrixOps};
    pub use crate::traverse::{
        compute_area, compute_pillars, Leg, ParcelArea, TraverseCfg, ACRES_PER_SQUARE_METER,
    };
    pub use nalgebra::{DMatrix, Vector2 as Vec2};
}
