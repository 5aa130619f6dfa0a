//! Transport-agnostic request/response contract.
//!
//! The HTTP handlers and the CLI subcommands both speak these types; the
//! engines never see raw wire data and the transports never see engine
//! types. Validation that must happen before an engine runs (leg counts,
//! matrix structure) lives here.

use std::fmt;

use nalgebra::{DMatrix, Vector2};
use serde::{Deserialize, Serialize};

use crate::matrix::{self, MatrixError};
use crate::traverse::{self, Leg, TraverseCfg};

/// A survey traverse to evaluate: origin plus parallel distance/bearing runs.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TraverseRequest {
    pub origin_easting: f64,
    pub origin_northing: f64,
    pub distances: Vec<f64>,
    pub bearings: Vec<f64>,
}

/// Pillar coordinates as `[easting, northing]` pairs plus the parcel area.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TraverseResponse {
    pub coordinates: Vec<[f64; 2]>,
    pub area_square_meters: f64,
    pub area_acres: f64,
}

/// A matrix pair to evaluate; rows-of-numbers, rectangular.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MatrixRequest {
    pub matrix_a: Vec<Vec<f64>>,
    pub matrix_b: Vec<Vec<f64>>,
}

/// One operation's outcome: exactly one of `result`/`error` is populated,
/// the other serializes as `null`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OpOutcome {
    pub result: Option<Vec<Vec<f64>>>,
    pub error: Option<String>,
}

impl From<Result<DMatrix<f64>, MatrixError>> for OpOutcome {
    fn from(outcome: Result<DMatrix<f64>, MatrixError>) -> Self {
        match outcome {
            Ok(m) => Self {
                result: Some(matrix::to_rows(&m)),
                error: None,
            },
            Err(e) => Self {
                result: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Echo of the inputs plus all three operation outcomes.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MatrixResponse {
    pub matrix_a: Vec<Vec<f64>>,
    pub matrix_b: Vec<Vec<f64>>,
    pub addition: OpOutcome,
    pub subtraction: OpOutcome,
    pub multiplication: OpOutcome,
}

/// A request rejected before any engine ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestError {
    /// `distances` and `bearings` must pair up one-to-one.
    LegCountMismatch { distances: usize, bearings: usize },
    /// A traverse needs at least one leg.
    NoLegs,
    /// A matrix input failed structural validation.
    Matrix(MatrixError),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::LegCountMismatch {
                distances,
                bearings,
            } => write!(
                f,
                "Each boundary line needs one distance and one bearing ({} distances, {} bearings)",
                distances, bearings
            ),
            RequestError::NoLegs => write!(f, "At least one boundary line is required"),
            RequestError::Matrix(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Matrix(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MatrixError> for RequestError {
    fn from(e: MatrixError) -> Self {
        RequestError::Matrix(e)
    }
}

/// Validate a traverse request, walk it, and measure the parcel.
pub fn run_traverse(req: &TraverseRequest) -> Result<TraverseResponse, RequestError> {
    if req.distances.len() != req.bearings.len() {
        return Err(RequestError::LegCountMismatch {
            distances: req.distances.len(),
            bearings: req.bearings.len(),
        });
    }
    if req.distances.is_empty() {
        return Err(RequestError::NoLegs);
    }
    let origin = Vector2::new(req.origin_easting, req.origin_northing);
    let legs: Vec<Leg> = req
        .distances
        .iter()
        .zip(&req.bearings)
        .map(|(&distance, &bearing_deg)| Leg::new(distance, bearing_deg))
        .collect();
    let pillars = traverse::compute_pillars(origin, &legs);
    let area = traverse::compute_area(&pillars, TraverseCfg::default());
    Ok(TraverseResponse {
        coordinates: pillars.iter().map(|p| [p.x, p.y]).collect(),
        area_square_meters: area.square_meters,
        area_acres: area.acres,
    })
}

/// Validate both matrices and evaluate all three operations.
///
/// Structural failures (empty or ragged inputs) abort the whole request;
/// per-operation dimension mismatches ride inside the response.
pub fn run_matrix(req: &MatrixRequest) -> Result<MatrixResponse, RequestError> {
    let a = matrix::from_rows(&req.matrix_a)?;
    let b = matrix::from_rows(&req.matrix_b)?;
    let ops = matrix::evaluate_all(&a, &b);
    Ok(MatrixResponse {
        matrix_a: req.matrix_a.clone(),
        matrix_b: req.matrix_b.clone(),
        addition: ops.addition.into(),
        subtraction: ops.subtraction.into(),
        multiplication: ops.multiplication.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn traverse_round_trip_single_east_leg() {
        let req = TraverseRequest {
            origin_easting: 1000.0,
            origin_northing: 1000.0,
            distances: vec![100.0],
            bearings: vec![90.0],
        };
        let resp = run_traverse(&req).unwrap();
        assert_eq!(resp.coordinates.len(), 2);
        assert_eq!(resp.coordinates[0], [1000.0, 1000.0]);
        assert!((resp.coordinates[1][0] - 1100.0).abs() < 1e-9);
        assert!((resp.coordinates[1][1] - 1000.0).abs() < 1e-9);
        assert!(resp.area_square_meters.abs() < 1e-9);
    }

    #[test]
    fn traverse_rejects_bad_leg_runs_before_the_engine() {
        let mut req = TraverseRequest {
            origin_easting: 0.0,
            origin_northing: 0.0,
            distances: vec![10.0, 20.0],
            bearings: vec![0.0],
        };
        assert_eq!(
            run_traverse(&req).unwrap_err(),
            RequestError::LegCountMismatch {
                distances: 2,
                bearings: 1
            }
        );
        req.distances.clear();
        req.bearings.clear();
        assert_eq!(run_traverse(&req).unwrap_err(), RequestError::NoLegs);
    }

    #[test]
    fn matrix_response_carries_null_for_the_absent_side() {
        let req = MatrixRequest {
            matrix_a: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
            matrix_b: vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]],
        };
        let resp = run_matrix(&req).unwrap();
        let v: Value = serde_json::to_value(&resp).unwrap();
        // add/subtract fail on 2x3 vs 3x2, multiply succeeds
        assert_eq!(v["addition"]["result"], Value::Null);
        assert_eq!(
            v["addition"]["error"],
            json!("Matrices must have same dimensions for addition")
        );
        assert_eq!(v["multiplication"]["error"], Value::Null);
        assert!(v["multiplication"]["result"].is_array());
    }

    #[test]
    fn matrix_structural_errors_abort_the_request() {
        let ragged = MatrixRequest {
            matrix_a: vec![vec![1.0, 2.0], vec![3.0]],
            matrix_b: vec![vec![1.0]],
        };
        assert!(matches!(
            run_matrix(&ragged),
            Err(RequestError::Matrix(MatrixError::RaggedRows { .. }))
        ));
        let empty = MatrixRequest {
            matrix_a: vec![],
            matrix_b: vec![vec![1.0]],
        };
        assert!(matches!(
            run_matrix(&empty),
            Err(RequestError::Matrix(MatrixError::InvalidDimensions))
        ));
    }

    #[test]
    fn reference_pair_evaluates_all_three_operations() {
        let req = MatrixRequest {
            matrix_a: vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            matrix_b: vec![vec![5.0, 6.0], vec![7.0, 8.0]],
        };
        let resp = run_matrix(&req).unwrap();
        assert_eq!(
            resp.addition.result,
            Some(vec![vec![6.0, 8.0], vec![10.0, 12.0]])
        );
        assert_eq!(
            resp.subtraction.result,
            Some(vec![vec![-4.0, -4.0], vec![-4.0, -4.0]])
        );
        assert_eq!(
            resp.multiplication.result,
            Some(vec![vec![19.0, 22.0], vec![43.0, 50.0]])
        );
    }
}
