//! Parsing of leg and matrix inputs from flags and files.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use fieldbook::api::MatrixRequest;

#[derive(Debug, Deserialize)]
struct LegRecord {
    distance: f64,
    bearing: f64,
}

/// Parse one `--leg "DISTANCE,BEARING"` value.
pub fn parse_leg(raw: &str) -> Result<(f64, f64)> {
    let Some((dist, brg)) = raw.split_once(',') else {
        bail!("leg {:?} must be DISTANCE,BEARING", raw);
    };
    let distance: f64 = dist
        .trim()
        .parse()
        .with_context(|| format!("leg {:?}: bad distance", raw))?;
    let bearing: f64 = brg
        .trim()
        .parse()
        .with_context(|| format!("leg {:?}: bad bearing", raw))?;
    Ok((distance, bearing))
}

/// Parse repeated `--leg` values into parallel distance/bearing runs.
pub fn parse_legs(raw: &[String]) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut distances = Vec::with_capacity(raw.len());
    let mut bearings = Vec::with_capacity(raw.len());
    for leg in raw {
        let (distance, bearing) = parse_leg(leg)?;
        distances.push(distance);
        bearings.push(bearing);
    }
    Ok((distances, bearings))
}

/// Read legs from a CSV file with a `distance,bearing` header.
pub fn read_legs_csv(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening legs CSV {}", path.display()))?;
    let mut distances = Vec::new();
    let mut bearings = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        let record: LegRecord =
            record.with_context(|| format!("{}: bad record on line {}", path.display(), i + 2))?;
        distances.push(record.distance);
        bearings.push(record.bearing);
    }
    Ok((distances, bearings))
}

/// Parse a matrix given inline as JSON rows, e.g. `[[1,2],[3,4]]`.
pub fn parse_matrix(raw: &str) -> Result<Vec<Vec<f64>>> {
    serde_json::from_str(raw).context("matrix must be JSON rows of numbers")
}

/// Read a full matrix request from a JSON file.
pub fn read_matrix_request(path: &Path) -> Result<MatrixRequest> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
