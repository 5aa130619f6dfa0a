//! Plain-text rendering of engine responses.
//!
//! Display precision lives here and in the embedded page, never in the
//! engines: coordinates and square meters to 3 decimals, acres to 5,
//! matrix cells to 2.

use std::fmt::Write;

use fieldbook::api::{MatrixResponse, OpOutcome, TraverseResponse};

/// Boundary-coordinates table plus the land-area block.
pub fn traverse_report(resp: &TraverseResponse) -> String {
    let mut out = String::new();
    out.push_str("=== BOUNDARY COORDINATES ===\n");
    out.push_str("Pillar\tEasting\t\tNorthing\n");
    out.push_str("----------------------------------------\n");
    for (i, [easting, northing]) in resp.coordinates.iter().enumerate() {
        let _ = writeln!(out, "{}\t{:.3}\t\t{:.3}", i + 1, easting, northing);
    }
    out.push_str("\n=== LAND AREA ===\n");
    let _ = writeln!(out, "Area: {:.3} square meters", resp.area_square_meters);
    let _ = writeln!(out, "Area: {:.5} acres", resp.area_acres);
    out
}

/// Input matrices plus all three operation outcomes.
pub fn matrix_report(resp: &MatrixResponse) -> String {
    let mut out = String::new();
    out.push_str("=== INPUT MATRICES ===\n");
    out.push_str("Matrix A:\n");
    push_matrix(&mut out, &resp.matrix_a);
    out.push_str("\nMatrix B:\n");
    push_matrix(&mut out, &resp.matrix_b);
    out.push_str("\n=== OPERATIONS ===\n");
    push_outcome(&mut out, "Addition (A + B)", &resp.addition);
    out.push('\n');
    push_outcome(&mut out, "Subtraction (A - B)", &resp.subtraction);
    out.push('\n');
    push_outcome(&mut out, "Multiplication (A x B)", &resp.multiplication);
    out
}

fn push_matrix(out: &mut String, rows: &[Vec<f64>]) {
    for row in rows {
        let cells: Vec<String> = row.iter().map(|v| format!("{:.2}", v)).collect();
        let _ = writeln!(out, "[{}]", cells.join("\t"));
    }
}

fn push_outcome(out: &mut String, name: &str, outcome: &OpOutcome) {
    match (&outcome.result, &outcome.error) {
        (Some(rows), _) => {
            let _ = writeln!(out, "{}:", name);
            push_matrix(out, rows);
        }
        (None, Some(error)) => {
            // name before the colon is just the operation word on errors
            let word = name.split(' ').next().unwrap_or(name);
            let _ = writeln!(out, "{}: {}", word, error);
        }
        (None, None) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldbook::api::{run_matrix, run_traverse, MatrixRequest, TraverseRequest};

    #[test]
    fn traverse_report_formats_three_and_five_decimals() {
        let resp = run_traverse(&TraverseRequest {
            origin_easting: 1000.0,
            origin_northing: 1000.0,
            distances: vec![100.0],
            bearings: vec![90.0],
        })
        .unwrap();
        let text = traverse_report(&resp);
        assert!(text.contains("1\t1000.000\t\t1000.000"));
        assert!(text.contains("2\t1100.000\t\t1000.000"));
        assert!(text.contains("Area: 0.000 square meters"));
        assert!(text.contains("Area: 0.00000 acres"));
    }

    #[test]
    fn matrix_report_shows_results_and_errors_side_by_side() {
        let resp = run_matrix(&MatrixRequest {
            matrix_a: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
            matrix_b: vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]],
        })
        .unwrap();
        let text = matrix_report(&resp);
        assert!(text.contains("[1.00\t2.00\t3.00]"));
        assert!(text.contains("Addition: Matrices must have same dimensions for addition"));
        assert!(text.contains("Multiplication (A x B):"));
        assert!(text.contains("[4.00\t5.00]"));
        assert!(text.contains("[10.00\t11.00]"));
    }
}
