//! End-to-end library demo on a small rectangular parcel.
//!
//! Purpose
//! - Show the two engines driven directly, without the HTTP or CLI layer:
//!   walk a four-leg traverse, measure the parcel, then evaluate one matrix
//!   pair through all three operations.
//!
//! Run with: cargo run -p fieldbook --example parcel_demo

use fieldbook::matrix::{evaluate_all, from_rows, to_rows};
use fieldbook::traverse::{compute_area, compute_pillars, Leg, TraverseCfg};
use nalgebra::Vector2;

fn main() {
    // A 100 m x 50 m parcel walked clockwise from its southwest pillar.
    let origin = Vector2::new(1000.0, 1000.0);
    let legs = [
        Leg::new(100.0, 0.0),
        Leg::new(50.0, 90.0),
        Leg::new(100.0, 180.0),
        Leg::new(50.0, 270.0),
    ];

    let pillars = compute_pillars(origin, &legs);
    println!("pillar  easting    northing");
    for (i, p) in pillars.iter().enumerate() {
        println!("{:<7} {:<10.3} {:.3}", i + 1, p.x, p.y);
    }

    let area = compute_area(&pillars, TraverseCfg::default());
    println!(
        "area: {:.3} square meters, {:.5} acres",
        area.square_meters, area.acres
    );

    let a = from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rectangular");
    let b = from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).expect("rectangular");
    let ops = evaluate_all(&a, &b);
    for (name, outcome) in [
        ("A + B", &ops.addition),
        ("A - B", &ops.subtraction),
        ("A x B", &ops.multiplication),
    ] {
        match outcome {
            Ok(m) => println!("{}: {:?}", name, to_rows(m)),
            Err(e) => println!("{}: {}", name, e),
        }
    }
}
