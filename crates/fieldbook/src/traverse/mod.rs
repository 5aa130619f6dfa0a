//! Land-survey traverse: distance/bearing legs to pillars and parcel area.
//!
//! Purpose
//! - Walk an ordered run of measured legs into absolute easting/northing
//!   pillar coordinates, then measure the enclosed parcel with the
//!   cross-coordinate (shoelace) method.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`: `x` is easting, `y` is northing,
//!   both in meters.
//! - Bearings are degrees clockwise from grid north (north 0°, east 90°),
//!   the surveying convention rather than the trigonometric one.
//! - Ring closure uses the `TraverseCfg::eps_close` tolerance; a pre-closed
//!   ring is never closed a second time.

mod engine;
mod types;

pub use engine::{compute_area, compute_pillars, leg_displacement};
pub use types::{Leg, ParcelArea, TraverseCfg, ACRES_PER_SQUARE_METER};
