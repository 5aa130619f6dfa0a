//! Pillar propagation and cross-coordinate area.

use nalgebra::Vector2;

use super::types::{Leg, ParcelArea, TraverseCfg};

/// Displacement of a single leg: `(d sin θ, d cos θ)` for bearing θ.
///
/// Bearings run clockwise from grid north, so sine feeds easting and cosine
/// feeds northing.
#[inline]
pub fn leg_displacement(leg: Leg) -> Vector2<f64> {
    let bearing = leg.bearing_deg.to_radians();
    Vector2::new(leg.distance * bearing.sin(), leg.distance * bearing.cos())
}

/// Walk the traverse from `origin`, appending one pillar per leg.
///
/// Returns `legs.len() + 1` pillars with the origin first; an empty leg run
/// yields just `[origin]`. Leg order is significant: leg `i` starts at the
/// pillar produced by leg `i - 1`.
pub fn compute_pillars(origin: Vector2<f64>, legs: &[Leg]) -> Vec<Vector2<f64>> {
    let mut pillars = Vec::with_capacity(legs.len() + 1);
    pillars.push(origin);
    let mut pos = origin;
    for &leg in legs {
        pos += leg_displacement(leg);
        pillars.push(pos);
    }
    pillars
}

/// Parcel area of the pillar ring by the cross-coordinate (shoelace) method.
///
/// When the first and last pillar sit further apart than `cfg.eps_close`,
/// the closing edge back to the first pillar is summed implicitly; the
/// input is never copied or mutated. The sign of the raw sums encodes
/// winding direction and is discarded, only the magnitude is reported.
/// Fewer than three distinct pillars bound no area and yield zero.
pub fn compute_area(pillars: &[Vector2<f64>], cfg: TraverseCfg) -> ParcelArea {
    let (Some(&first), Some(&last)) = (pillars.first(), pillars.last()) else {
        return ParcelArea::default();
    };
    let mut sum1 = 0.0;
    let mut sum2 = 0.0;
    for pair in pillars.windows(2) {
        sum1 += pair[0].x * pair[1].y;
        sum2 += pair[0].y * pair[1].x;
    }
    if (first - last).norm() > cfg.eps_close {
        sum1 += last.x * first.y;
        sum2 += last.y * first.x;
    }
    ParcelArea::from_square_meters(0.5 * (sum1 - sum2).abs())
}
