//! Traverse value types and reporting units.

/// Acres per square meter, the fixed reporting conversion.
pub const ACRES_PER_SQUARE_METER: f64 = 0.000247105;

/// One measured traverse leg.
///
/// `distance` is in meters and expected positive (a negative distance walks
/// the bearing backwards; nothing rejects it). `bearing_deg` is degrees
/// clockwise from grid north; values outside [0, 360) are accepted as-is
/// since sine and cosine are periodic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Leg {
    pub distance: f64,
    pub bearing_deg: f64,
}

impl Leg {
    #[inline]
    pub fn new(distance: f64, bearing_deg: f64) -> Self {
        Self {
            distance,
            bearing_deg,
        }
    }
}

/// Enclosed parcel area in both reporting units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParcelArea {
    pub square_meters: f64,
    pub acres: f64,
}

impl ParcelArea {
    /// Build from square meters; acres follow from the fixed constant.
    #[inline]
    pub fn from_square_meters(square_meters: f64) -> Self {
        Self {
            square_meters,
            acres: square_meters * ACRES_PER_SQUARE_METER,
        }
    }
}

/// Traverse configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct TraverseCfg {
    /// First and last pillars closer than this count as the same vertex,
    /// so the ring is treated as already closed.
    pub eps_close: f64,
}

impl Default for TraverseCfg {
    fn default() -> Self {
        Self { eps_close: 1e-9 }
    }
}
