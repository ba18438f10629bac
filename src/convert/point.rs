//! Canonical geographic position

use super::errors::{ConvertError, ConvertResult};

/// A geographic position in decimal degrees
///
/// Every decoder normalizes to this shape before any re-encoding happens,
/// so downstream code never has to probe for alternate field names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, positive north
    pub lat: f64,
    /// Longitude in decimal degrees, positive east
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new point without range checking
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Create a new point, rejecting out-of-range values
    ///
    /// NaN components fail the range check and are rejected with them.
    pub fn checked(lat: f64, lon: f64) -> ConvertResult<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(ConvertError::InvalidCoordinate(lat, lon));
        }
        Ok(GeoPoint { lat, lon })
    }
}
