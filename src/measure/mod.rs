//! Distance and measurement handling
//!
//! Great-circle distance between geographic points and conversion of
//! measurement magnitudes between display units.

pub mod units;
mod distance;
mod tests;

// Re-export key types
pub use self::distance::{
    distance_between, distance_between_text, distance_to_degrees, distance_to_radians,
    EARTH_MEAN_RADIUS_METERS,
};
pub use self::units::{round_altitude, round_coordinate, LengthUnit, DECIMAL_PRECISION};
