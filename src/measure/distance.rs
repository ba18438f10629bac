//! Great-circle distance on the mean-radius sphere

use log::debug;

use crate::convert::{CoordinateConverter, GeoPoint, SourceFormat};
use crate::convert::errors::ConvertResult;

/// Mean Earth radius in meters
pub const EARTH_MEAN_RADIUS_METERS: f64 = 6_371_008.7714;

/// Great-circle distance between two points, in meters
///
/// Haversine on the mean-radius sphere. One degree of longitude at the
/// equator comes out to roughly 111,195 m.
pub fn distance_between(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lon - from.lon).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_MEAN_RADIUS_METERS * c
}

/// Distance between two coordinate strings in the given format, in meters
///
/// Both endpoints are normalized through the converter first. Callers
/// that already hold decoded points use [`distance_between`] directly.
pub fn distance_between_text(
    from: &str,
    to: &str,
    format: SourceFormat,
    converter: &CoordinateConverter,
) -> ConvertResult<f64> {
    let from_point = converter.decode(from, format)?;
    let to_point = converter.decode(to, format)?;
    let meters = distance_between(&from_point, &to_point);
    debug!(
        "Distance from '{}' to '{}' ({}): {} m",
        from, to, format, meters
    );
    Ok(meters)
}

/// Re-express a distance as an angle in radians on the mean-radius sphere
pub fn distance_to_radians(meters: f64) -> f64 {
    meters / EARTH_MEAN_RADIUS_METERS
}

/// Re-express a distance as an angle in degrees on the mean-radius sphere
pub fn distance_to_degrees(meters: f64) -> f64 {
    distance_to_radians(meters).to_degrees()
}
