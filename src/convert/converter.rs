//! Coordinate format conversion
//!
//! Normalizes a coordinate from any supported source format to a
//! canonical point, then re-encodes it into every display format at once.

use log::debug;

use super::dms;
use super::errors::{ConvertError, ConvertResult};
use super::format::SourceFormat;
use super::grid::GridConverter;
use super::point::GeoPoint;
use crate::measure::units::round_coordinate;

/// A position expressed in every supported display format
///
/// Produced once per conversion call. Plain immutable data with no
/// identity beyond its values.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// DMS pair text, e.g. `40°44'54.0"N 73°59'7.0"W`
    pub dms: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
    /// MGRS grid string at 6-digit precision
    pub mgrs: String,
    /// UTM/UPS string
    pub utm_ups: String,
}

impl ConversionResult {
    /// The bare decimal pair as display text, rounded to 6 digits
    pub fn decimal(&self) -> String {
        format!("{} {}", round_coordinate(self.lat), round_coordinate(self.lon))
    }

    /// The canonical point this result was built from
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Converter between coordinate text formats
///
/// Owns the grid codec it delegates MGRS and UTM/UPS work to. Every
/// operation is a synchronous pure transformation.
pub struct CoordinateConverter {
    grid: GridConverter,
}

impl CoordinateConverter {
    /// Create a converter around an explicitly constructed grid codec
    pub fn new(grid: GridConverter) -> Self {
        CoordinateConverter { grid }
    }

    /// Decode coordinate text in the given format to a canonical point
    pub fn decode(&self, coordinate: &str, format: SourceFormat) -> ConvertResult<GeoPoint> {
        match format {
            SourceFormat::Degrees => dms::parse_dms(coordinate),
            SourceFormat::Decimal => parse_decimal(coordinate),
            SourceFormat::Mgrs => self.grid.mgrs_to_point(coordinate),
            SourceFormat::Utm => self.grid.utm_to_point(coordinate),
        }
    }

    /// Convert coordinate text into every display format at once
    pub fn convert(&self, coordinate: &str, format: SourceFormat) -> ConvertResult<ConversionResult> {
        let point = self.decode(coordinate, format)?;
        debug!(
            "Decoded {} coordinate '{}' to lat={}, lon={}",
            format, coordinate, point.lat, point.lon
        );
        self.encode(&point)
    }

    /// Re-encode a canonical point into every display format
    pub fn encode(&self, point: &GeoPoint) -> ConvertResult<ConversionResult> {
        Ok(ConversionResult {
            dms: dms::format_point(point),
            lat: point.lat,
            lon: point.lon,
            mgrs: self.grid.point_to_mgrs(point)?,
            utm_ups: self.grid.point_to_utm(point)?,
        })
    }
}

/// Parse a space-separated decimal pair, e.g. `40.748333 -73.985278`
///
/// Exactly two numeric tokens are required; anything else is malformed.
fn parse_decimal(coordinate: &str) -> ConvertResult<GeoPoint> {
    let malformed = |reason: &str| ConvertError::MalformedCoordinate {
        format: "decimal",
        input: coordinate.to_string(),
        reason: reason.to_string(),
    };

    let tokens: Vec<&str> = coordinate.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(malformed("expected exactly two numeric tokens"));
    }

    let lat = tokens[0]
        .parse::<f64>()
        .map_err(|_| malformed("invalid latitude token"))?;
    let lon = tokens[1]
        .parse::<f64>()
        .map_err(|_| malformed("invalid longitude token"))?;

    GeoPoint::checked(lat, lon)
}
