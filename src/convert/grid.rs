//! Grid coordinate codecs (MGRS and UTM/UPS)
//!
//! Thin adapter over the `geoconvert` grid conversions. Each decode
//! returns the canonical [`GeoPoint`] shape regardless of how the
//! underlying library names its outputs, and each encode accepts the
//! same shape, so the rest of the crate never sees library types.

use geoconvert::{LatLon, Mgrs, UtmUps};
use lazy_static::lazy_static;
use regex::Regex;

use super::errors::{ConvertError, ConvertResult};
use super::point::GeoPoint;

/// MGRS output precision, in digits per axis
///
/// Six digits resolve to one meter, which matches the coordinate display
/// precision used elsewhere in the crate.
pub const MGRS_PRECISION: i32 = 6;

lazy_static! {
    static ref UTM_RE: Regex = Regex::new(
        r#"(?x)^\s*
        (?:(?P<zone>\d{1,2})\s*)?
        (?P<band>[A-HJ-NP-Za-hj-np-z])
        \s+
        (?P<easting>\d+(?:\.\d+)?)\s*(?:mE)?
        [\s,]+
        (?P<northing>\d+(?:\.\d+)?)\s*(?:mN)?
        \s*$"#
    ).expect("UTM regex is valid");
}

fn malformed(format: &'static str, input: &str, reason: String) -> ConvertError {
    ConvertError::MalformedCoordinate {
        format,
        input: input.to_string(),
        reason,
    }
}

/// Converter for grid coordinate systems
///
/// Owns the grid codec configuration. Constructed explicitly by callers
/// and handed to [`CoordinateConverter`](super::CoordinateConverter)
/// rather than living as process-wide state.
pub struct GridConverter {
    mgrs_precision: i32,
}

impl GridConverter {
    /// Create a converter with the default MGRS precision
    pub fn new() -> Self {
        GridConverter {
            mgrs_precision: MGRS_PRECISION,
        }
    }

    /// Decode an MGRS grid string into a canonical point
    pub fn mgrs_to_point(&self, input: &str) -> ConvertResult<GeoPoint> {
        let mgrs = Mgrs::parse_str(input.trim())
            .map_err(|e| malformed("mgrs", input, e.to_string()))?;
        let coord = mgrs.to_latlon();
        GeoPoint::checked(coord.latitude(), coord.longitude())
    }

    /// Encode a point as an MGRS grid string
    pub fn point_to_mgrs(&self, point: &GeoPoint) -> ConvertResult<String> {
        let coord = LatLon::create(point.lat, point.lon)
            .map_err(|_| ConvertError::InvalidCoordinate(point.lat, point.lon))?;
        Ok(coord.to_mgrs(self.mgrs_precision).to_string())
    }

    /// Decode a UTM/UPS string into a canonical point
    ///
    /// Accepts `18N 583599 4507350` style text. A single `N` or `S` after
    /// the zone number is read as a hemisphere designator; any other valid
    /// letter is read as an MGRS latitude band (C-M south, N-X north).
    /// A missing zone number selects the polar (UPS) system.
    pub fn utm_to_point(&self, input: &str) -> ConvertResult<GeoPoint> {
        let caps = UTM_RE.captures(input).ok_or_else(|| {
            malformed(
                "utm",
                input,
                "expected '<zone><hemisphere> <easting> <northing>'".to_string(),
            )
        })?;

        let zone = match caps.name("zone") {
            Some(m) => m
                .as_str()
                .parse::<i32>()
                .map_err(|e| malformed("utm", input, e.to_string()))?,
            None => 0,
        };
        let band = caps
            .name("band")
            .map(|m| m.as_str().to_ascii_uppercase())
            .unwrap_or_default();
        let northp = match band.as_str() {
            "N" | "S" => band == "N",
            other => other >= "N",
        };
        let easting = capture_f64(&caps, "easting", input)?;
        let northing = capture_f64(&caps, "northing", input)?;

        let utm = UtmUps::create(zone, northp, easting, northing)
            .map_err(|e| malformed("utm", input, e.to_string()))?;
        let coord = utm.to_latlon();
        GeoPoint::checked(coord.latitude(), coord.longitude())
    }

    /// Encode a point as a UTM/UPS string
    ///
    /// Output uses hemisphere letters, e.g. `18N 583599 4507350`. Points
    /// in the polar UPS zones render without a zone number.
    pub fn point_to_utm(&self, point: &GeoPoint) -> ConvertResult<String> {
        let coord = LatLon::create(point.lat, point.lon)
            .map_err(|_| ConvertError::InvalidCoordinate(point.lat, point.lon))?;
        let utm = coord.to_utmups();

        let hemisphere = if utm.is_north() { "N" } else { "S" };
        if utm.zone() == 0 {
            Ok(format!("{} {:.0} {:.0}", hemisphere, utm.easting(), utm.northing()))
        } else {
            Ok(format!(
                "{}{} {:.0} {:.0}",
                utm.zone(), hemisphere, utm.easting(), utm.northing()
            ))
        }
    }
}

fn capture_f64(caps: &regex::Captures, name: &str, input: &str) -> ConvertResult<f64> {
    caps.name(name)
        .ok_or_else(|| malformed("utm", input, format!("missing {}", name)))?
        .as_str()
        .parse::<f64>()
        .map_err(|e| malformed("utm", input, e.to_string()))
}
