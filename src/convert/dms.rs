//! Degrees/minutes/seconds text codec
//!
//! Parses DMS pair strings like `40°44'54.4"N 73°59'8.4"W` into a
//! canonical [`GeoPoint`] and formats points back into the same notation.
//! Accepts the unicode prime glyphs as well as ASCII quotes, and the
//! `40d44m54s` style separators some tools emit.

use lazy_static::lazy_static;
use regex::Regex;

use super::errors::{ConvertError, ConvertResult};
use super::point::GeoPoint;

const MINUTES_PER_DEGREE: f64 = 60.0;
const SECONDS_PER_DEGREE: f64 = 3600.0;

lazy_static! {
    static ref DMS_PAIR_RE: Regex = Regex::new(
        r#"(?x)^\s*
        (?P<latdeg>\d{1,2}(?:\.\d+)?)\s*[°ºdD:]?\s*
        (?:(?P<latmin>\d{1,2}(?:\.\d+)?)\s*['′mM:]?\s*)?
        (?:(?P<latsec>\d{1,2}(?:\.\d+)?)\s*(?:["″sS]|'')?\s*)?
        (?P<lathem>[NSns])
        [\s,;]+
        (?P<londeg>\d{1,3}(?:\.\d+)?)\s*[°ºdD:]?\s*
        (?:(?P<lonmin>\d{1,2}(?:\.\d+)?)\s*['′mM:]?\s*)?
        (?:(?P<lonsec>\d{1,2}(?:\.\d+)?)\s*(?:["″sS]|'')?\s*)?
        (?P<lonhem>[EWew])
        \s*$"#
    ).expect("DMS regex is valid");
}

fn malformed(input: &str, reason: &str) -> ConvertError {
    ConvertError::MalformedCoordinate {
        format: "degrees",
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn component(deg: f64, min: f64, sec: f64, negative: bool) -> f64 {
    let magnitude = deg + min / MINUTES_PER_DEGREE + sec / SECONDS_PER_DEGREE;
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn capture_f64(caps: &regex::Captures, name: &str) -> f64 {
    caps.name(name)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parse a DMS pair string into a canonical point
pub fn parse_dms(input: &str) -> ConvertResult<GeoPoint> {
    let caps = DMS_PAIR_RE
        .captures(input)
        .ok_or_else(|| malformed(input, "expected '<lat DMS><N|S> <lon DMS><E|W>'"))?;

    let lat_hem = caps.name("lathem").map(|m| m.as_str()).unwrap_or("N");
    let lon_hem = caps.name("lonhem").map(|m| m.as_str()).unwrap_or("E");

    let lat = component(
        capture_f64(&caps, "latdeg"),
        capture_f64(&caps, "latmin"),
        capture_f64(&caps, "latsec"),
        lat_hem.eq_ignore_ascii_case("S"),
    );
    let lon = component(
        capture_f64(&caps, "londeg"),
        capture_f64(&caps, "lonmin"),
        capture_f64(&caps, "lonsec"),
        lon_hem.eq_ignore_ascii_case("W"),
    );

    GeoPoint::checked(lat, lon)
        .map_err(|_| malformed(input, "latitude or longitude out of range"))
}

/// Split a decimal degree value into whole degrees, minutes and seconds
///
/// Seconds are rounded to one decimal place; carry is propagated so the
/// result never reads `59°60'0.0"`.
fn split_dms(value: f64) -> (u32, u32, f64) {
    let total_seconds = (value.abs() * SECONDS_PER_DEGREE * 10.0).round() / 10.0;
    let mut degrees = (total_seconds / SECONDS_PER_DEGREE).floor() as u32;
    let remainder = total_seconds - f64::from(degrees) * SECONDS_PER_DEGREE;
    let mut minutes = (remainder / MINUTES_PER_DEGREE).floor() as u32;
    let mut seconds = remainder - f64::from(minutes) * MINUTES_PER_DEGREE;

    // floor + float noise can leave seconds a hair under 60
    if seconds >= 59.95 {
        seconds = 0.0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes = 0;
        degrees += 1;
    }

    (degrees, minutes, seconds)
}

/// Format a latitude as DMS text, e.g. `40°44'54.0"N`
pub fn format_latitude(lat: f64) -> String {
    let (d, m, s) = split_dms(lat);
    let hemisphere = if lat < 0.0 { "S" } else { "N" };
    format!("{}°{}'{:.1}\"{}", d, m, s, hemisphere)
}

/// Format a longitude as DMS text, e.g. `73°59'8.4"W`
pub fn format_longitude(lon: f64) -> String {
    let (d, m, s) = split_dms(lon);
    let hemisphere = if lon < 0.0 { "W" } else { "E" };
    format!("{}°{}'{:.1}\"{}", d, m, s, hemisphere)
}

/// Format a point as a DMS pair string
pub fn format_point(point: &GeoPoint) -> String {
    format!("{} {}", format_latitude(point.lat), format_longitude(point.lon))
}
