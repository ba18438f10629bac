//! Tests for the conversion core

extern crate std;

use crate::convert::converter::CoordinateConverter;
use crate::convert::errors::ConvertError;
use crate::convert::format::SourceFormat;
use crate::convert::grid::GridConverter;

fn converter() -> CoordinateConverter {
    CoordinateConverter::new(GridConverter::new())
}

#[test]
fn test_decimal_tokens_become_lat_lon() {
    let result = converter()
        .convert("40.748333 -73.985278", SourceFormat::Decimal)
        .unwrap();
    std::assert!((result.lat - 40.748333).abs() < 1e-6);
    std::assert!((result.lon + 73.985278).abs() < 1e-6);
}

#[test]
fn test_decimal_populates_every_format() {
    let result = converter()
        .convert("40.748333 -73.985278", SourceFormat::Decimal)
        .unwrap();
    std::assert_eq!(result.dms, "40°44'54.0\"N 73°59'7.0\"W");
    std::assert_eq!(result.decimal(), "40.748333 -73.985278");
    // NYC falls in grid zone 18T
    std::assert!(result.mgrs.starts_with("18T"));
    std::assert!(result.utm_ups.starts_with("18N "));
}

#[test]
fn test_decimal_requires_exactly_two_tokens() {
    std::assert!(converter().convert("40.748333", SourceFormat::Decimal).is_err());
    std::assert!(converter()
        .convert("40.748333 -73.985278 12.0", SourceFormat::Decimal)
        .is_err());
    std::assert!(converter().convert("", SourceFormat::Decimal).is_err());
}

#[test]
fn test_decimal_rejects_non_numeric_tokens() {
    let result = converter().convert("forty -73.985278", SourceFormat::Decimal);
    match result {
        Err(ConvertError::MalformedCoordinate { format, .. }) => {
            std::assert_eq!(format, "decimal")
        }
        other => std::panic!("expected MalformedCoordinate, got {:?}", other),
    }
}

#[test]
fn test_decimal_rejects_out_of_range() {
    std::assert!(converter().convert("91.0 0.0", SourceFormat::Decimal).is_err());
    std::assert!(converter().convert("0.0 181.0", SourceFormat::Decimal).is_err());
}

#[test]
fn test_degrees_input_round_trips_to_decimal() {
    let result = converter()
        .convert("40°44'54.0\"N 73°59'7.0\"W", SourceFormat::Degrees)
        .unwrap();
    std::assert!((result.lat - 40.748333).abs() < 1e-4);
    std::assert!((result.lon + 73.985278).abs() < 1e-4);
}

#[test]
fn test_mgrs_round_trip_within_precision_floor() {
    let c = converter();
    let original = c
        .convert("38.897700 -77.036500", SourceFormat::Decimal)
        .unwrap();
    let back = c.convert(&original.mgrs, SourceFormat::Mgrs).unwrap();
    // 6-digit MGRS resolves below the 6-decimal-digit display floor
    std::assert!((back.lat - original.lat).abs() < 1e-4);
    std::assert!((back.lon - original.lon).abs() < 1e-4);
}

#[test]
fn test_utm_round_trip_within_precision_floor() {
    let c = converter();
    let original = c
        .convert("40.748333 -73.985278", SourceFormat::Decimal)
        .unwrap();
    let back = c.convert(&original.utm_ups, SourceFormat::Utm).unwrap();
    // UTM output is rounded to whole meters, just under 1e-5 degrees
    std::assert!((back.lat - original.lat).abs() < 1e-4);
    std::assert!((back.lon - original.lon).abs() < 1e-4);
}

#[test]
fn test_southern_hemisphere_round_trip() {
    let c = converter();
    let original = c
        .convert("-33.856800 151.215300", SourceFormat::Decimal)
        .unwrap();
    // Sydney falls in grid zone 56, southern hemisphere
    std::assert!(original.utm_ups.starts_with("56S "));
    let back = c.convert(&original.utm_ups, SourceFormat::Utm).unwrap();
    std::assert!((back.lat - original.lat).abs() < 1e-4);
    std::assert!((back.lon - original.lon).abs() < 1e-4);
}

#[test]
fn test_malformed_mgrs_fails_fast() {
    let result = converter().convert("ZZZZZZZZ", SourceFormat::Mgrs);
    match result {
        Err(ConvertError::MalformedCoordinate { format, input, .. }) => {
            std::assert_eq!(format, "mgrs");
            std::assert_eq!(input, "ZZZZZZZZ");
        }
        other => std::panic!("expected MalformedCoordinate, got {:?}", other),
    }
}
