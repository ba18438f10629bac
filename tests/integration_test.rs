//! Integration tests for the conversion facade

extern crate std;

// Import crate items
use coordkit::CoordKit;
use coordkit::{GeoPoint, SourceFormat};

#[test]
fn test_complete_conversion_workflow() {
    let kit = CoordKit::new(Some("integration_test.log")).unwrap();

    // Decimal input fans out into every display format
    let result = kit
        .convert_coordinate("40.748333 -73.985278", SourceFormat::Decimal)
        .unwrap();
    std::assert!((result.lat - 40.748333).abs() < 1e-6);
    std::assert!((result.lon + 73.985278).abs() < 1e-6);
    std::assert_eq!(result.dms, "40°44'54.0\"N 73°59'7.0\"W");
    std::assert!(result.mgrs.starts_with("18T"));
    std::assert!(result.utm_ups.starts_with("18N "));

    // Each produced encoding decodes back to the same position
    let from_dms = kit.convert_coordinate(&result.dms, SourceFormat::Degrees).unwrap();
    std::assert!((from_dms.lat - result.lat).abs() < 1e-4);

    let from_mgrs = kit.convert_coordinate(&result.mgrs, SourceFormat::Mgrs).unwrap();
    std::assert!((from_mgrs.lat - result.lat).abs() < 1e-4);
    std::assert!((from_mgrs.lon - result.lon).abs() < 1e-4);

    let from_utm = kit.convert_coordinate(&result.utm_ups, SourceFormat::Utm).unwrap();
    std::assert!((from_utm.lat - result.lat).abs() < 1e-4);
    std::assert!((from_utm.lon - result.lon).abs() < 1e-4);
}

#[test]
fn test_report_and_passthrough() {
    let kit = CoordKit::new(Some("integration_test_report.log")).unwrap();

    let report = kit.convert("40.748333 -73.985278", "decimal").unwrap();
    std::assert!(report.contains("DMS:"));
    std::assert!(report.contains("MGRS:"));
    std::assert!(report.contains("UTM/UPS:"));

    // An empty format name echoes the input unchanged
    let untouched = kit.convert("whatever the caller had", "").unwrap();
    std::assert_eq!(untouched, "whatever the caller had");

    // An unrecognized format name is rejected, not guessed at
    std::assert!(kit.convert("40.748333 -73.985278", "usng").is_err());
}

#[test]
fn test_distance_and_units() {
    let kit = CoordKit::new(Some("integration_test_distance.log")).unwrap();

    let meters = kit.distance("0.0 0.0", "0.0 1.0", "decimal", "meters").unwrap();
    std::assert!((meters - 111_195.0).abs() < 10.0);

    let kilometers = kit.distance("0.0 0.0", "0.0 1.0", "decimal", "kilometers").unwrap();
    std::assert!((kilometers - meters / 1000.0).abs() < 1e-9);

    let points_km =
        kit.distance_points(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 1.0), "kilometers");
    std::assert!((points_km - kilometers).abs() < 1e-9);

    // Unit conversion round-trips and defaults a missing magnitude to 0
    let feet = kit.convert_units(Some(1.0), "miles", "feet");
    std::assert!((feet - 5280.0).abs() < 1e-9);
    std::assert_eq!(kit.convert_units(None, "miles", "feet"), 0.0);

    // Unknown unit names pass the value through unchanged
    std::assert_eq!(kit.convert_units(Some(12.5), "furlongs", "cubits"), 12.5);
}
