//! Tests for the grid codec adapter

extern crate std;

use crate::convert::grid::GridConverter;
use crate::convert::point::GeoPoint;

#[test]
fn test_utm_text_with_hemisphere_letter() {
    let grid = GridConverter::new();
    let point = grid.utm_to_point("18N 583960 4511744").unwrap();
    std::assert!(point.lat > 40.0 && point.lat < 41.0);
    std::assert!(point.lon > -74.5 && point.lon < -73.5);
}

#[test]
fn test_utm_text_with_band_letter() {
    let grid = GridConverter::new();
    // Band T covers 40-48 degrees north, so this reads as northern
    let point = grid.utm_to_point("18T 583960 4511744").unwrap();
    std::assert!(point.lat > 40.0 && point.lat < 41.0);
}

#[test]
fn test_utm_text_southern_band() {
    let grid = GridConverter::new();
    // Band H is southern; the same numbers land below the equator
    let point = grid.utm_to_point("56H 334873 6252266").unwrap();
    std::assert!(point.lat < 0.0);
}

#[test]
fn test_utm_text_tolerates_suffixes_and_commas() {
    let grid = GridConverter::new();
    let plain = grid.utm_to_point("18N 583960 4511744").unwrap();
    let suffixed = grid.utm_to_point("18N 583960mE, 4511744mN").unwrap();
    std::assert!((plain.lat - suffixed.lat).abs() < 1e-9);
    std::assert!((plain.lon - suffixed.lon).abs() < 1e-9);
}

#[test]
fn test_utm_rejects_garbage() {
    let grid = GridConverter::new();
    std::assert!(grid.utm_to_point("not utm").is_err());
    std::assert!(grid.utm_to_point("18N").is_err());
    std::assert!(grid.utm_to_point("").is_err());
}

#[test]
fn test_mgrs_encode_decode_agree() {
    let grid = GridConverter::new();
    let original = GeoPoint::new(40.748333, -73.985278);
    let text = grid.point_to_mgrs(&original).unwrap();
    let back = grid.mgrs_to_point(&text).unwrap();
    std::assert!((back.lat - original.lat).abs() < 1e-4);
    std::assert!((back.lon - original.lon).abs() < 1e-4);
}

#[test]
fn test_utm_render_shape() {
    let grid = GridConverter::new();
    let text = grid.point_to_utm(&GeoPoint::new(40.748333, -73.985278)).unwrap();
    std::assert!(text.starts_with("18N "));
    std::assert_eq!(text.split_whitespace().count(), 3);
}

#[test]
fn test_polar_point_renders_without_zone() {
    let grid = GridConverter::new();
    // Inside the UPS cap, beyond 84 degrees north
    let text = grid.point_to_utm(&GeoPoint::new(87.0, 30.0)).unwrap();
    std::assert!(text.starts_with("N "));
    let back = grid.utm_to_point(&text).unwrap();
    std::assert!((back.lat - 87.0).abs() < 1e-3);
}
