//! Tests for great-circle distance

extern crate std;

use crate::convert::{CoordinateConverter, GeoPoint, GridConverter, SourceFormat};
use crate::measure::distance::{
    distance_between, distance_between_text, distance_to_degrees, distance_to_radians,
    EARTH_MEAN_RADIUS_METERS,
};

#[test]
fn test_one_degree_of_longitude_at_equator() {
    let meters = distance_between(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 1.0));
    std::assert!((meters - 111_195.0).abs() < 10.0);
}

#[test]
fn test_zero_distance() {
    let point = GeoPoint::new(40.748333, -73.985278);
    std::assert_eq!(distance_between(&point, &point), 0.0);
}

#[test]
fn test_distance_is_symmetric() {
    let a = GeoPoint::new(40.748333, -73.985278);
    let b = GeoPoint::new(38.897700, -77.036500);
    let forward = distance_between(&a, &b);
    let backward = distance_between(&b, &a);
    std::assert!((forward - backward).abs() < 1e-6);
}

#[test]
fn test_new_york_to_washington() {
    // Midtown Manhattan to the White House, roughly 332 km
    let a = GeoPoint::new(40.748333, -73.985278);
    let b = GeoPoint::new(38.897700, -77.036500);
    let meters = distance_between(&a, &b);
    std::assert!(meters > 325_000.0 && meters < 340_000.0);
}

#[test]
fn test_antipodal_distance_is_half_circumference() {
    let meters = distance_between(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 180.0));
    let half_circumference = std::f64::consts::PI * EARTH_MEAN_RADIUS_METERS;
    std::assert!((meters - half_circumference).abs() < 1.0);
}

#[test]
fn test_distance_between_text_converts_endpoints() {
    let converter = CoordinateConverter::new(GridConverter::new());
    let meters =
        distance_between_text("0.0 0.0", "0.0 1.0", SourceFormat::Decimal, &converter).unwrap();
    std::assert!((meters - 111_195.0).abs() < 10.0);
}

#[test]
fn test_distance_between_text_rejects_bad_endpoint() {
    let converter = CoordinateConverter::new(GridConverter::new());
    let result = distance_between_text("0.0 0.0", "garbage", SourceFormat::Decimal, &converter);
    std::assert!(result.is_err());
}

#[test]
fn test_angular_re_expression() {
    let radians = distance_to_radians(EARTH_MEAN_RADIUS_METERS);
    std::assert!((radians - 1.0).abs() < 1e-12);

    let degrees = distance_to_degrees(111_195.0);
    std::assert!((degrees - 1.0).abs() < 1e-3);
}
