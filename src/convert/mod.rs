//! Coordinate format handling
//!
//! This module provides the conversion core: decoding coordinate text in
//! any supported format to a canonical point and re-encoding it into all
//! display formats at once.

pub mod errors;
mod point;
mod format;
mod dms;
mod grid;
mod converter;
mod tests;

// Re-export key types
pub use self::converter::{ConversionResult, CoordinateConverter};
pub use self::format::SourceFormat;
pub use self::grid::{GridConverter, MGRS_PRECISION};
pub use self::point::GeoPoint;
pub use self::dms::{format_latitude, format_longitude, parse_dms};
