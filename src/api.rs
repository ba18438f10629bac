use log::info;

use crate::convert::errors::ConvertResult;
use crate::convert::{ConversionResult, CoordinateConverter, GeoPoint, GridConverter, SourceFormat};
use crate::measure::{distance_between, distance_between_text, LengthUnit};
use crate::utils::logger::Logger;

/// Main interface to the CoordKit library
pub struct CoordKit {
    logger: Logger,
    converter: CoordinateConverter,
}

impl CoordKit {
    /// Create a new CoordKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "coordkit.log"
    ///
    /// # Returns
    /// A CoordKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> ConvertResult<Self> {
        let log_path = log_file.unwrap_or("coordkit.log");
        let logger = Logger::new(log_path)?;
        Ok(CoordKit {
            logger,
            converter: CoordinateConverter::new(GridConverter::new()),
        })
    }

    /// Convert a coordinate string and return a formatted report
    ///
    /// An empty format name means the caller already holds canonical data,
    /// so the input is returned unchanged. Otherwise the coordinate is
    /// decoded from the named format and re-encoded into every display
    /// format.
    ///
    /// # Arguments
    /// * `coordinate` - The coordinate text to convert
    /// * `format_name` - One of "degrees", "decimal", "mgrs", "utm", or ""
    ///
    /// # Returns
    /// String containing the conversion report or an error
    pub fn convert(&self, coordinate: &str, format_name: &str) -> ConvertResult<String> {
        let format = match SourceFormat::parse_name(format_name)? {
            Some(format) => format,
            None => return Ok(coordinate.to_string()),
        };

        let result = self.converter.convert(coordinate, format)?;
        self.logger.print_conversion_result(&result)?;

        let mut report = String::from("Coordinate Conversion Results:\n");
        report.push_str(&format!("  DMS:     {}\n", result.dms));
        report.push_str(&format!("  Decimal: {}\n", result.decimal()));
        report.push_str(&format!("  MGRS:    {}\n", result.mgrs));
        report.push_str(&format!("  UTM/UPS: {}\n", result.utm_ups));

        Ok(report)
    }

    /// Convert a coordinate string into the typed result
    ///
    /// # Arguments
    /// * `coordinate` - The coordinate text to convert
    /// * `format` - The format the text is in
    ///
    /// # Returns
    /// The position in every display format, or an error
    pub fn convert_coordinate(
        &self,
        coordinate: &str,
        format: SourceFormat,
    ) -> ConvertResult<ConversionResult> {
        self.converter.convert(coordinate, format)
    }

    /// Distance between two coordinate strings, in the requested unit
    ///
    /// # Arguments
    /// * `from` - Start coordinate text
    /// * `to` - End coordinate text
    /// * `format_name` - Format both endpoints are in
    /// * `unit_name` - Output unit name; unknown names mean meters
    ///
    /// # Returns
    /// The distance in the requested unit, or an error
    pub fn distance(
        &self,
        from: &str,
        to: &str,
        format_name: &str,
        unit_name: &str,
    ) -> ConvertResult<f64> {
        let format: SourceFormat = format_name.parse()?;
        let meters = distance_between_text(from, to, format, &self.converter)?;
        let unit = LengthUnit::from_name(unit_name);
        info!("Distance: {} m ({} {})", meters, unit.from_meters(meters), unit.name());
        Ok(unit.from_meters(meters))
    }

    /// Distance between two already-decoded points, in the requested unit
    ///
    /// # Arguments
    /// * `from` - Start point
    /// * `to` - End point
    /// * `unit_name` - Output unit name; unknown names mean meters
    ///
    /// # Returns
    /// The distance in the requested unit
    pub fn distance_points(&self, from: &GeoPoint, to: &GeoPoint, unit_name: &str) -> f64 {
        LengthUnit::from_name(unit_name).from_meters(distance_between(from, to))
    }

    /// Convert a measurement magnitude between units
    ///
    /// A missing magnitude defaults to 0.
    ///
    /// # Arguments
    /// * `value` - Magnitude to convert, if any
    /// * `from_unit` - Unit the magnitude is in; unknown names mean meters
    /// * `to_unit` - Unit to convert into; unknown names mean meters
    ///
    /// # Returns
    /// The magnitude expressed in the target unit
    pub fn convert_units(&self, value: Option<f64>, from_unit: &str, to_unit: &str) -> f64 {
        let meters = LengthUnit::from_name(from_unit).to_meters(value.unwrap_or(0.0));
        LengthUnit::from_name(to_unit).from_meters(meters)
    }
}
