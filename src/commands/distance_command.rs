//! Distance measurement command
//!
//! This module implements the command for measuring the great-circle
//! distance between two coordinates.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::convert::errors::{ConvertError, ConvertResult};
use crate::convert::{CoordinateConverter, GridConverter, SourceFormat};
use crate::measure::{distance_between_text, round_altitude, LengthUnit};
use crate::utils::logger::Logger;

/// Command for measuring distance between two coordinates
pub struct DistanceCommand<'a> {
    /// Start coordinate text
    from: String,
    /// End coordinate text
    to: String,
    /// Format both endpoints are in
    format: SourceFormat,
    /// Unit to report the distance in
    unit: LengthUnit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DistanceCommand<'a> {
    /// Create a new distance command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new DistanceCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ConvertResult<Self> {
        let from = args.get_one::<String>("coordinate")
            .ok_or_else(|| ConvertError::GenericError("Missing start coordinate".to_string()))?
            .clone();

        let to = args.get_one::<String>("to")
            .ok_or_else(|| ConvertError::GenericError(
                "Missing end coordinate. Use --to".to_string()))?
            .clone();

        let format = args.get_one::<String>("format")
            .map(String::as_str)
            .unwrap_or("decimal")
            .parse::<SourceFormat>()?;

        let unit = args.get_one::<String>("units")
            .map(String::as_str)
            .map(LengthUnit::from_name)
            .unwrap_or(LengthUnit::Meters);

        Ok(DistanceCommand {
            from,
            to,
            format,
            unit,
            logger,
        })
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn execute(&self) -> ConvertResult<()> {
        info!("Measuring distance from '{}' to '{}' ({} format)",
              self.from, self.to, self.format);

        let converter = CoordinateConverter::new(GridConverter::new());
        let meters = distance_between_text(&self.from, &self.to, self.format, &converter)?;
        let converted = self.unit.from_meters(meters);

        self.logger.log(&format!(
            "Distance from '{}' to '{}': {} m", self.from, self.to, meters))?;

        if self.unit == LengthUnit::Meters {
            println!("{} meters", round_altitude(meters));
        } else {
            println!("{} {} ({} meters)", converted, self.unit.name(), round_altitude(meters));
        }

        Ok(())
    }
}
