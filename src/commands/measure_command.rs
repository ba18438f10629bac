//! Unit conversion command
//!
//! This module implements the command for converting a measurement
//! magnitude between display units.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::convert::errors::{ConvertError, ConvertResult};
use crate::measure::LengthUnit;
use crate::utils::logger::Logger;

/// Command for converting measurement magnitudes between units
pub struct MeasureCommand<'a> {
    /// Magnitude to convert
    value: f64,
    /// Unit the magnitude is in
    from_unit: LengthUnit,
    /// Unit to convert into
    to_unit: LengthUnit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> MeasureCommand<'a> {
    /// Create a new measure command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new MeasureCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ConvertResult<Self> {
        // A missing magnitude defaults to 0
        let value = match args.get_one::<String>("value") {
            Some(text) => text.parse::<f64>()
                .map_err(|_| ConvertError::GenericError(
                    format!("Invalid measurement value: {}", text)))?,
            None => 0.0,
        };

        let from_unit = args.get_one::<String>("from-unit")
            .map(String::as_str)
            .map(LengthUnit::from_name)
            .unwrap_or(LengthUnit::Meters);

        let to_unit = args.get_one::<String>("units")
            .map(String::as_str)
            .map(LengthUnit::from_name)
            .unwrap_or(LengthUnit::Meters);

        Ok(MeasureCommand {
            value,
            from_unit,
            to_unit,
            logger,
        })
    }
}

impl<'a> Command for MeasureCommand<'a> {
    fn execute(&self) -> ConvertResult<()> {
        info!("Converting {} {} to {}",
              self.value, self.from_unit.name(), self.to_unit.name());

        let meters = self.from_unit.to_meters(self.value);
        let converted = self.to_unit.from_meters(meters);

        self.logger.log(&format!(
            "{} {} = {} {}", self.value, self.from_unit.name(), converted, self.to_unit.name()))?;

        println!("{} {}", converted, self.to_unit.name());

        Ok(())
    }
}
