//! Coordinate conversion command
//!
//! This module implements the default command: convert a coordinate
//! string from its declared format into every display format.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::convert::errors::{ConvertError, ConvertResult};
use crate::convert::{CoordinateConverter, GridConverter, SourceFormat};
use crate::utils::logger::Logger;

/// Command for converting a coordinate between formats
pub struct ConvertCommand<'a> {
    /// Coordinate text to convert
    coordinate: String,
    /// Format the input is in, if any
    format: Option<SourceFormat>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ConvertResult<Self> {
        let coordinate = args.get_one::<String>("coordinate")
            .ok_or_else(|| ConvertError::GenericError("Missing input coordinate".to_string()))?
            .clone();

        let format_name = args.get_one::<String>("format")
            .map(String::as_str)
            .unwrap_or("");
        let format = SourceFormat::parse_name(format_name)?;

        Ok(ConvertCommand {
            coordinate,
            format,
            logger,
        })
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> ConvertResult<()> {
        let format = match self.format {
            Some(format) => format,
            None => {
                // Empty format name: the caller already holds canonical
                // data, echo it back unchanged
                println!("{}", self.coordinate);
                return Ok(());
            }
        };

        info!("Converting {} coordinate '{}'", format, self.coordinate);

        let converter = CoordinateConverter::new(GridConverter::new());
        let result = converter.convert(&self.coordinate, format)?;

        self.logger.print_conversion_result(&result)?;

        println!("DMS:     {}", result.dms);
        println!("Decimal: {}", result.decimal());
        println!("MGRS:    {}", result.mgrs);
        println!("UTM/UPS: {}", result.utm_ups);

        Ok(())
    }
}
