//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod distance_command;
pub mod measure_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use distance_command::DistanceCommand;
pub use measure_command::MeasureCommand;

use clap::ArgMatches;
use crate::convert::errors::ConvertResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct CoordkitCommandFactory;

impl CoordkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CoordkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for CoordkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> ConvertResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("distance") {
            Ok(Box::new(DistanceCommand::new(args, logger)?))
        } else if args.get_flag("measure") {
            Ok(Box::new(MeasureCommand::new(args, logger)?))
        } else {
            // Default to coordinate conversion
            Ok(Box::new(ConvertCommand::new(args, logger)?))
        }
    }
}
