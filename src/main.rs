use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

// Import from your library
use coordkit::utils::logger::Logger;
use coordkit::commands::{CommandFactory, CoordkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("CoordKit")
        .version("1.0")
        .about("Convert coordinates between formats and measure distances")
        .arg(
            Arg::new("coordinate")
                .help("Input coordinate text")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Input coordinate format (degrees, decimal, mgrs, utm); empty echoes the input unchanged")
                .value_name("FORMAT")
                .default_value("decimal")
                .required(false),
        )
        .arg(
            Arg::new("distance")
                .short('d')
                .long("distance")
                .help("Measure distance from the input coordinate to --to")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("End coordinate for distance measurement")
                .value_name("COORDINATE")
                .required(false),
        )
        .arg(
            Arg::new("measure")
                .short('m')
                .long("measure")
                .help("Convert a measurement magnitude between units")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("value")
                .long("value")
                .help("Measurement magnitude for unit conversion (defaults to 0)")
                .value_name("VALUE")
                .required(false),
        )
        .arg(
            Arg::new("from-unit")
                .long("from-unit")
                .help("Unit the measurement magnitude is in")
                .value_name("UNIT")
                .default_value("meters")
                .required(false),
        )
        .arg(
            Arg::new("units")
                .short('u')
                .long("units")
                .help("Output unit (meters, kilometers, feet, yards, miles, nautical miles)")
                .value_name("UNIT")
                .default_value("meters")
                .required(false),
        )
        .get_matches();

    let log_file = "coordkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("coordkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = CoordkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
