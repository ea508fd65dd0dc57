use clap::{Arg, Command as ClapCommand, ArgAction};
use log::{error, LevelFilter};
use std::process;

use exifkit::utils::logger::Logger;
use exifkit::commands::{CommandFactory, ExifkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("ExifKit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Decode EXIF metadata of JPEG/TIFF photos")
        .arg(
            Arg::new("input")
                .help("Input JPEG or TIFF files")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("separator")
                .short('s')
                .long("separator")
                .help("Separator after each field in the dump (\\n, \\t escapes allowed)")
                .value_name("SEP")
                .default_value("\\n"),
        )
        .arg(
            Arg::new("field")
                .short('f')
                .long("field")
                .help("Print only this field, e.g. \"Date Time\"")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("date")
                .short('d')
                .long("date")
                .help("Print the normalized capture date and time")
                .action(ArgAction::SetTrue)
                .conflicts_with("field"),
        )
        .arg(
            Arg::new("tag-names")
                .long("tag-names")
                .help("TOML file with an alternate [tag_names] table")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let log_file = "exifkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = Logger::init_global_logger("exifkit-global.log", level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = ExifkitCommandFactory::new();

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
