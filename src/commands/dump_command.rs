//! Full field dump command
//!
//! Prints the raw text rendering of every decoded tag for each input.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::InputOptions;
use crate::exif::errors::ExifResult;
use crate::utils::logger::Logger;

/// Command for printing all decoded fields
pub struct DumpCommand<'a> {
    /// Inputs and extraction settings
    options: InputOptions,
    /// Whether to print a header per input
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DumpCommand<'a> {
    /// Create a new dump command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new DumpCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExifResult<Self> {
        Ok(DumpCommand {
            options: InputOptions::from_args(args)?,
            verbose: args.get_flag("verbose"),
            logger,
        })
    }
}

impl<'a> Command for DumpCommand<'a> {
    fn execute(&self) -> ExifResult<()> {
        let show_header = self.verbose || self.options.inputs.len() > 1;

        self.options.for_each_input("Dumping EXIF fields", |input, progress| {
            let extractor = self.options.extract(input)?;
            info!("{}: {} fields", input, extractor.count());
            self.logger.log_fields(input, &extractor)?;

            let mut output = String::new();
            if show_header {
                output.push_str(&format!("== {} ==\n", input));
            }
            output.push_str(extractor.raw_text().trim_end_matches('\n'));
            progress.println(&output);
            Ok(())
        })
    }
}
