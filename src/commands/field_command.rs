//! Single field lookup command

use clap::ArgMatches;
use log::debug;

use crate::commands::command_traits::Command;
use crate::commands::InputOptions;
use crate::exif::errors::{ExifError, ExifResult};
use crate::utils::logger::Logger;

/// Command for printing one named field per input
pub struct FieldCommand<'a> {
    /// Inputs and extraction settings
    options: InputOptions,
    /// Field to look up, e.g. "Date Time"
    field: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> FieldCommand<'a> {
    /// Create a new field command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExifResult<Self> {
        let field = args.get_one::<String>("field")
            .ok_or_else(|| ExifError::GenericError("Missing field name".to_string()))?
            .clone();

        Ok(FieldCommand {
            options: InputOptions::from_args(args)?,
            field,
            logger,
        })
    }
}

impl<'a> Command for FieldCommand<'a> {
    fn execute(&self) -> ExifResult<()> {
        self.options.for_each_input("Looking up field", |input, progress| {
            let extractor = self.options.extract(input)?;
            let value = extractor.get(&self.field)
                .ok_or_else(|| ExifError::FieldNotFound(self.field.clone()))?;
            let value = value.trim_end_matches('\0');

            debug!("{} {} = {:?}", input, self.field, value);
            self.logger.log(&format!("{}: {} = {}", input, self.field, value))?;
            progress.println(&format!("{}\t{}", input, value));
            Ok(())
        })
    }
}
