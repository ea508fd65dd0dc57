//! Capture date command
//!
//! Prints the normalized `YYYY.MM.DD HH.MM.SS` capture stamp of each input,
//! the key photos are grouped and renamed by.

use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::commands::InputOptions;
use crate::exif::errors::ExifResult;
use crate::utils::datetime_utils::CaptureStamp;
use crate::utils::logger::Logger;

/// Command for printing capture dates
pub struct DateCommand<'a> {
    /// Inputs and extraction settings
    options: InputOptions,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DateCommand<'a> {
    /// Create a new date command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExifResult<Self> {
        Ok(DateCommand {
            options: InputOptions::from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for DateCommand<'a> {
    fn execute(&self) -> ExifResult<()> {
        self.options.for_each_input("Reading capture dates", |input, progress| {
            let extractor = self.options.extract(input)?;
            let stamp = CaptureStamp::from_extractor(&extractor)?;

            self.logger.log(&format!("{}: {}", input, stamp))?;
            progress.println(&format!("{}\t{}\t{}", input, stamp.date, stamp.time));
            Ok(())
        })
    }
}
