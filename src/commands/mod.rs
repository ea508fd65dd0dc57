//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod dump_command;
pub mod field_command;
pub mod date_command;

pub use command_traits::{Command, CommandFactory};
pub use dump_command::DumpCommand;
pub use field_command::FieldCommand;
pub use date_command::DateCommand;

use clap::ArgMatches;
use log::{debug, warn};

use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::extractor::ExifExtractor;
use crate::exif::reader::ExifReader;
use crate::exif::tag_names::TagNameTable;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct ExifkitCommandFactory;

impl ExifkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ExifkitCommandFactory
    }
}

impl Default for ExifkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for ExifkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> ExifResult<Box<dyn Command + 'a>> {
        if args.get_flag("date") {
            Ok(Box::new(DateCommand::new(args, logger)?))
        } else if args.get_one::<String>("field").is_some() {
            Ok(Box::new(FieldCommand::new(args, logger)?))
        } else {
            // Default to dumping every field
            Ok(Box::new(DumpCommand::new(args, logger)?))
        }
    }
}

/// Options shared by every command: what to read and how to name it
pub struct InputOptions {
    /// Input files in command-line order
    pub inputs: Vec<String>,
    /// Separator placed after each raw text entry
    pub separator: String,
    /// Alternate tag name table, if one was given
    pub tag_names: Option<TagNameTable>,
}

impl InputOptions {
    /// Reads the shared options from CLI arguments
    pub fn from_args(args: &ArgMatches) -> ExifResult<Self> {
        let inputs: Vec<String> = args.get_many::<String>("input")
            .ok_or_else(|| ExifError::GenericError("Missing input file".to_string()))?
            .cloned()
            .collect();

        let separator = args.get_one::<String>("separator")
            .map(|s| unescape_separator(s))
            .unwrap_or_else(|| "\n".to_string());

        let tag_names = match args.get_one::<String>("tag-names") {
            Some(path) => {
                debug!("Loading tag names from {}", path);
                Some(TagNameTable::from_file(path)?)
            }
            None => None,
        };

        Ok(InputOptions { inputs, separator, tag_names })
    }

    /// Reads one input and extracts its fields
    pub fn extract(&self, path: &str) -> ExifResult<ExifExtractor> {
        let records = ExifReader::new().read_file(path)?;
        let extractor = match &self.tag_names {
            Some(names) => ExifExtractor::with_table(&records, &self.separator, names),
            None => ExifExtractor::new(&records, &self.separator),
        };
        Ok(extractor)
    }

    /// Runs `action` for every input, continuing past failures
    ///
    /// Returns an error naming the failure count if any input failed.
    pub fn for_each_input<F>(&self, description: &str, mut action: F) -> ExifResult<()>
    where
        F: FnMut(&str, &ProgressTracker) -> ExifResult<()>,
    {
        let progress = if self.inputs.len() > 1 {
            ProgressTracker::new(self.inputs.len() as u64, description)
        } else {
            ProgressTracker::hidden()
        };

        let mut failures = 0;
        for input in &self.inputs {
            progress.set_message(input);
            if let Err(e) = action(input, &progress) {
                warn!("File info {} could not be retrieved: {}", input, e);
                failures += 1;
            }
            progress.increment(1);
        }
        progress.finish();

        if failures > 0 {
            return Err(ExifError::GenericError(format!("{} of {} inputs failed", failures, self.inputs.len())));
        }
        Ok(())
    }
}

/// Turns the escape sequences `\n`, `\t` and `\r` into their characters
pub fn unescape_separator(raw: &str) -> String {
    raw.replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\r", "\r")
}
