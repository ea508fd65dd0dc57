//! Capture date utilities
//!
//! Normalizes the decoded `Date Time` field (`YYYY:MM:DD HH:MM:SS`) into
//! the dotted date and time parts used for grouping and naming photos.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::exif::constants::DATE_TIME_FIELD;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::extractor::ExifExtractor;

lazy_static! {
    // Digits sit at fixed positions; separators may be any single character
    static ref DATE_TIME_PATTERN: Regex =
        Regex::new(r"^(\d{4}).(\d{2}).(\d{2}).(\d{2}).(\d{2}).(\d{2})").expect("valid date time pattern");
}

/// Normalized capture date and time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureStamp {
    /// `YYYY.MM.DD`
    pub date: String,
    /// `HH.MM.SS`
    pub time: String,
}

impl CaptureStamp {
    /// Parses an EXIF date/time value
    ///
    /// Trailing NUL terminators are ignored.
    pub fn parse(value: &str) -> ExifResult<Self> {
        let trimmed = value.trim_end_matches('\0');
        let caps = DATE_TIME_PATTERN.captures(trimmed)
            .ok_or_else(|| ExifError::InvalidDateTime(value.to_string()))?;

        let part = |i: usize| -> ExifResult<u32> {
            caps[i].parse::<u32>().map_err(|_| ExifError::InvalidDateTime(value.to_string()))
        };

        Ok(CaptureStamp {
            date: format!("{:04}.{:02}.{:02}", part(1)?, part(2)?, part(3)?),
            time: format!("{:02}.{:02}.{:02}", part(4)?, part(5)?, part(6)?),
        })
    }

    /// Reads and parses the `Date Time` field of an extracted set
    pub fn from_extractor(extractor: &ExifExtractor) -> ExifResult<Self> {
        let value = extractor.get(DATE_TIME_FIELD)
            .ok_or_else(|| ExifError::FieldNotFound(DATE_TIME_FIELD.to_string()))?;
        Self::parse(value)
    }
}

impl fmt::Display for CaptureStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}
