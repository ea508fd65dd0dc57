//! Decoder for UNDEFINED values

use crate::exif::constants::field_types;
use crate::exif::record::TagRecord;
use super::formatters;
use super::handler::FieldDecoder;

/// UNDEFINED decoder (field type 7)
///
/// Only tags with a known one-byte meaning are interpreted; the rest print `-`.
pub struct UndefinedDecoder;

impl FieldDecoder for UndefinedDecoder {
    fn decode(&self, record: &TagRecord) -> String {
        match formatters::undefined_formatter(record.id) {
            Some(format) => format(record.first_byte()),
            None => "-".to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "UNDEFINED"
    }

    fn field_type(&self) -> u16 {
        field_types::UNDEFINED
    }
}
