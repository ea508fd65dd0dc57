//! Decoders for the integer field types

use crate::exif::constants::field_types;
use crate::exif::record::TagRecord;
use crate::utils::byte_utils;
use super::formatters;
use super::handler::FieldDecoder;

/// BYTE decoder (field type 1): the first byte as an integer
pub struct ByteDecoder;

impl FieldDecoder for ByteDecoder {
    fn decode(&self, record: &TagRecord) -> String {
        record.first_byte().to_string()
    }

    fn name(&self) -> &'static str {
        "BYTE"
    }

    fn field_type(&self) -> u16 {
        field_types::BYTE
    }
}

/// SHORT decoder (field type 3)
///
/// Enumerated tags are translated; everything else prints the number.
pub struct ShortDecoder;

impl FieldDecoder for ShortDecoder {
    fn decode(&self, record: &TagRecord) -> String {
        let value = byte_utils::to_u16(&record.raw_bytes);
        match formatters::short_formatter(record.id) {
            Some(format) => format(value),
            None => value.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "SHORT"
    }

    fn field_type(&self) -> u16 {
        field_types::SHORT
    }
}

/// LONG decoder (field type 4)
pub struct LongDecoder;

impl FieldDecoder for LongDecoder {
    fn decode(&self, record: &TagRecord) -> String {
        byte_utils::to_u32(&record.raw_bytes).to_string()
    }

    fn name(&self) -> &'static str {
        "LONG"
    }

    fn field_type(&self) -> u16 {
        field_types::LONG
    }
}

/// SLONG decoder (field type 9)
pub struct SignedLongDecoder;

impl FieldDecoder for SignedLongDecoder {
    fn decode(&self, record: &TagRecord) -> String {
        byte_utils::to_i32(&record.raw_bytes).to_string()
    }

    fn name(&self) -> &'static str {
        "SLONG"
    }

    fn field_type(&self) -> u16 {
        field_types::SLONG
    }
}
