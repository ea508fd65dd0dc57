//! Decoder for ASCII values

use crate::exif::constants::field_types;
use crate::exif::record::TagRecord;
use super::handler::FieldDecoder;

/// ASCII decoder (field type 2)
///
/// Bytes are taken as 7-bit text; anything above 0x7F becomes `?`.
/// NUL terminators stay in the value.
pub struct AsciiDecoder;

impl FieldDecoder for AsciiDecoder {
    fn decode(&self, record: &TagRecord) -> String {
        record.raw_bytes
            .iter()
            .map(|&b| if b.is_ascii() { b as char } else { '?' })
            .collect()
    }

    fn name(&self) -> &'static str {
        "ASCII"
    }

    fn field_type(&self) -> u16 {
        field_types::ASCII
    }
}
