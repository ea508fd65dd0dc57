//! Raw tag record structures
//!
//! A tag record is one resolved entry of an EXIF metadata block: the tag
//! identifier, its declared field type, and the value bytes already fetched
//! from wherever the container stored them.

use log::trace;

use crate::exif::constants::field_types;

/// One tag entry with its value bytes resolved
///
/// Multi-byte values are expected in little-endian order. `byte_length`
/// mirrors the container's declared size and normally equals
/// `raw_bytes.len()`; decoding only trusts the bytes themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    /// EXIF tag identifier
    pub id: u16,
    /// Field type code
    pub field_type: u16,
    /// Declared value length in bytes
    pub byte_length: u32,
    /// Value bytes
    pub raw_bytes: Vec<u8>,
}

impl TagRecord {
    /// Creates a record whose declared length matches its bytes
    pub fn new(id: u16, field_type: u16, raw_bytes: Vec<u8>) -> Self {
        let byte_length = raw_bytes.len() as u32;
        trace!("Creating tag record: id={:#06x}, type={} ({}), length={}",
               id, field_type, field_type_name(field_type), byte_length);

        TagRecord {
            id,
            field_type,
            byte_length,
            raw_bytes,
        }
    }

    /// Creates a record with an explicit declared length
    ///
    /// Used when the container's declared size is carried through as-is.
    pub fn with_declared_length(id: u16, field_type: u16, byte_length: u32, raw_bytes: Vec<u8>) -> Self {
        TagRecord {
            id,
            field_type,
            byte_length,
            raw_bytes,
        }
    }

    /// Returns the first value byte, or 0 when there are none
    pub fn first_byte(&self) -> u8 {
        self.raw_bytes.first().copied().unwrap_or(0)
    }

    /// Returns a short human-readable description of this record
    pub fn description(&self) -> String {
        format!("Tag: {:#06x}, Type: {} ({}), Length: {}",
                self.id, self.field_type, field_type_name(self.field_type), self.byte_length)
    }
}

/// Get the name of a field type
pub fn field_type_name(field_type: u16) -> &'static str {
    match field_type {
        field_types::BYTE => "BYTE",
        field_types::ASCII => "ASCII",
        field_types::SHORT => "SHORT",
        field_types::LONG => "LONG",
        field_types::RATIONAL => "RATIONAL",
        field_types::SBYTE => "SBYTE",
        field_types::UNDEFINED => "UNDEFINED",
        field_types::SSHORT => "SSHORT",
        field_types::SLONG => "SLONG",
        field_types::SRATIONAL => "SRATIONAL",
        field_types::FLOAT => "FLOAT",
        field_types::DOUBLE => "DOUBLE",
        _ => "Unknown",
    }
}
