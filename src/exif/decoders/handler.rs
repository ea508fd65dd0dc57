//! Field decoder trait definition

use crate::exif::record::TagRecord;

/// Strategy trait for turning one field type's bytes into display text
pub trait FieldDecoder: Send + Sync {
    /// Format the record's value
    fn decode(&self, record: &TagRecord) -> String;

    /// Get the name of the field type this decoder handles
    fn name(&self) -> &'static str;

    /// Get the field type code
    fn field_type(&self) -> u16;
}
