//! Tag value decoding
//!
//! Dispatches a record to the decoder for its field type. Field types
//! without a decoder produce an empty value; the record still counts as
//! decoded.

use std::collections::HashMap;
use log::{debug, trace};

use crate::exif::decoders::{DecoderFactory, FieldDecoder};
use crate::exif::record::{field_type_name, TagRecord};

/// Field type indexed set of value decoders
pub struct TagDecoder {
    decoders: HashMap<u16, Box<dyn FieldDecoder>>,
}

impl TagDecoder {
    /// Creates a decoder covering every supported field type
    pub fn new() -> Self {
        let decoders = DecoderFactory::get_available_decoders()
            .into_iter()
            .map(|d| (d.field_type(), d))
            .collect();

        TagDecoder { decoders }
    }

    /// Formats a record's value
    pub fn decode(&self, record: &TagRecord) -> String {
        match self.decoders.get(&record.field_type) {
            Some(decoder) => {
                let value = decoder.decode(record);
                trace!("Decoded {:#06x} as {}: {:?}", record.id, decoder.name(), value);
                value
            }
            None => {
                debug!("No decoder for field type {} ({}) on tag {:#06x}",
                       record.field_type, field_type_name(record.field_type), record.id);
                String::new()
            }
        }
    }

    /// Checks if a field type has a decoder
    pub fn supports(&self, field_type: u16) -> bool {
        self.decoders.contains_key(&field_type)
    }
}

impl Default for TagDecoder {
    fn default() -> Self {
        Self::new()
    }
}
