//! Factory for creating field decoders

use crate::exif::constants::field_types;
use super::handler::FieldDecoder;
use super::integer::{ByteDecoder, LongDecoder, ShortDecoder, SignedLongDecoder};
use super::rational::{RationalDecoder, SignedRationalDecoder};
use super::text::AsciiDecoder;
use super::undefined::UndefinedDecoder;

/// Factory for creating field decoders
pub struct DecoderFactory;

impl DecoderFactory {
    /// Create a decoder for the given field type, if one is supported
    pub fn create_decoder(field_type: u16) -> Option<Box<dyn FieldDecoder>> {
        match field_type {
            field_types::BYTE => Some(Box::new(ByteDecoder)),
            field_types::ASCII => Some(Box::new(AsciiDecoder)),
            field_types::SHORT => Some(Box::new(ShortDecoder)),
            field_types::LONG => Some(Box::new(LongDecoder)),
            field_types::RATIONAL => Some(Box::new(RationalDecoder)),
            field_types::UNDEFINED => Some(Box::new(UndefinedDecoder)),
            field_types::SLONG => Some(Box::new(SignedLongDecoder)),
            field_types::SRATIONAL => Some(Box::new(SignedRationalDecoder)),
            _ => None,
        }
    }

    /// Get all available field decoders
    pub fn get_available_decoders() -> Vec<Box<dyn FieldDecoder>> {
        vec![
            Box::new(ByteDecoder),
            Box::new(AsciiDecoder),
            Box::new(ShortDecoder),
            Box::new(LongDecoder),
            Box::new(RationalDecoder),
            Box::new(UndefinedDecoder),
            Box::new(SignedLongDecoder),
            Box::new(SignedRationalDecoder),
        ]
    }
}
