//! Decoders for RATIONAL and SRATIONAL values
//!
//! The value buffer is split at its midpoint: the first half holds the
//! numerator, the second the denominator. Halves that are not exactly four
//! bytes read as zero, so multi-valued rationals render as `0/0`.

use crate::exif::constants::field_types;
use crate::exif::rational::Rational;
use crate::exif::record::TagRecord;
use crate::utils::byte_utils;
use super::formatters;
use super::handler::FieldDecoder;

/// RATIONAL decoder (field type 5)
pub struct RationalDecoder;

impl RationalDecoder {
    /// Builds the unsigned fraction carried by a record
    pub fn rational(record: &TagRecord) -> Rational {
        let (numerator, denominator) = byte_utils::split_halves(&record.raw_bytes);
        Rational::from_unsigned(byte_utils::to_u32(numerator), byte_utils::to_u32(denominator))
    }
}

impl FieldDecoder for RationalDecoder {
    fn decode(&self, record: &TagRecord) -> String {
        let r = Self::rational(record);
        match formatters::rational_formatter(record.id) {
            Some(format) => format(&r),
            None => r.to_string_with("/"),
        }
    }

    fn name(&self) -> &'static str {
        "RATIONAL"
    }

    fn field_type(&self) -> u16 {
        field_types::RATIONAL
    }
}

/// SRATIONAL decoder (field type 10)
///
/// The sign lands where reduction leaves it: -1/3 renders as `1/-3`.
pub struct SignedRationalDecoder;

impl SignedRationalDecoder {
    /// Builds the signed fraction carried by a record
    pub fn rational(record: &TagRecord) -> Rational {
        let (numerator, denominator) = byte_utils::split_halves(&record.raw_bytes);
        Rational::new(byte_utils::to_i32(numerator), byte_utils::to_i32(denominator))
    }
}

impl FieldDecoder for SignedRationalDecoder {
    fn decode(&self, record: &TagRecord) -> String {
        let r = Self::rational(record);
        match formatters::srational_formatter(record.id) {
            Some(format) => format(&r),
            None => r.to_string_with("/"),
        }
    }

    fn name(&self) -> &'static str {
        "SRATIONAL"
    }

    fn field_type(&self) -> u16 {
        field_types::SRATIONAL
    }
}
