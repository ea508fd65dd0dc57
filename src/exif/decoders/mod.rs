//! Field value decoding for EXIF tag records
//!
//! This module implements one decoding strategy per field type. Each
//! strategy may hand the converted value to a tag-specific formatter.

mod handler;
mod integer;
mod text;
mod rational;
mod undefined;
mod factory;
pub(crate) mod formatters;

pub use handler::FieldDecoder;
pub use integer::{ByteDecoder, LongDecoder, ShortDecoder, SignedLongDecoder};
pub use text::AsciiDecoder;
pub use rational::{RationalDecoder, SignedRationalDecoder};
pub use undefined::UndefinedDecoder;
pub use factory::DecoderFactory;
