//! EXIF metadata decoding module
//!
//! This module turns raw EXIF tag records into named, human-readable
//! field values, and provides the reader that pulls those records out of
//! JPEG and TIFF data.

pub mod errors;
pub mod constants;
pub mod record;
pub mod rational;
pub mod tag_names;
pub mod decoders;
pub mod decoder;
pub mod extractor;
pub mod reader;
mod tests;

pub use errors::{ExifError, ExifResult};
pub use record::TagRecord;
pub use rational::Rational;
pub use tag_names::TagNameTable;
pub use decoder::TagDecoder;
pub use extractor::{extract, ExifExtractor};
pub use reader::ExifReader;
