pub mod io;
pub mod exif;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::ExifKit;

pub use exif::{extract, ExifError, ExifExtractor, ExifReader, ExifResult, Rational, TagDecoder, TagNameTable, TagRecord};
pub use utils::datetime_utils::CaptureStamp;
