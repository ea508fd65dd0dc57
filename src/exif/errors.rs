//! Custom error types for EXIF processing
//!
//! The decoding core never fails; these errors come from locating tag
//! records inside a container and from interpreting decoded fields.

use std::fmt;
use std::io;

/// EXIF-specific error types
#[derive(Debug)]
pub enum ExifError {
    /// I/O error
    IoError(io::Error),
    /// Input is neither a JPEG stream nor a TIFF block
    UnsupportedContainer,
    /// JPEG stream without an Exif APP1 segment
    MissingExifSegment,
    /// Invalid byte order marker
    InvalidByteOrder(u16),
    /// Unsupported TIFF version
    UnsupportedVersion(u16),
    /// Data ended before a required structure
    Truncated { offset: u64, needed: u64 },
    /// Named field not present in the extracted set
    FieldNotFound(String),
    /// Date/time field could not be interpreted
    InvalidDateTime(String),
    /// Tag name definitions could not be parsed
    InvalidDefinitions(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifError::IoError(e) => write!(f, "I/O error: {}", e),
            ExifError::UnsupportedContainer => write!(f, "Not a JPEG or TIFF stream"),
            ExifError::MissingExifSegment => write!(f, "No Exif segment found"),
            ExifError::InvalidByteOrder(v) => write!(f, "Invalid byte order marker: {:#06x}", v),
            ExifError::UnsupportedVersion(v) => write!(f, "Unsupported TIFF version: {}", v),
            ExifError::Truncated { offset, needed } => {
                write!(f, "Data truncated: {} bytes needed at offset {}", needed, offset)
            }
            ExifError::FieldNotFound(name) => write!(f, "Field not found: {}", name),
            ExifError::InvalidDateTime(value) => write!(f, "Date time is not valid: {:?}", value),
            ExifError::InvalidDefinitions(msg) => write!(f, "Invalid tag definitions: {}", msg),
            ExifError::GenericError(msg) => write!(f, "EXIF error: {}", msg),
        }
    }
}

impl std::error::Error for ExifError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExifError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExifError {
    fn from(error: io::Error) -> Self {
        ExifError::IoError(error)
    }
}

impl From<String> for ExifError {
    fn from(msg: String) -> Self {
        ExifError::GenericError(msg)
    }
}

/// Result type for EXIF operations
pub type ExifResult<T> = Result<T, ExifError>;
