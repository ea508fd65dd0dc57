//! EXIF format constants
//!
//! Numeric codes for field types, the tags that carry special formatting,
//! and the container markers used to locate the tag block.

/// Field types as defined in the TIFF 6.0 / EXIF 2.3 standards
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit byte containing ASCII character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const SBYTE: u16 = 6;      // 8-bit signed integer
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SSHORT: u16 = 8;     // 16-bit signed integer
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator
    pub const FLOAT: u16 = 11;     // Single precision IEEE floating point
    pub const DOUBLE: u16 = 12;    // Double precision IEEE floating point
}

/// Tags referenced by the decoder and the container reader
pub mod tags {
    // IFD0
    pub const X_RESOLUTION: u16 = 0x011A;
    pub const DATE_TIME: u16 = 0x0132;
    pub const EXIF_IFD_POINTER: u16 = 0x8769;
    pub const GPS_IFD_POINTER: u16 = 0x8825;

    // Exif sub-IFD
    pub const EXPOSURE_TIME: u16 = 0x829A;
    pub const F_NUMBER: u16 = 0x829D;
    pub const EXPOSURE_PROGRAM: u16 = 0x8822;
    pub const ISO_SPEED: u16 = 0x8827;
    pub const EXIF_VERSION: u16 = 0x9000;
    pub const SHUTTER_SPEED_VALUE: u16 = 0x9201;
    pub const APERTURE_VALUE: u16 = 0x9202;
    pub const BRIGHTNESS_VALUE: u16 = 0x9203;
    pub const EXPOSURE_BIAS_VALUE: u16 = 0x9204;
    pub const MAX_APERTURE_VALUE: u16 = 0x9205;
    pub const METERING_MODE: u16 = 0x9207;
    pub const LIGHT_SOURCE: u16 = 0x9208;
    pub const FLASH: u16 = 0x9209;
    pub const FOCAL_LENGTH: u16 = 0x920A;
    pub const SENSING_METHOD: u16 = 0xA217;
    pub const FILE_SOURCE: u16 = 0xA300;
    pub const SCENE_TYPE: u16 = 0xA301;
}

/// Container header constants
pub mod header {
    /// Standard TIFF version number (42)
    pub const TIFF_VERSION: u16 = 42;

    /// "II" byte order marker for little-endian
    pub const LITTLE_ENDIAN_MARKER: [u8; 2] = [0x49, 0x49];

    /// "MM" byte order marker for big-endian
    pub const BIG_ENDIAN_MARKER: [u8; 2] = [0x4D, 0x4D];

    /// JPEG start of image marker
    pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

    /// JPEG APP1 marker byte (follows 0xFF)
    pub const JPEG_APP1: u8 = 0xE1;

    /// JPEG start of scan marker byte; no metadata segments follow it
    pub const JPEG_SOS: u8 = 0xDA;

    /// Identifier that opens an Exif APP1 payload
    pub const EXIF_IDENTIFIER: &[u8; 6] = b"Exif\0\0";
}

/// Name under which the capture date/time is published
pub const DATE_TIME_FIELD: &str = "Date Time";

/// Returns the size in bytes of a single value of the given field type
///
/// Unknown types count as one byte, so their values are fetched as opaque bytes.
pub fn field_type_size(field_type: u16) -> usize {
    match field_type {
        field_types::BYTE | field_types::ASCII | field_types::SBYTE | field_types::UNDEFINED => 1,
        field_types::SHORT | field_types::SSHORT => 2,
        field_types::LONG | field_types::SLONG | field_types::FLOAT => 4,
        field_types::RATIONAL | field_types::SRATIONAL | field_types::DOUBLE => 8,
        _ => 1,
    }
}

/// Returns the width of the integer units a value of this type is built from
///
/// Rationals are two 32-bit halves, so their byte order is swapped per half.
pub fn field_type_unit_width(field_type: u16) -> usize {
    match field_type {
        field_types::RATIONAL | field_types::SRATIONAL => 4,
        other => field_type_size(other),
    }
}
