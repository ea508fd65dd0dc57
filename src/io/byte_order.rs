//! Byte order handling for TIFF-structured EXIF blocks
//!
//! The block's byte order only matters while walking its directories. Each
//! strategy reads directory entries in its own order and then normalizes the
//! fetched value bytes, so every tag record leaves the reader little-endian.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{Read, Result};

use crate::exif::constants::{field_type_size, field_type_unit_width, header};
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::seekable::SeekableReader;
use crate::utils::byte_utils;

/// Byte order of an EXIF block, taken from its `II`/`MM` marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Intel order (II)
    LittleEndian,
    /// Motorola order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Reads the two-byte marker at the reader's position
    pub fn detect(reader: &mut dyn SeekableReader) -> ExifResult<Self> {
        let mut marker = [0u8; 2];
        reader.read_exact(&mut marker)?;
        Self::from_marker(marker)
    }

    /// Maps a marker to its byte order
    pub fn from_marker(marker: [u8; 2]) -> ExifResult<Self> {
        if marker == header::LITTLE_ENDIAN_MARKER {
            Ok(ByteOrder::LittleEndian)
        } else if marker == header::BIG_ENDIAN_MARKER {
            Ok(ByteOrder::BigEndian)
        } else {
            Err(ExifError::InvalidByteOrder(u16::from_le_bytes(marker)))
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Creates the directory reading strategy for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// One 12-byte directory entry before its value is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry {
    pub tag: u16,
    pub field_type: u16,
    pub count: u32,
    /// Inline value, or the offset of the value within the block
    pub value_field: [u8; 4],
}

impl RawEntry {
    /// Total size of the entry's value in bytes
    pub fn value_size(&self) -> u64 {
        field_type_size(self.field_type) as u64 * self.count as u64
    }

    /// Whether the value fits in the entry itself
    pub fn is_inline(&self) -> bool {
        self.value_size() <= 4
    }
}

/// Strategy for reading directory structures in one byte order
pub trait ByteOrderHandler: Send + Sync {
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16>;

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32>;

    /// Interprets an entry's value field as a block offset
    fn value_offset(&self, entry: &RawEntry) -> u32;

    /// Rewrites fetched value bytes into little-endian order
    fn normalize_value(&self, bytes: &mut [u8], field_type: u16);

    /// Reads one directory entry at the reader's position
    fn read_entry(&self, reader: &mut dyn SeekableReader) -> Result<RawEntry> {
        let tag = self.read_u16(reader)?;
        let field_type = self.read_u16(reader)?;
        let count = self.read_u32(reader)?;
        let mut value_field = [0u8; 4];
        reader.read_exact(&mut value_field)?;

        Ok(RawEntry { tag, field_type, count, value_field })
    }
}

/// Little-endian blocks: values are already in record order
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<LittleEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<LittleEndian>()
    }

    fn value_offset(&self, entry: &RawEntry) -> u32 {
        u32::from_le_bytes(entry.value_field)
    }

    fn normalize_value(&self, _bytes: &mut [u8], _field_type: u16) {}
}

/// Big-endian blocks: every numeric unit of a value is byte-swapped
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<BigEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<BigEndian>()
    }

    fn value_offset(&self, entry: &RawEntry) -> u32 {
        u32::from_be_bytes(entry.value_field)
    }

    // Rationals swap per 32-bit half; text and opaque bytes are left alone
    fn normalize_value(&self, bytes: &mut [u8], field_type: u16) {
        byte_utils::swap_units(bytes, field_type_unit_width(field_type));
    }
}
