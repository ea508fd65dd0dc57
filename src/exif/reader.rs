//! EXIF block reader
//!
//! Locates the TIFF-structured EXIF block inside a JPEG stream (or takes a
//! bare TIFF block) and resolves its directory entries into tag records.
//! IFD0 is read first, followed by the Exif and GPS sub-directories it
//! points to.

use byteorder::{BigEndian, ByteOrder as _};
use log::{debug, info, warn};
use std::fs;
use std::io::{Cursor, Read, Seek, SeekFrom};

use crate::exif::constants::{header, tags};
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::record::TagRecord;
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::io::seekable::SeekableReader;
use crate::utils::byte_utils;

/// Size of one classic TIFF directory entry
const ENTRY_SIZE: u64 = 12;

/// Reader producing tag records from JPEG or TIFF data
pub struct ExifReader {
    /// Directories with more entries than this are treated as corrupt
    max_entries: u16,
}

impl ExifReader {
    /// Creates a new EXIF reader
    pub fn new() -> Self {
        ExifReader { max_entries: 1024 }
    }

    /// Reads the tag records of an image file
    ///
    /// # Arguments
    /// * `path` - Path to a JPEG or TIFF file
    ///
    /// # Returns
    /// Tag records in directory order
    pub fn read_file(&self, path: &str) -> ExifResult<Vec<TagRecord>> {
        info!("Reading EXIF data from: {}", path);
        let data = fs::read(path)?;
        self.read_records(&data)
    }

    /// Reads the tag records from in-memory JPEG or TIFF data
    pub fn read_records(&self, data: &[u8]) -> ExifResult<Vec<TagRecord>> {
        let block = locate_tiff_block(data)?;
        debug!("TIFF block of {} bytes", block.len());
        self.read_tiff_block(block)
    }

    /// Reads IFD0 and its Exif/GPS sub-directories from a TIFF block
    fn read_tiff_block(&self, block: &[u8]) -> ExifResult<Vec<TagRecord>> {
        if block.len() < 8 {
            return Err(ExifError::Truncated { offset: 0, needed: 8 });
        }

        let mut cursor = Cursor::new(block);
        let byte_order = ByteOrder::detect(&mut cursor)?;
        debug!("Detected byte order: {}", byte_order.name());
        let handler = byte_order.create_handler();

        let version = handler.read_u16(&mut cursor)?;
        if version != header::TIFF_VERSION {
            return Err(ExifError::UnsupportedVersion(version));
        }

        let ifd0_offset = handler.read_u32(&mut cursor)? as u64;
        debug!("IFD0 offset: {}", ifd0_offset);

        let mut records = self.read_directory(&mut cursor, block.len() as u64, ifd0_offset, handler.as_ref())?;

        let sub_directories: Vec<(u16, u64)> = records.iter()
            .filter(|r| r.id == tags::EXIF_IFD_POINTER || r.id == tags::GPS_IFD_POINTER)
            .map(|r| (r.id, byte_utils::to_u32(&r.raw_bytes) as u64))
            .collect();

        for (pointer_tag, offset) in sub_directories {
            if offset == ifd0_offset {
                warn!("Sub-directory {:#06x} points back at IFD0, skipping", pointer_tag);
                continue;
            }
            match self.read_directory(&mut cursor, block.len() as u64, offset, handler.as_ref()) {
                Ok(mut sub_records) => {
                    debug!("Read {} records from sub-directory {:#06x}", sub_records.len(), pointer_tag);
                    records.append(&mut sub_records);
                }
                Err(e) => warn!("Error reading sub-directory {:#06x} at {}: {}", pointer_tag, offset, e),
            }
        }

        info!("Read {} tag records", records.len());
        Ok(records)
    }

    /// Reads one directory and resolves each entry's value bytes
    ///
    /// Entries whose value lies outside the block are skipped.
    fn read_directory(
        &self,
        reader: &mut Cursor<&[u8]>,
        block_len: u64,
        offset: u64,
        handler: &dyn ByteOrderHandler,
    ) -> ExifResult<Vec<TagRecord>> {
        if offset + 2 > block_len {
            return Err(ExifError::Truncated { offset, needed: 2 });
        }
        reader.seek(SeekFrom::Start(offset))?;

        let entry_count = handler.read_u16(reader)?;
        if entry_count > self.max_entries {
            return Err(ExifError::GenericError(format!("Directory at {} claims {} entries", offset, entry_count)));
        }

        let entries_len = entry_count as u64 * ENTRY_SIZE;
        if offset + 2 + entries_len > block_len {
            return Err(ExifError::Truncated { offset: offset + 2, needed: entries_len });
        }
        debug!("Directory at {} has {} entries", offset, entry_count);

        let mut records = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            let entry = handler.read_entry(reader)?;
            let total = entry.value_size();

            let mut bytes = if entry.is_inline() {
                entry.value_field[..total as usize].to_vec()
            } else {
                let value_offset = handler.value_offset(&entry) as u64;
                if value_offset + total > block_len {
                    warn!("Value of tag {:#06x} ({} bytes at {}) lies outside the block, skipping",
                          entry.tag, total, value_offset);
                    continue;
                }
                let block = reader.get_ref();
                block[value_offset as usize..(value_offset + total) as usize].to_vec()
            };

            handler.normalize_value(&mut bytes, entry.field_type);
            records.push(TagRecord::new(entry.tag, entry.field_type, bytes));
        }

        Ok(records)
    }
}

impl Default for ExifReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the TIFF-structured EXIF block within JPEG or TIFF data
///
/// For JPEG input this is the payload of the first APP1 segment that starts
/// with the Exif identifier. TIFF input is returned as-is.
pub fn locate_tiff_block(data: &[u8]) -> ExifResult<&[u8]> {
    if data.len() >= 2 && (data[..2] == header::LITTLE_ENDIAN_MARKER || data[..2] == header::BIG_ENDIAN_MARKER) {
        return Ok(data);
    }
    if data.len() < 2 || data[..2] != header::JPEG_SOI {
        return Err(ExifError::UnsupportedContainer);
    }

    let mut pos = 2;
    loop {
        if pos + 1 >= data.len() || data[pos] != 0xFF {
            return Err(ExifError::MissingExifSegment);
        }
        let marker = data[pos + 1];

        // Fill bytes between segments
        if marker == 0xFF {
            pos += 1;
            continue;
        }
        if marker == header::JPEG_SOS || marker == 0xD9 {
            return Err(ExifError::MissingExifSegment);
        }
        // Markers without a length field
        if marker == 0x01 || (0xD0..=0xD7).contains(&marker) {
            pos += 2;
            continue;
        }

        if pos + 4 > data.len() {
            return Err(ExifError::Truncated { offset: pos as u64, needed: 4 });
        }
        let length = BigEndian::read_u16(&data[pos + 2..pos + 4]) as usize;
        let end = pos + 2 + length;
        if length < 2 || end > data.len() {
            return Err(ExifError::Truncated { offset: (pos + 2) as u64, needed: length as u64 });
        }

        let payload = &data[pos + 4..end];
        if marker == header::JPEG_APP1 && payload.starts_with(header::EXIF_IDENTIFIER) {
            debug!("Found Exif APP1 segment at {}", pos);
            return Ok(&payload[header::EXIF_IDENTIFIER.len()..]);
        }

        pos = end;
    }
}

/// Reads tag records from a generic seekable source
///
/// Used when the caller holds an open reader rather than a byte slice.
pub fn read_records_from(reader: &mut dyn SeekableReader) -> ExifResult<Vec<TagRecord>> {
    reader.seek(SeekFrom::Start(0))?;
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    ExifReader::new().read_records(&data)
}
