//! Seekable reader trait
//!
//! Directory parsing works over any reader that can both read and seek,
//! which in practice is a `Cursor` over an in-memory EXIF block.

use std::io::{Read, Seek};

/// Trait for readers that can both read and seek
pub trait SeekableReader: Read + Seek + Send + Sync {}

// Blanket implementation for any type that implements the required traits
impl<T: Read + Seek + Send + Sync> SeekableReader for T {}
