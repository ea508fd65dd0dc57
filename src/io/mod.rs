//! I/O utilities for reading EXIF blocks
//!
//! This module provides the reader trait and byte order strategies used
//! when walking a TIFF-structured directory.

pub mod seekable;
pub mod byte_order;
