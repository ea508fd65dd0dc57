//! Fixed-width little-endian conversions
//!
//! Value bytes are always read least-significant byte first. A buffer whose
//! length differs from the conversion width yields zero instead of an error;
//! formatters downstream rely on getting a number in every case.

use byteorder::{ByteOrder, LittleEndian};

/// Reads a 16-bit unsigned value; zero unless exactly 2 bytes are given
pub fn to_u16(bytes: &[u8]) -> u16 {
    if bytes.len() != 2 {
        return 0;
    }
    LittleEndian::read_u16(bytes)
}

/// Reads a 32-bit unsigned value; zero unless exactly 4 bytes are given
pub fn to_u32(bytes: &[u8]) -> u32 {
    if bytes.len() != 4 {
        return 0;
    }
    LittleEndian::read_u32(bytes)
}

/// Reads a 32-bit signed value; zero unless exactly 4 bytes are given
pub fn to_i32(bytes: &[u8]) -> i32 {
    if bytes.len() != 4 {
        return 0;
    }
    LittleEndian::read_i32(bytes)
}

/// Splits a buffer at its midpoint into numerator and denominator halves
pub fn split_halves(bytes: &[u8]) -> (&[u8], &[u8]) {
    let half = bytes.len() / 2;
    (&bytes[..half], &bytes[half..half * 2])
}

/// Reverses every `unit_width`-byte group in place
///
/// Converts big-endian values to little-endian (and back). A trailing
/// partial group is left untouched.
pub fn swap_units(bytes: &mut [u8], unit_width: usize) {
    if unit_width < 2 {
        return;
    }
    for unit in bytes.chunks_exact_mut(unit_width) {
        unit.reverse();
    }
}
