//! Tests for the tag name table

extern crate std;

use crate::exif::constants::tags;
use crate::exif::tag_names::{self, TagNameTable};

#[test]
fn test_embedded_table_names_known_tags() {
    let table = TagNameTable::global();
    std::assert!(!table.is_empty());
    std::assert_eq!(table.lookup(tags::DATE_TIME), Some("Date Time"));
    std::assert_eq!(table.lookup(tags::ISO_SPEED), Some("ISO Speed"));
    std::assert_eq!(table.lookup(tags::F_NUMBER), Some("F-Number"));
    std::assert_eq!(table.lookup(tags::EXPOSURE_PROGRAM), Some("Exposure Program"));
    std::assert_eq!(table.lookup(tags::SENSING_METHOD), Some("Sensing Method"));
    std::assert_eq!(table.lookup(tags::SCENE_TYPE), Some("Scene Type"));
    std::assert_eq!(table.lookup(tags::FILE_SOURCE), Some("File Source"));
}

#[test]
fn test_unknown_ids_have_no_name() {
    std::assert_eq!(tag_names::lookup(0xC0DE), None);
    std::assert!(!TagNameTable::global().contains(0xFFFF));
}

#[test]
fn test_decimal_and_hex_keys() {
    let table = TagNameTable::from_str("[tag_names]\n306 = \"When\"\n\"0x8827\" = \"ISO\"\n").unwrap();
    std::assert_eq!(table.len(), 2);
    std::assert_eq!(table.lookup(306), Some("When"));
    std::assert_eq!(table.lookup(0x8827), Some("ISO"));
}

#[test]
fn test_bad_entries_are_skipped() {
    let table = TagNameTable::from_str("[tag_names]\nnope = \"X\"\n\"0x1FFFF\" = \"Too big\"\n\"0x0001\" = 5\n\"0x0002\" = \"Ok\"\n").unwrap();
    std::assert_eq!(table.len(), 1);
    std::assert_eq!(table.lookup(2), Some("Ok"));
}

#[test]
fn test_malformed_toml_is_an_error() {
    std::assert!(TagNameTable::from_str("[tag_names\n").is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    std::assert!(TagNameTable::from_file("/nonexistent/exif_tags.toml").is_err());
}
