//! Tests for tag value decoding

extern crate std;

use crate::exif::constants::{field_types, tags};
use crate::exif::decoder::TagDecoder;
use crate::exif::decoders::{DecoderFactory, FieldDecoder, RationalDecoder};
use crate::exif::record::TagRecord;
use super::test_utils::{ascii_record, rational_record, short_record, srational_record, undefined_record};

fn decode(record: &TagRecord) -> String {
    TagDecoder::new().decode(record)
}

#[test]
fn test_byte_uses_first_byte() {
    let record = TagRecord::new(0x0000, field_types::BYTE, vec![7, 9]);
    std::assert_eq!(decode(&record), "7");

    let empty = TagRecord::new(0x0000, field_types::BYTE, vec![]);
    std::assert_eq!(decode(&empty), "0");
}

#[test]
fn test_ascii_keeps_terminator() {
    let record = ascii_record(tags::DATE_TIME, "2012:08:01 14:03:22");
    std::assert_eq!(decode(&record), "2012:08:01 14:03:22\0");
}

#[test]
fn test_ascii_replaces_high_bytes() {
    let record = TagRecord::new(0x010F, field_types::ASCII, vec![b'A', 0xE9, b'B']);
    std::assert_eq!(decode(&record), "A?B");
}

#[test]
fn test_short_default_is_little_endian_integer() {
    std::assert_eq!(decode(&TagRecord::new(0x0112, field_types::SHORT, vec![0x64, 0x00])), "100");
    std::assert_eq!(decode(&TagRecord::new(0x0112, field_types::SHORT, vec![0x00, 0x01])), "256");
}

#[test]
fn test_short_with_wrong_width_is_zero() {
    let record = TagRecord::new(0x0112, field_types::SHORT, vec![0x64, 0x00, 0x00]);
    std::assert_eq!(decode(&record), "0");

    let iso = TagRecord::new(tags::ISO_SPEED, field_types::SHORT, vec![0x90]);
    std::assert_eq!(decode(&iso), "ISO-0");
}

#[test]
fn test_iso_speed() {
    std::assert_eq!(decode(&short_record(tags::ISO_SPEED, 400)), "ISO-400");
}

#[test]
fn test_enumerated_shorts() {
    std::assert_eq!(decode(&short_record(tags::SENSING_METHOD, 2)), "One-chip color area sensor");
    std::assert_eq!(decode(&short_record(tags::SENSING_METHOD, 6)), "reserved");
    std::assert_eq!(decode(&short_record(tags::EXPOSURE_PROGRAM, 3)), "Aperture priority");
    std::assert_eq!(decode(&short_record(tags::EXPOSURE_PROGRAM, 9)), "reserved");
    std::assert_eq!(decode(&short_record(tags::METERING_MODE, 255)), "Other");
    std::assert_eq!(decode(&short_record(tags::METERING_MODE, 7)), "reserved");
    std::assert_eq!(decode(&short_record(tags::LIGHT_SOURCE, 21)), "D65");
    std::assert_eq!(decode(&short_record(tags::LIGHT_SOURCE, 255)), "other");
    std::assert_eq!(decode(&short_record(tags::LIGHT_SOURCE, 4)), "reserved");
    std::assert_eq!(decode(&short_record(tags::FLASH, 0)), "Flash did not fire");
    std::assert_eq!(decode(&short_record(tags::FLASH, 7)), "Strobe return light detected");
    std::assert_eq!(decode(&short_record(tags::FLASH, 16)), "reserved");
}

#[test]
fn test_long_and_slong() {
    let long = TagRecord::new(0xA002, field_types::LONG, vec![0x78, 0x56, 0x34, 0x12]);
    std::assert_eq!(decode(&long), "305419896");

    let slong = TagRecord::new(0x9999, field_types::SLONG, vec![0xFF, 0xFF, 0xFF, 0xFF]);
    std::assert_eq!(decode(&slong), "-1");

    let short_long = TagRecord::new(0xA002, field_types::LONG, vec![0x78, 0x56]);
    std::assert_eq!(decode(&short_long), "0");
}

#[test]
fn test_f_number() {
    std::assert_eq!(decode(&rational_record(tags::F_NUMBER, 28, 10)), "F/2.8");
    std::assert_eq!(decode(&rational_record(tags::F_NUMBER, 4, 1)), "F/4");
}

#[test]
fn test_aperture_value() {
    std::assert_eq!(decode(&rational_record(tags::APERTURE_VALUE, 3, 1)), "F/2.83");
    std::assert_eq!(decode(&rational_record(tags::APERTURE_VALUE, 2, 1)), "F/2");
}

#[test]
fn test_plain_rational_tags() {
    std::assert_eq!(decode(&rational_record(tags::FOCAL_LENGTH, 50, 1)), "50");
    std::assert_eq!(decode(&rational_record(tags::MAX_APERTURE_VALUE, 7, 2)), "3.5");
    std::assert_eq!(decode(&rational_record(tags::EXPOSURE_TIME, 1, 2)), "0.5");
    std::assert_eq!(decode(&rational_record(tags::EXPOSURE_TIME, 1, 250)), "0");
    std::assert_eq!(decode(&rational_record(tags::BRIGHTNESS_VALUE, 7, 2)), "3.5");
    std::assert_eq!(decode(&rational_record(tags::BRIGHTNESS_VALUE, 1, 3)), "0.33");
}

#[test]
fn test_default_rational_is_reduced_fraction() {
    std::assert_eq!(decode(&rational_record(tags::X_RESOLUTION, 72, 1)), "72/1");
    std::assert_eq!(decode(&rational_record(tags::X_RESOLUTION, 300, 2)), "150/1");
    std::assert_eq!(decode(&rational_record(tags::X_RESOLUTION, 0, 0)), "0/0");
}

#[test]
fn test_multi_valued_rational_reads_as_zero() {
    let mut bytes = Vec::new();
    for v in [35u32, 1, 30, 1, 0, 1] {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    let record = TagRecord::new(0x0002, field_types::RATIONAL, bytes);
    std::assert_eq!(decode(&record), "0/0");

    let r = RationalDecoder::rational(&record);
    std::assert_eq!(r.to_double(), 0.0);
}

#[test]
fn test_shutter_speed() {
    std::assert_eq!(decode(&srational_record(tags::SHUTTER_SPEED_VALUE, 6, 1)), "1/64");
    std::assert_eq!(decode(&srational_record(tags::SHUTTER_SPEED_VALUE, 1, 2)), "1/1.41");
}

#[test]
fn test_four_place_srational_tags() {
    std::assert_eq!(decode(&srational_record(tags::BRIGHTNESS_VALUE, 1, 3)), "0.33");
    std::assert_eq!(decode(&srational_record(tags::BRIGHTNESS_VALUE, -5, 2)), "-2.5");
    std::assert_eq!(decode(&srational_record(tags::EXPOSURE_TIME, 1, 3)), "0.33");
}

#[test]
fn test_four_place_rounding_applies_after_two_place_quotient() {
    // Four places alone would give -0.6667 and 0.125
    std::assert_eq!(decode(&srational_record(tags::EXPOSURE_TIME, -2, 3)), "-0.67");
    std::assert_eq!(decode(&srational_record(tags::EXPOSURE_TIME, 1, 8)), "0.12");
    std::assert_eq!(decode(&srational_record(tags::BRIGHTNESS_VALUE, 2, 3)), "0.67");
}

#[test]
fn test_default_srational_is_reduced_fraction() {
    std::assert_eq!(decode(&srational_record(tags::EXPOSURE_BIAS_VALUE, 2, 6)), "1/3");
    std::assert_eq!(decode(&srational_record(tags::EXPOSURE_BIAS_VALUE, 0, 1)), "0/1");
    std::assert_eq!(decode(&srational_record(tags::EXPOSURE_BIAS_VALUE, -1, 3)), "1/-3");
}

#[test]
fn test_undefined_tags() {
    std::assert_eq!(decode(&undefined_record(tags::FILE_SOURCE, &[3])), "DSC");
    std::assert_eq!(decode(&undefined_record(tags::FILE_SOURCE, &[1])), "reserved");
    std::assert_eq!(decode(&undefined_record(tags::SCENE_TYPE, &[1])), "A directly photographed image");
    std::assert_eq!(decode(&undefined_record(tags::SCENE_TYPE, &[0])), "Not a directly photographed image");
    std::assert_eq!(decode(&undefined_record(tags::EXIF_VERSION, b"0230")), "-");
}

#[test]
fn test_unhandled_field_type_is_empty() {
    let float = TagRecord::new(tags::FOCAL_LENGTH, field_types::FLOAT, vec![0, 0, 0x80, 0x3F]);
    std::assert_eq!(decode(&float), "");

    let unknown = TagRecord::new(tags::DATE_TIME, 42, vec![1, 2, 3]);
    std::assert_eq!(decode(&unknown), "");
}

#[test]
fn test_factory_covers_supported_types() {
    let decoder = TagDecoder::new();
    for field_type in [1, 2, 3, 4, 5, 7, 9, 10] {
        std::assert!(decoder.supports(field_type), "type {}", field_type);
        let created = DecoderFactory::create_decoder(field_type).unwrap();
        std::assert_eq!(created.field_type(), field_type);
    }
    for field_type in [6, 8, 11, 12, 0] {
        std::assert!(!decoder.supports(field_type));
        std::assert!(DecoderFactory::create_decoder(field_type).is_none());
    }
}

#[test]
fn test_decoder_names() {
    let names: Vec<&str> = DecoderFactory::get_available_decoders()
        .iter()
        .map(|d| d.name())
        .collect();
    std::assert_eq!(names, vec!["BYTE", "ASCII", "SHORT", "LONG", "RATIONAL", "UNDEFINED", "SLONG", "SRATIONAL"]);
}

#[test]
fn test_declared_length_does_not_affect_decoding() {
    let record = TagRecord::with_declared_length(tags::ISO_SPEED, field_types::SHORT, 8, vec![0x90, 0x01]);
    std::assert_eq!(record.byte_length, 8);
    std::assert_eq!(decode(&record), "ISO-400");
    std::assert!(record.description().contains("SHORT"));
}
