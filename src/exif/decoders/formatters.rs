//! Tag-specific value formatters
//!
//! Each field type decoder first converts the bytes to a number, then looks
//! the tag up here. Tags without an entry get the type's default rendering.

use std::collections::HashMap;
use lazy_static::lazy_static;

use crate::exif::constants::tags;
use crate::exif::rational::{round_to, Rational};
use crate::utils::exif_code_translators as translators;

pub type ShortFormatter = fn(u16) -> String;
pub type RationalFormatter = fn(&Rational) -> String;
pub type UndefinedFormatter = fn(u8) -> String;

lazy_static! {
    static ref SHORT_FORMATTERS: HashMap<u16, ShortFormatter> = {
        let mut m: HashMap<u16, ShortFormatter> = HashMap::new();
        m.insert(tags::ISO_SPEED, format_iso);
        m.insert(tags::SENSING_METHOD, |v| translators::sensing_method_to_name(v).to_string());
        m.insert(tags::EXPOSURE_PROGRAM, |v| translators::exposure_program_to_name(v).to_string());
        m.insert(tags::METERING_MODE, |v| translators::metering_mode_to_name(v).to_string());
        m.insert(tags::LIGHT_SOURCE, |v| translators::light_source_to_name(v).to_string());
        m.insert(tags::FLASH, |v| translators::flash_to_name(v).to_string());
        m
    };

    static ref RATIONAL_FORMATTERS: HashMap<u16, RationalFormatter> = {
        let mut m: HashMap<u16, RationalFormatter> = HashMap::new();
        m.insert(tags::APERTURE_VALUE, format_aperture);
        m.insert(tags::BRIGHTNESS_VALUE, format_plain);
        m.insert(tags::EXPOSURE_TIME, format_plain);
        m.insert(tags::FOCAL_LENGTH, format_plain);
        m.insert(tags::MAX_APERTURE_VALUE, format_plain);
        m.insert(tags::F_NUMBER, format_f_number);
        m
    };

    static ref SRATIONAL_FORMATTERS: HashMap<u16, RationalFormatter> = {
        let mut m: HashMap<u16, RationalFormatter> = HashMap::new();
        m.insert(tags::SHUTTER_SPEED_VALUE, format_shutter_speed);
        m.insert(tags::BRIGHTNESS_VALUE, format_four_places);
        m.insert(tags::EXPOSURE_TIME, format_four_places);
        m
    };

    static ref UNDEFINED_FORMATTERS: HashMap<u16, UndefinedFormatter> = {
        let mut m: HashMap<u16, UndefinedFormatter> = HashMap::new();
        m.insert(tags::FILE_SOURCE, |b| translators::file_source_to_name(b).to_string());
        m.insert(tags::SCENE_TYPE, |b| translators::scene_type_to_name(b).to_string());
        m
    };
}

pub fn short_formatter(tag: u16) -> Option<ShortFormatter> {
    SHORT_FORMATTERS.get(&tag).copied()
}

pub fn rational_formatter(tag: u16) -> Option<RationalFormatter> {
    RATIONAL_FORMATTERS.get(&tag).copied()
}

pub fn srational_formatter(tag: u16) -> Option<RationalFormatter> {
    SRATIONAL_FORMATTERS.get(&tag).copied()
}

pub fn undefined_formatter(tag: u16) -> Option<UndefinedFormatter> {
    UNDEFINED_FORMATTERS.get(&tag).copied()
}

/// Renders a double in shortest round-trip form (`2.8`, `4`, `0.33`)
pub fn format_double(value: f64) -> String {
    format!("{}", value)
}

fn format_iso(value: u16) -> String {
    format!("ISO-{}", value)
}

// APEX aperture: f-number = sqrt(2)^Av
fn format_aperture(r: &Rational) -> String {
    let f_number = std::f64::consts::SQRT_2.powf(r.to_double());
    format!("F/{}", format_double(round_to(f_number, 2)))
}

fn format_plain(r: &Rational) -> String {
    format_double(r.to_double())
}

fn format_f_number(r: &Rational) -> String {
    format!("F/{}", format_double(r.to_double()))
}

// APEX shutter speed: exposure = 1 / 2^Tv
fn format_shutter_speed(r: &Rational) -> String {
    let denominator = 2f64.powf(r.to_double());
    format!("1/{}", format_double(round_to(denominator, 2)))
}

fn format_four_places(r: &Rational) -> String {
    format_double(round_to(r.to_double(), 4))
}
