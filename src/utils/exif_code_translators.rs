//! EXIF code translators
//!
//! Translate enumerated EXIF SHORT and UNDEFINED values into the
//! descriptions shown to users. Codes outside each table map to "reserved".

/// Converts a SensingMethod code to its description
pub fn sensing_method_to_name(code: u16) -> &'static str {
    match code {
        1 => "Not defined",
        2 => "One-chip color area sensor",
        3 => "Two-chip color area sensor",
        4 => "Three-chip color area sensor",
        5 => "Color sequential area sensor",
        7 => "Trilinear sensor",
        8 => "Color sequential linear sensor",
        _ => "reserved",
    }
}

/// Converts an ExposureProgram code to its description
pub fn exposure_program_to_name(code: u16) -> &'static str {
    match code {
        0 => "Not defined",
        1 => "Manual",
        2 => "Normal program",
        3 => "Aperture priority",
        4 => "Shutter priority",
        5 => "Creative program (biased toward depth of field)",
        6 => "Action program (biased toward fast shutter speed)",
        7 => "Portrait mode (for closeup photos with the background out of focus)",
        8 => "Landscape mode (for landscape photos with the background in focus)",
        _ => "reserved",
    }
}

/// Converts a MeteringMode code to its description
pub fn metering_mode_to_name(code: u16) -> &'static str {
    match code {
        0 => "unknown",
        1 => "Average",
        2 => "CenterWeightedAverage",
        3 => "Spot",
        4 => "MultiSpot",
        5 => "Pattern",
        6 => "Partial",
        255 => "Other",
        _ => "reserved",
    }
}

/// Converts a LightSource code to its description
pub fn light_source_to_name(code: u16) -> &'static str {
    match code {
        0 => "unknown",
        1 => "Daylight",
        2 => "Fluorescent",
        3 => "Tungsten",
        17 => "Standard light A",
        18 => "Standard light B",
        19 => "Standard light C",
        20 => "D55",
        21 => "D65",
        22 => "D75",
        255 => "other",
        _ => "reserved",
    }
}

/// Converts a Flash code to its description
pub fn flash_to_name(code: u16) -> &'static str {
    match code {
        0 => "Flash did not fire",
        1 => "Flash fired",
        5 => "Strobe return light not detected",
        7 => "Strobe return light detected",
        _ => "reserved",
    }
}

/// Converts a FileSource byte to its description
pub fn file_source_to_name(code: u8) -> &'static str {
    match code {
        3 => "DSC",
        _ => "reserved",
    }
}

/// Converts a SceneType byte to its description
pub fn scene_type_to_name(code: u8) -> &'static str {
    match code {
        1 => "A directly photographed image",
        _ => "Not a directly photographed image",
    }
}
