//! Tag identifier to field name table
//!
//! Names come from the `exif_tags.toml` definitions file embedded at build
//! time. Identifiers without a name are not part of the extracted field set.

use std::collections::HashMap;
use std::fs;
use lazy_static::lazy_static;
use log::debug;

use crate::exif::errors::{ExifError, ExifResult};

lazy_static! {
    // Parse the embedded definitions once, on first use
    static ref DEFAULT_TAG_NAMES: TagNameTable = {
        let content = include_str!("../../exif_tags.toml");
        TagNameTable::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse EXIF tag definitions: {}", e);
            TagNameTable::default()
        })
    };
}

/// Lookup from tag identifier to canonical field name
#[derive(Debug, Clone, Default)]
pub struct TagNameTable {
    names: HashMap<u16, String>,
}

impl TagNameTable {
    /// Returns the process-wide table built from the embedded definitions
    pub fn global() -> &'static TagNameTable {
        &DEFAULT_TAG_NAMES
    }

    /// Parse tag names from a TOML string
    ///
    /// Reads the `[tag_names]` table. Keys are decimal or `0x`-prefixed hex
    /// identifiers; entries whose key or value cannot be read are skipped.
    pub fn from_str(content: &str) -> ExifResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(ExifError::InvalidDefinitions(format!("Failed to parse TOML: {}", e))),
        };

        let mut table = TagNameTable::default();

        if let Some(entries) = toml_value.get("tag_names").and_then(|v| v.as_table()) {
            for (k, v) in entries {
                match (parse_tag_id(k), v.as_str()) {
                    (Some(id), Some(name)) => {
                        table.names.insert(id, name.to_string());
                    }
                    _ => debug!("Skipping tag name entry {:?}", k),
                }
            }
        }

        debug!("Loaded {} tag names", table.names.len());
        Ok(table)
    }

    /// Load tag names from a TOML file
    pub fn from_file(path: &str) -> ExifResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Get the field name for a tag, if it has one
    pub fn lookup(&self, id: u16) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: u16) -> bool {
        self.names.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Get a field name from the default table
pub fn lookup(id: u16) -> Option<&'static str> {
    TagNameTable::global().lookup(id)
}

fn parse_tag_id(key: &str) -> Option<u16> {
    match key.strip_prefix("0x").or_else(|| key.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16).ok(),
        None => key.parse::<u16>().ok(),
    }
}
