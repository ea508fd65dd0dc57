//! Field set extraction from tag records
//!
//! Runs every named record through the decoder and collects the results
//! twice: once as a name lookup where the first occurrence of a name wins,
//! and once as a flat text rendering that keeps every decoded record.

use std::collections::HashMap;
use std::fmt;
use lazy_static::lazy_static;
use log::{debug, trace};

use crate::exif::decoder::TagDecoder;
use crate::exif::record::TagRecord;
use crate::exif::tag_names::TagNameTable;

lazy_static! {
    static ref DEFAULT_DECODER: TagDecoder = TagDecoder::new();
}

/// Decoded EXIF fields of one record sequence
///
/// Built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ExifExtractor {
    /// Fields in first-seen order
    fields: Vec<(String, String)>,
    /// Field name to position in `fields`
    index: HashMap<String, usize>,
    /// `name: value` plus separator for every decoded record
    raw_text: String,
}

impl ExifExtractor {
    /// Extracts fields using the default tag name table
    ///
    /// # Arguments
    /// * `records` - Tag records in container order
    /// * `separator` - Text placed after each entry of the raw rendering
    pub fn new(records: &[TagRecord], separator: &str) -> Self {
        Self::with_table(records, separator, TagNameTable::global())
    }

    /// Extracts fields using the given tag name table
    pub fn with_table(records: &[TagRecord], separator: &str, names: &TagNameTable) -> Self {
        let mut extractor = ExifExtractor::default();

        for record in records {
            let name = match names.lookup(record.id) {
                Some(name) => name,
                None => {
                    trace!("Skipping unnamed tag {:#06x}", record.id);
                    continue;
                }
            };

            let value = DEFAULT_DECODER.decode(record);

            extractor.raw_text.push_str(name);
            extractor.raw_text.push_str(": ");
            extractor.raw_text.push_str(&value);
            extractor.raw_text.push_str(separator);

            if extractor.index.contains_key(name) {
                trace!("Keeping first value of {}, dropping {:?}", name, value);
                continue;
            }
            extractor.index.insert(name.to_string(), extractor.fields.len());
            extractor.fields.push((name.to_string(), value));
        }

        debug!("Extracted {} fields from {} records", extractor.fields.len(), records.len());
        extractor
    }

    /// Number of distinct fields
    pub fn count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Gets a field value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.fields[i].1.as_str())
    }

    /// Checks if a field was extracted
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Full rendering of every decoded record, duplicates included
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Iterates over `(name, value)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Extracts the field set of a record sequence using the default tables
pub fn extract(records: &[TagRecord], separator: &str) -> ExifExtractor {
    ExifExtractor::new(records, separator)
}

impl fmt::Display for ExifExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_text)
    }
}

impl<'a> IntoIterator for &'a ExifExtractor {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<std::slice::Iter<'a, (String, String)>, fn(&'a (String, String)) -> (&'a str, &'a str)>;

    fn into_iter(self) -> Self::IntoIter {
        fn as_pair(field: &(String, String)) -> (&str, &str) {
            (field.0.as_str(), field.1.as_str())
        }
        self.fields.iter().map(as_pair as fn(&'a (String, String)) -> (&'a str, &'a str))
    }
}
