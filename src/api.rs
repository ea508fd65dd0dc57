use log::info;

use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::extractor::ExifExtractor;
use crate::exif::reader::ExifReader;
use crate::exif::tag_names::TagNameTable;
use crate::utils::datetime_utils::CaptureStamp;
use crate::utils::logger::Logger;

/// Main interface to the ExifKit library
pub struct ExifKit {
    logger: Logger,
    reader: ExifReader,
    tag_names: Option<TagNameTable>,
}

impl ExifKit {
    /// Create a new ExifKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "exifkit.log"
    ///
    /// # Returns
    /// An ExifKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> ExifResult<Self> {
        let log_path = log_file.unwrap_or("exifkit.log");
        let logger = Logger::new(log_path)?;
        Ok(ExifKit {
            logger,
            reader: ExifReader::new(),
            tag_names: None,
        })
    }

    /// Use an alternate tag name table instead of the embedded one
    pub fn with_tag_names(mut self, tag_names: TagNameTable) -> Self {
        self.tag_names = Some(tag_names);
        self
    }

    /// Extract the decoded fields of an image file
    ///
    /// # Arguments
    /// * `input_path` - Path to a JPEG or TIFF file
    /// * `separator` - Text placed after each raw text entry
    pub fn extract_file(&self, input_path: &str, separator: &str) -> ExifResult<ExifExtractor> {
        let records = self.reader.read_file(input_path)?;
        let extractor = match &self.tag_names {
            Some(names) => ExifExtractor::with_table(&records, separator, names),
            None => ExifExtractor::new(&records, separator),
        };

        info!("Extracted {} fields from {}", extractor.count(), input_path);
        self.logger.log_fields(input_path, &extractor)?;
        Ok(extractor)
    }

    /// Render every decoded tag of an image file as text
    pub fn describe(&self, input_path: &str, separator: &str) -> ExifResult<String> {
        Ok(self.extract_file(input_path, separator)?.raw_text().to_string())
    }

    /// Look up a single field of an image file
    pub fn field(&self, input_path: &str, name: &str) -> ExifResult<String> {
        let extractor = self.extract_file(input_path, "\n")?;
        extractor.get(name)
            .map(str::to_string)
            .ok_or_else(|| ExifError::FieldNotFound(name.to_string()))
    }

    /// Read the normalized capture date of an image file
    pub fn capture_stamp(&self, input_path: &str) -> ExifResult<CaptureStamp> {
        let extractor = self.extract_file(input_path, "\n")?;
        let stamp = CaptureStamp::from_extractor(&extractor)?;
        self.logger.log(&format!("{}: captured {}", input_path, stamp))?;
        Ok(stamp)
    }
}
