//! Utility modules for common functionality
//!
//! This module provides various utility functions and types used throughout the application.

pub mod logger;
pub mod progress;
pub mod byte_utils;
pub mod exif_code_translators;
pub mod datetime_utils;
