//! Agronomic CSV Translator Library
//!
//! A Rust library for translating agronomic trial data from multi-section,
//! delimiter-separated text dialects into a normalized hierarchical record
//! model partitioned into experiment, weather and soil domains.
//!
//! This library provides tools for:
//! - Sniffing the field delimiter and dialect of a raw input stream
//! - Classifying lines through an explicit parser-mode state machine
//! - Interpreting header rows with column skips and default-domain inference
//! - Merging data rows that share a natural key into one logical record
//! - Normalizing values (dates, treatment names, AgTrails units and codes)
//! - Consolidating and pruning the resulting domain trees

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_translator;
        pub mod pathfinder;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DataMap, DataValue, Domain, TranslationOutput};
pub use app::services::csv_translator::CsvTranslator;
pub use app::services::pathfinder::{IcasaTable, VarPath, VariableTable};

/// Result type alias for the translator
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for translation operations
///
/// Only stream-level failures surface here. Per-value conversion failures
/// (unparseable dates, unmapped AgTrails labels) are absorbed into the run
/// statistics and never abort a stream.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error
    #[error("CSV decoding error in '{file}': {message}")]
    CsvDecoding {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Archive structure error
    #[error("Archive error in '{file}': {message}")]
    Archive {
        file: String,
        message: String,
        #[source]
        source: Option<zip::result::ZipError>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV decoding error with context
    pub fn csv_decoding(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvDecoding {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an archive error with context
    pub fn archive(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<zip::result::ZipError>,
    ) -> Self {
        Self::Archive {
            file: file.into(),
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvDecoding {
            file: "unknown".to_string(),
            message: "CSV decoding failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(error: zip::result::ZipError) -> Self {
        Self::Archive {
            file: "unknown".to_string(),
            message: "Archive reading failed".to_string(),
            source: Some(error),
        }
    }
}
