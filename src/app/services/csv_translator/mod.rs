//! Translation engine for multi-section agronomic trial CSV dialects
//!
//! Converts delimiter-separated trial data files (a generic multi-section
//! research CSV and the AgTrails variant) into normalized domain records.
//!
//! ## Architecture
//!
//! The engine is organized into logical components:
//! - [`sniffer`] - Delimiter and dialect detection over a bounded prefix
//! - [`line`] - Line classification state machine and mode transitions
//! - [`header`] - Header-row interpretation into an immutable descriptor
//! - [`assembler`] - Data-row decoding and natural-key record identity
//! - [`normalize`] - Variable classification and value normalization
//! - [`agtrails`] - AgTrails rename table and value conversions
//! - [`consolidate`] - Final merge and pruning of the domain trees
//! - [`stats`] - Run statistics
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agcsv_translator::CsvTranslator;
//!
//! # fn example() -> agcsv_translator::Result<()> {
//! let mut translator = CsvTranslator::default();
//! translator.translate_file(std::path::Path::new("trial.csv"))?;
//! let output = translator.finish();
//!
//! println!("{} experiments, {} weather stations, {} soil profiles",
//!          output.experiments.len(), output.weathers.len(), output.soils.len());
//! # Ok(())
//! # }
//! ```

pub mod agtrails;
pub mod assembler;
pub mod consolidate;
pub mod header;
pub mod line;
pub mod normalize;
pub mod sniffer;
pub mod stats;
pub mod translator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use consolidate::{PlaceholderPredicate, default_placeholder};
pub use header::CsvHeader;
pub use line::{LineKind, ParseMode};
pub use sniffer::{DialectFlags, SniffResult};
pub use stats::TranslateStats;
pub use translator::CsvTranslator;
