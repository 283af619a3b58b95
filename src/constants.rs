//! Application constants for the agronomic CSV translator
//!
//! Row markers, dialect signatures, sniffing limits and field names shared
//! across the translation pipeline.

// =============================================================================
// Row Markers (first column, after delimiter splitting)
// =============================================================================

/// Comment rows and commented-out header columns
pub const COMMENT_MARKER: &str = "!";

/// Summary-section header rows
pub const SUMMARY_HEADER_MARKER: &str = "#";

/// Series-section header rows
pub const SERIES_HEADER_MARKER: &str = "%";

/// Inline self-contained records that never merge with other rows
pub const COMPLETE_RECORD_MARKER: &str = "*";

/// Override/generation directives, handled by a separate rule engine
pub const DIRECTIVE_MARKER: &str = "&";

/// Second-column token introducing a pivoted event sub-record
pub const EVENT_TOKEN: &str = "event";

// =============================================================================
// Delimiter Sniffing
// =============================================================================

/// Maximum number of bytes inspected while sniffing the delimiter and dialect
pub const SNIFF_BYTE_BUDGET: usize = 7168;

/// Delimiter assumed when no marker line is found within the sniff budget
pub const DEFAULT_DELIMITER: u8 = b',';

// =============================================================================
// AgTrails Dialect
// =============================================================================

/// First-column signature of an AgTrails data-section header row
pub const AGTRAILS_DATA_SIGNATURE: &str = "trial_data";

/// First-column signature of an AgTrails meta-section header row
pub const AGTRAILS_META_SIGNATURE: &str = "trial_meta";

/// Header label locating the variable-name column of AgTrails pivot rows
pub const AGTRAILS_VARIABLE_LABEL: &str = "variables measured";

/// Header label locating the value column of AgTrails pivot rows
pub const AGTRAILS_VALUE_LABEL: &str = "value";

/// Fallback variable-name column when no label matches
pub const AGTRAILS_DEFAULT_VARIABLE_COLUMN: usize = 9;

/// Fallback value column when no label matches
pub const AGTRAILS_DEFAULT_VALUE_COLUMN: usize = 10;

/// Value of the `data_source` tag stamped on merged AgTrails records
pub const AGTRAILS_DATA_SOURCE: &str = "agtrails";

// =============================================================================
// Structural Field Names
// =============================================================================

/// Weather-station cross-reference field, always mirrored onto the experiment
pub const WEATHER_STATION_FIELD: &str = "wst_id";

/// Soil-profile cross-reference field, always mirrored onto the experiment
pub const SOIL_ID_FIELD: &str = "soil_id";

/// Experiment name field, disambiguated with an occurrence suffix
pub const EXPERIMENT_NAME_FIELD: &str = "exname";

/// Key of the data-source tag on consolidated records
pub const DATA_SOURCE_FIELD: &str = "data_source";

/// Embedded domain subtrees stripped from experiment records on consolidation
pub const EMBEDDED_WEATHER_KEY: &str = "weather";
pub const EMBEDDED_SOIL_KEY: &str = "soil";

// =============================================================================
// Date Normalization
// =============================================================================

/// Input date format after slash-to-hyphen folding
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Compact 8-digit storage format for dates
pub const STORED_DATE_FORMAT: &str = "%Y%m%d";

// =============================================================================
// File Suffixes
// =============================================================================

/// Suffix selecting single-stream translation
pub const CSV_SUFFIX: &str = "csv";

/// Suffix selecting archive-bundle translation
pub const ZIP_SUFFIX: &str = "zip";
