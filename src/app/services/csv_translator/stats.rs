//! Run statistics for translation operations

/// Counters and per-value error strings accumulated over one run
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct TranslateStats {
    /// Streams fully processed (archive entries count individually)
    pub files_processed: usize,

    /// Total rows read across all streams
    pub lines_read: usize,

    /// Rows decoded as data rows
    pub data_rows: usize,

    /// Variable/value pairs inserted into a domain tree
    pub values_inserted: usize,

    /// Variable/value pairs dropped by a failed conversion or unmapped label
    pub values_dropped: usize,

    /// Human-readable descriptions of dropped values, for diagnostics
    pub errors: Vec<String>,
}

impl TranslateStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every decoded value made it into a domain tree
    pub fn is_clean(&self) -> bool {
        self.values_dropped == 0
    }
}
