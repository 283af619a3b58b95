//! Line classification state machine
//!
//! Each decoded row is assigned a [`LineKind`] from its first column and the
//! current [`ParseMode`]; a single transition function advances the mode.
//! Modeling both as enums keeps the dialect cascade in one place, so a new
//! dialect is a new pair of variants rather than another nested conditional.

use csv::StringRecord;

use crate::constants::{
    AGTRAILS_DATA_SIGNATURE, AGTRAILS_META_SIGNATURE, COMMENT_MARKER, COMPLETE_RECORD_MARKER,
    DIRECTIVE_MARKER, SERIES_HEADER_MARKER, SUMMARY_HEADER_MARKER,
};

use super::sniffer::DialectFlags;

/// Parser mode, advanced line by line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// No header seen yet
    #[default]
    Unknown,

    /// Inside a `#` summary section
    Summary,

    /// Inside a `%` series section
    Series,

    /// Inside an AgTrails meta section
    DialectMeta,

    /// Inside an AgTrails data section
    DialectData,
}

impl ParseMode {
    /// True for the two AgTrails section modes
    pub fn is_dialect(self) -> bool {
        matches!(self, ParseMode::DialectMeta | ParseMode::DialectData)
    }
}

/// Classification of one decoded row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `!` row, skipped
    Comment,

    /// `#` row, rebuilds the header and enters the summary section
    SummaryHeader,

    /// `%` row, rebuilds the header and enters the series section
    SeriesHeader,

    /// `*` row, a self-contained record that never merges
    CompleteRecord,

    /// `&` row, belongs to the separate rule engine and is skipped here
    Directive,

    /// Entirely empty or whitespace row, skipped
    Blank,

    /// AgTrails data-section signature row, rebuilds the header
    DialectDataHeader,

    /// AgTrails meta-section signature row, rebuilds the header
    DialectMetaHeader,

    /// Anything else: a data row keyed by its first column
    Data,
}

/// Classify one row given the dialect flags and current mode
pub fn classify(record: &StringRecord, dialect: DialectFlags, mode: ParseMode) -> LineKind {
    if record.iter().all(|field| field.trim().is_empty()) {
        return LineKind::Blank;
    }

    let first = record.get(0).unwrap_or("");

    if dialect.agtrails {
        let token = first.trim();
        if token.eq_ignore_ascii_case(AGTRAILS_DATA_SIGNATURE) {
            return LineKind::DialectDataHeader;
        }
        // The sniffed meta flag is advisory only: a meta section starting
        // past the sniff budget must still be recognized here.
        if token.eq_ignore_ascii_case(AGTRAILS_META_SIGNATURE) {
            return LineKind::DialectMetaHeader;
        }
        if mode.is_dialect() {
            return LineKind::Data;
        }
    }

    if first.starts_with(COMMENT_MARKER) {
        LineKind::Comment
    } else if first.starts_with(SUMMARY_HEADER_MARKER) {
        LineKind::SummaryHeader
    } else if first.starts_with(SERIES_HEADER_MARKER) {
        LineKind::SeriesHeader
    } else if first.starts_with(COMPLETE_RECORD_MARKER) {
        LineKind::CompleteRecord
    } else if first.starts_with(DIRECTIVE_MARKER) {
        LineKind::Directive
    } else {
        LineKind::Data
    }
}

/// Advance the parser mode after a classified row
///
/// Comments, blanks, directives and data rows never change mode. A complete
/// record forces summary semantics for its own row only, so it leaves the
/// mode untouched here.
pub fn transition(mode: ParseMode, kind: LineKind) -> ParseMode {
    match kind {
        LineKind::SummaryHeader => ParseMode::Summary,
        LineKind::SeriesHeader => ParseMode::Series,
        LineKind::DialectDataHeader => ParseMode::DialectData,
        LineKind::DialectMetaHeader => ParseMode::DialectMeta,
        _ => mode,
    }
}
