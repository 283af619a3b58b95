//! Delimiter and dialect sniffing
//!
//! Inspects a bounded prefix of the raw stream to choose the field delimiter
//! and detect the AgTrails dialect. The stream itself is untouched: sniffing
//! works on the in-memory buffer that the classifier will re-read from the
//! start.

use tracing::debug;

use crate::constants::{
    AGTRAILS_DATA_SIGNATURE, AGTRAILS_META_SIGNATURE, DEFAULT_DELIMITER, SNIFF_BYTE_BUDGET,
    SUMMARY_HEADER_MARKER,
};

/// Dialect detection flags carried through one stream read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialectFlags {
    /// The stream is an AgTrails export
    pub agtrails: bool,

    /// The stream carries a meta section in addition to its data section
    pub has_meta: bool,
}

/// Outcome of sniffing one stream prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SniffResult {
    /// Single-byte field delimiter
    pub delimiter: u8,

    /// Detected dialect, if any
    pub dialect: DialectFlags,
}

/// Sniff the delimiter and dialect from the first [`SNIFF_BYTE_BUDGET`] bytes
///
/// The delimiter is the byte immediately following the first recognized
/// marker: the `#` of a summary header, or an AgTrails section signature.
/// A stream with no marker within the budget defaults to comma. Seeing both
/// AgTrails signatures sets the meta flag as well.
pub fn sniff(content: &str) -> SniffResult {
    let mut delimiter: Option<u8> = None;
    let mut dialect = DialectFlags::default();
    let mut consumed = 0usize;

    for line in content.lines() {
        if consumed > SNIFF_BYTE_BUDGET {
            break;
        }
        consumed += line.len() + 1;

        if line.starts_with(SUMMARY_HEADER_MARKER) {
            if delimiter.is_none() {
                delimiter = line.as_bytes().get(1).copied();
            }
            // A generic summary header settles the dialect question.
            if !dialect.agtrails {
                break;
            }
        } else if line.starts_with(AGTRAILS_DATA_SIGNATURE) {
            dialect.agtrails = true;
            if delimiter.is_none() {
                delimiter = line.as_bytes().get(AGTRAILS_DATA_SIGNATURE.len()).copied();
            }
            if dialect.has_meta {
                break;
            }
        } else if line.starts_with(AGTRAILS_META_SIGNATURE) {
            dialect.agtrails = true;
            dialect.has_meta = true;
            if delimiter.is_none() {
                delimiter = line.as_bytes().get(AGTRAILS_META_SIGNATURE.len()).copied();
            }
        }
    }

    let delimiter = delimiter.unwrap_or(DEFAULT_DELIMITER);
    debug!(
        delimiter = %(delimiter as char),
        agtrails = dialect.agtrails,
        has_meta = dialect.has_meta,
        "sniffed stream prefix"
    );

    SniffResult { delimiter, dialect }
}
