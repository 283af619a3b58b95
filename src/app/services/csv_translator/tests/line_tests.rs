//! Tests for the line classification state machine

use csv::StringRecord;

use crate::app::services::csv_translator::line::{LineKind, ParseMode, classify, transition};
use crate::app::services::csv_translator::sniffer::DialectFlags;

fn record(fields: &[&str]) -> StringRecord {
    let mut r = StringRecord::new();
    for field in fields {
        r.push_field(field);
    }
    r
}

const GENERIC: DialectFlags = DialectFlags {
    agtrails: false,
    has_meta: false,
};

const AGTRAILS: DialectFlags = DialectFlags {
    agtrails: true,
    has_meta: true,
};

#[test]
fn test_generic_marker_cascade() {
    let cases = [
        (record(&["!", "comment"]), LineKind::Comment),
        (record(&["#", "EXNAME"]), LineKind::SummaryHeader),
        (record(&["%", "W_DATE"]), LineKind::SeriesHeader),
        (record(&["*", "Trial1"]), LineKind::CompleteRecord),
        (record(&["&", "dome rule"]), LineKind::Directive),
        (record(&["ex1", "value"]), LineKind::Data),
    ];
    for (row, expected) in cases {
        assert_eq!(classify(&row, GENERIC, ParseMode::Unknown), expected);
    }
}

#[test]
fn test_blank_rows_are_skipped_in_any_mode() {
    let blank = record(&["", "  ", ""]);
    assert_eq!(classify(&blank, GENERIC, ParseMode::Summary), LineKind::Blank);
    assert_eq!(
        classify(&blank, AGTRAILS, ParseMode::DialectData),
        LineKind::Blank
    );
}

#[test]
fn test_dialect_signatures_take_precedence() {
    let data_header = record(&["trial_data", "Site name", "Value"]);
    let meta_header = record(&["TRIAL_META", "Trial name"]);
    assert_eq!(
        classify(&data_header, AGTRAILS, ParseMode::Unknown),
        LineKind::DialectDataHeader
    );
    assert_eq!(
        classify(&meta_header, AGTRAILS, ParseMode::DialectData),
        LineKind::DialectMetaHeader
    );

    // Without the dialect flag, the same rows are plain data
    assert_eq!(
        classify(&data_header, GENERIC, ParseMode::Unknown),
        LineKind::Data
    );
}

#[test]
fn test_meta_signature_recognized_without_sniffed_meta_flag() {
    // A meta section starting beyond the sniff budget arrives with only the
    // dialect flag set; the signature row must still open the meta section
    // instead of decoding as a pivot data row.
    let data_only = DialectFlags {
        agtrails: true,
        has_meta: false,
    };
    let meta_header = record(&["trial_meta", "Trial name", "Crop"]);
    assert_eq!(
        classify(&meta_header, data_only, ParseMode::DialectData),
        LineKind::DialectMetaHeader
    );
    assert_eq!(
        classify(&meta_header, data_only, ParseMode::Unknown),
        LineKind::DialectMetaHeader
    );
}

#[test]
fn test_dialect_mode_swallows_generic_markers() {
    // Inside a dialect section, any non-signature row is data
    let row = record(&["#", "looks like a header"]);
    assert_eq!(classify(&row, AGTRAILS, ParseMode::DialectData), LineKind::Data);
    assert_eq!(
        classify(&row, AGTRAILS, ParseMode::Unknown),
        LineKind::SummaryHeader
    );
}

#[test]
fn test_transitions() {
    assert_eq!(
        transition(ParseMode::Unknown, LineKind::SummaryHeader),
        ParseMode::Summary
    );
    assert_eq!(
        transition(ParseMode::Summary, LineKind::SeriesHeader),
        ParseMode::Series
    );
    assert_eq!(
        transition(ParseMode::Unknown, LineKind::DialectDataHeader),
        ParseMode::DialectData
    );
    assert_eq!(
        transition(ParseMode::DialectData, LineKind::DialectMetaHeader),
        ParseMode::DialectMeta
    );
}

#[test]
fn test_non_header_kinds_leave_mode_untouched() {
    for kind in [
        LineKind::Comment,
        LineKind::Directive,
        LineKind::Blank,
        LineKind::Data,
        LineKind::CompleteRecord,
    ] {
        assert_eq!(transition(ParseMode::Series, kind), ParseMode::Series);
    }
}
