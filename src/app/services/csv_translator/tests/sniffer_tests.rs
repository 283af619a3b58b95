//! Tests for delimiter and dialect sniffing

use crate::app::services::csv_translator::sniffer::sniff;

#[test]
fn test_delimiter_follows_summary_marker() {
    let result = sniff("#,EXNAME,WST_ID\nex1,Trial,STN01\n");
    assert_eq!(result.delimiter, b',');
    assert!(!result.dialect.agtrails);

    let result = sniff("#;EXNAME;WST_ID\nex1;Trial;STN01\n");
    assert_eq!(result.delimiter, b';');
}

#[test]
fn test_marker_after_leading_comments() {
    let content = "!,a comment line\n!,another\n#;EXNAME\n";
    let result = sniff(content);
    assert_eq!(result.delimiter, b';');
}

#[test]
fn test_no_marker_defaults_to_comma() {
    let result = sniff("just,some,data\nmore,data,here\n");
    assert_eq!(result.delimiter, b',');
    assert!(!result.dialect.agtrails);
    assert!(!result.dialect.has_meta);
}

#[test]
fn test_empty_stream_defaults_to_comma() {
    let result = sniff("");
    assert_eq!(result.delimiter, b',');
    assert!(!result.dialect.agtrails);
}

#[test]
fn test_agtrails_data_signature_sets_flag() {
    let result = sniff("trial_data,Site name,Variables measured,Value\n");
    assert_eq!(result.delimiter, b',');
    assert!(result.dialect.agtrails);
    assert!(!result.dialect.has_meta);
}

#[test]
fn test_agtrails_meta_signature_sets_both_flags() {
    let content = "trial_meta;Trial name;Crop\nm1;Trial;Maize\ntrial_data;Variables measured;Value\n";
    let result = sniff(content);
    assert_eq!(result.delimiter, b';');
    assert!(result.dialect.agtrails);
    assert!(result.dialect.has_meta);
}

#[test]
fn test_marker_beyond_budget_is_ignored() {
    // 8 KiB of plain data rows before the first marker line
    let mut content = String::new();
    for i in 0..512 {
        content.push_str(&format!("row{i},aaaaaaaa,bbbbbbbb\n"));
    }
    content.push_str("#;EXNAME\n");
    let result = sniff(&content);
    assert_eq!(result.delimiter, b',');
}
