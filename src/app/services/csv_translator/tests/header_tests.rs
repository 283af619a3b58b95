//! Tests for header-row interpretation

use csv::StringRecord;

use crate::app::models::Domain;
use crate::app::services::csv_translator::header::CsvHeader;
use crate::app::services::pathfinder::{IcasaTable, VarPath};

fn record(fields: &[&str]) -> StringRecord {
    let mut r = StringRecord::new();
    for field in fields {
        r.push_field(field);
    }
    r
}

#[test]
fn test_summary_header_collects_variables_in_order() {
    let table = IcasaTable::new();
    let header = CsvHeader::from_summary_row(
        &record(&["#", "EXNAME", "FL_NAME", "CUL_NAME"]),
        &table,
    );
    assert_eq!(header.variables, vec!["EXNAME", "FL_NAME", "CUL_NAME"]);
    assert!(header.skipped_columns.is_empty());
}

#[test]
fn test_commented_column_is_skipped_but_keeps_its_position() {
    let table = IcasaTable::new();
    let header = CsvHeader::from_summary_row(
        &record(&["#", "EXNAME", "!FL_NAME", "CUL_NAME"]),
        &table,
    );
    // The commented column still occupies position 2
    assert_eq!(header.variables.len(), 3);
    assert!(header.is_skipped(2));
    assert!(!header.is_skipped(1));
    assert!(!header.is_skipped(3));
}

#[test]
fn test_blank_header_columns_are_dropped() {
    let table = IcasaTable::new();
    let header = CsvHeader::from_summary_row(&record(&["#", "EXNAME", "  ", "CRID"]), &table);
    assert_eq!(header.variables, vec!["EXNAME", "CRID"]);
}

#[test]
fn test_default_domain_from_first_classifiable_variable() {
    let table = IcasaTable::new();

    let weather = CsvHeader::from_summary_row(&record(&["%", "W_DATE", "TMAX"]), &table);
    assert_eq!(weather.default_domain, Some(Domain::Weather));
    assert_eq!(
        weather.default_path,
        Some(VarPath::parse("weather@daily_weather"))
    );

    let soil = CsvHeader::from_summary_row(&record(&["%", "SLLB", "SLLL"]), &table);
    assert_eq!(soil.default_domain, Some(Domain::Soil));

    let unknown_only = CsvHeader::from_summary_row(&record(&["#", "MYSTERY1", "MYSTERY2"]), &table);
    assert_eq!(unknown_only.default_domain, None);
    assert_eq!(unknown_only.default_path, None);
}

#[test]
fn test_skipped_variable_does_not_fix_default_domain() {
    let table = IcasaTable::new();
    let header = CsvHeader::from_summary_row(&record(&["#", "!W_DATE", "SLLB"]), &table);
    assert_eq!(header.default_domain, Some(Domain::Soil));
}

#[test]
fn test_agtrails_labels_resolve_through_rename_table() {
    let table = IcasaTable::new();
    let header = CsvHeader::from_agtrails_row(
        &record(&["trial_data", "Trial name", "Crop", "Planting date"]),
        &table,
    );
    assert_eq!(header.variables, vec!["exname", "crid", "pdate"]);
    assert!(header.skipped_columns.is_empty());
}

#[test]
fn test_agtrails_unmapped_label_is_skipped_with_fallback_name() {
    let table = IcasaTable::new();
    let header = CsvHeader::from_agtrails_row(
        &record(&["trial_data", "Trial name", "Moon Phase", "Crop"]),
        &table,
    );
    assert_eq!(header.variables, vec!["exname", "moon phase", "crid"]);
    assert!(header.is_skipped(2));
}

#[test]
fn test_agtrails_pivot_columns_located_by_label() {
    let table = IcasaTable::new();
    let header = CsvHeader::from_agtrails_row(
        &record(&["trial_data", "Site name", "Variables measured", "Value"]),
        &table,
    );
    assert_eq!(header.variable_column, 2);
    assert_eq!(header.value_column, 3);
}

#[test]
fn test_agtrails_pivot_columns_default_positions() {
    let table = IcasaTable::new();
    let header = CsvHeader::from_agtrails_row(&record(&["trial_data", "Site name"]), &table);
    assert_eq!(
        header.variable_column,
        crate::constants::AGTRAILS_DEFAULT_VARIABLE_COLUMN
    );
    assert_eq!(
        header.value_column,
        crate::constants::AGTRAILS_DEFAULT_VALUE_COLUMN
    );
}

#[test]
fn test_empty_header_has_no_variables() {
    let header = CsvHeader::empty();
    assert!(header.variables.is_empty());
    assert_eq!(header.default_domain, None);
}
