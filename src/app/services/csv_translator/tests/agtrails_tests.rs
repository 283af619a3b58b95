//! Tests for the AgTrails dialect path

use super::translate;
use crate::app::models::DataValue;
use crate::app::services::csv_translator::CsvTranslator;
use crate::app::services::csv_translator::agtrails::{
    canonical_variable, convert_data_value, convert_meta_value,
};

#[test]
fn test_rename_table_is_case_insensitive() {
    assert_eq!(canonical_variable("Trial name"), Some("exname"));
    assert_eq!(canonical_variable("PLANTING DATE"), Some("pdate"));
    assert_eq!(canonical_variable("  crop  "), Some("crid"));
    assert_eq!(canonical_variable("moon phase"), None);
}

#[test]
fn test_data_conversion_rescales_units() {
    assert_eq!(convert_data_value("hwah", "4.2").unwrap(), "4200");
    assert_eq!(convert_data_value("cwah", "10.55").unwrap(), "10550");
    assert_eq!(convert_data_value("plrs", "0.75").unwrap(), "75");
    // Other variables pass through trimmed
    assert_eq!(convert_data_value("fl_name", " Hillside ").unwrap(), "Hillside");
}

#[test]
fn test_data_conversion_maps_crop_codes() {
    assert_eq!(convert_data_value("crid", "wheat").unwrap(), "WHT");
    assert_eq!(convert_data_value("crid", "Maize").unwrap(), "MAZ");
    // Unknown crop names stay literal
    assert_eq!(convert_data_value("crid", "quinoa").unwrap(), "quinoa");
}

#[test]
fn test_data_conversion_rejects_non_numeric_measures() {
    assert!(convert_data_value("hwah", "lots").is_err());
    assert!(convert_data_value("plrs", "wide").is_err());
}

#[test]
fn test_meta_conversion_only_touches_crop_codes() {
    assert_eq!(convert_meta_value("crid", "Barley"), "BAR");
    assert_eq!(convert_meta_value("flele", " 350 "), "350");
}

#[test]
fn test_agtrails_data_section_end_to_end() {
    let content = "\
trial_data,Site name,Variables measured,Value
d1,Hillside,Grain yield,4.2
d1,Hillside,Crop,maize
";
    let output = translate(content);
    assert_eq!(output.experiments.len(), 1);

    let experiment = &output.experiments[0];
    assert_eq!(experiment.get("crid"), Some(&DataValue::from("MAZ")));
    let observed = experiment.get("observed").unwrap().as_map().unwrap();
    assert_eq!(observed.get("hwah"), Some(&DataValue::from("4200")));
}

#[test]
fn test_agtrails_unmapped_pivot_variable_is_dropped_not_fatal() {
    let content = "\
trial_data,Site name,Variables measured,Value
d1,Hillside,Moon phase,full
d1,Hillside,Grain yield,4.2
";
    let mut translator = CsvTranslator::default();
    translator.translate_stream(content, "test").unwrap();
    assert_eq!(translator.stats().values_dropped, 1);

    let output = translator.finish();
    assert_eq!(output.experiments.len(), 1);
    let observed = output.experiments[0].get("observed").unwrap().as_map().unwrap();
    assert_eq!(observed.get("hwah"), Some(&DataValue::from("4200")));
}

#[test]
fn test_meta_record_merges_under_every_data_record() {
    let content = "\
trial_meta,Trial name,Site name,Crop,Planting date
m1,Wheat trial,Hillside,Wheat,2021-10-15
trial_data,Site name,Variables measured,Value
d1,Hillside,Grain yield,4.2
d2,Hillside,Grain yield,3.9
";
    let output = translate(content);
    // The meta record itself is lifted out of the output
    assert_eq!(output.experiments.len(), 2);

    for experiment in &output.experiments {
        assert_eq!(
            experiment.get("exname"),
            Some(&DataValue::from("Wheat trial_1"))
        );
        assert_eq!(experiment.get("crid"), Some(&DataValue::from("WHT")));
        // The planting date follows its canonical event path through the merge
        let management = experiment.get("management").unwrap().as_map().unwrap();
        let events = management.get("events").unwrap().as_list().unwrap();
        assert_eq!(events[0].get("pdate"), Some(&DataValue::from("20211015")));
        assert_eq!(
            experiment.get("data_source"),
            Some(&DataValue::from("agtrails"))
        );
    }
    let first = output.experiments[0].get("observed").unwrap().as_map().unwrap();
    assert_eq!(first.get("hwah"), Some(&DataValue::from("4200")));
}

#[test]
fn test_meta_section_beyond_sniff_budget_is_still_recognized() {
    // The meta section starts deep enough that sniffing never sees it; the
    // classifier alone must open it from the signature row.
    let mut content = String::from("trial_data,Site name,Variables measured,Value\n");
    for _ in 0..300 {
        content.push_str("d1,Hillside,Grain yield,4.2\n");
    }
    content.push_str("trial_meta,Trial name,Crop\n");
    content.push_str("m1,Late meta,Maize\n");

    let output = translate(&content);
    assert_eq!(output.experiments.len(), 1);
    let experiment = &output.experiments[0];
    assert_eq!(experiment.get("exname"), Some(&DataValue::from("Late meta_1")));
    assert_eq!(experiment.get("crid"), Some(&DataValue::from("MAZ")));
    assert_eq!(
        experiment.get("data_source"),
        Some(&DataValue::from("agtrails"))
    );
}

#[test]
fn test_data_record_values_overwrite_meta_base() {
    let content = "\
trial_meta,Trial name,Crop
m1,Mixed trial,Wheat
trial_data,Site name,Variables measured,Value
d1,Hillside,Crop,maize
";
    let output = translate(content);
    assert_eq!(output.experiments.len(), 1);
    assert_eq!(
        output.experiments[0].get("crid"),
        Some(&DataValue::from("MAZ"))
    );
}
