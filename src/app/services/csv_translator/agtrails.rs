//! AgTrails dialect vocabulary and value conversions
//!
//! AgTrails exports label their columns with human-readable text and use
//! field units that differ from the stored vocabulary. This module owns the
//! case-insensitive rename table and the per-value conversion steps applied
//! to meta- and data-section rows.

use crate::app::services::pathfinder::codes;

/// Raw AgTrails column label (lower-cased) to canonical variable name
const RENAME_TABLE: &[(&str, &str)] = &[
    ("trial name", "exname"),
    ("site name", "fl_name"),
    ("country", "fl_loc_1"),
    ("region", "fl_loc_2"),
    ("latitude", "fl_lat"),
    ("longitude", "fl_long"),
    ("elevation", "flele"),
    ("crop", "crid"),
    ("cultivar", "cul_name"),
    ("planting date", "pdate"),
    ("harvest date", "hdate"),
    ("row spacing", "plrs"),
    ("plant density", "plpop"),
    ("grain yield", "hwah"),
    ("biomass", "cwah"),
    ("weather station", "wst_id"),
    ("soil profile", "soil_id"),
    ("start date", "sdat"),
    ("end date", "endat"),
];

/// Resolve a raw AgTrails label to its canonical variable name
pub fn canonical_variable(label: &str) -> Option<&'static str> {
    let lowered = label.trim().to_lowercase();
    RENAME_TABLE
        .iter()
        .find(|(raw, _)| *raw == lowered)
        .map(|(_, canonical)| *canonical)
}

/// Convert one data-section value before insertion
///
/// Crop names become ICASA codes; yields arrive in t/ha and row spacings in
/// m, both rescaled to the stored units. A numeric field that fails to parse
/// is a per-value failure: the caller drops the value and continues.
pub fn convert_data_value(variable: &str, value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    match variable {
        "crid" => Ok(codes::crop_code(trimmed).unwrap_or(trimmed).to_string()),
        "hwah" | "cwah" => {
            let parsed: f64 = trimmed
                .parse()
                .map_err(|_| format!("unparseable yield value '{trimmed}' for '{variable}'"))?;
            Ok(format_number(codes::yield_t_ha_to_kg_ha(parsed)))
        }
        "plrs" => {
            let parsed: f64 = trimmed
                .parse()
                .map_err(|_| format!("unparseable spacing value '{trimmed}' for '{variable}'"))?;
            Ok(format_number(codes::row_spacing_m_to_cm(parsed)))
        }
        _ => Ok(trimmed.to_string()),
    }
}

/// Convert one meta-section value before insertion
///
/// Meta rows carry descriptive site fields; only the crop name needs the
/// code table, everything else is stored trimmed.
pub fn convert_meta_value(variable: &str, value: &str) -> String {
    let trimmed = value.trim();
    match variable {
        "crid" => codes::crop_code(trimmed).unwrap_or(trimmed).to_string(),
        _ => trimmed.to_string(),
    }
}

/// Render a converted number without a spurious trailing `.0`
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
