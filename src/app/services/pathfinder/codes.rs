//! Coded-value lookup and unit conversions for the AgTrails dialect
//!
//! AgTrails exports spell out crop names and use field units that differ from
//! the stored vocabulary. The translator maps crop names onto ICASA crop
//! codes and rescales the two affected numeric fields.

/// Crop common name (lower-cased) to ICASA crop code
const CROP_CODES: &[(&str, &str)] = &[
    ("maize", "MAZ"),
    ("corn", "MAZ"),
    ("wheat", "WHT"),
    ("rice", "RIC"),
    ("soybean", "SBN"),
    ("barley", "BAR"),
    ("sorghum", "SGG"),
    ("millet", "MLT"),
    ("potato", "POT"),
    ("cassava", "CSV"),
    ("cotton", "COT"),
    ("sugarcane", "SUC"),
];

/// Look up the ICASA code for a crop common name, case-insensitively
pub fn crop_code(name: &str) -> Option<&'static str> {
    let lowered = name.trim().to_lowercase();
    CROP_CODES
        .iter()
        .find(|(common, _)| *common == lowered)
        .map(|(_, code)| *code)
}

/// Convert a yield expressed in t/ha to kg/ha
pub fn yield_t_ha_to_kg_ha(value: f64) -> f64 {
    value * 1000.0
}

/// Convert a row spacing expressed in m to cm
pub fn row_spacing_m_to_cm(value: f64) -> f64 {
    value * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_code_lookup() {
        assert_eq!(crop_code("Maize"), Some("MAZ"));
        assert_eq!(crop_code("  wheat "), Some("WHT"));
        assert_eq!(crop_code("triticale"), None);
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(yield_t_ha_to_kg_ha(5.2), 5200.0);
        assert_eq!(row_spacing_m_to_cm(0.75), 75.0);
    }
}
