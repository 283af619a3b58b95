//! Built-in ICASA-style vocabulary table
//!
//! Maps the common experiment, weather, soil, initial-condition and
//! management-event variables to their domain and canonical insertion path.
//! The table is deliberately data-driven so extending the vocabulary never
//! touches the translation engine.

use std::collections::{HashMap, HashSet};

use super::{VarPath, VariableTable};
use crate::app::models::Domain;

/// One vocabulary row: variable, domain, insertion path expression
type VocabRow = (&'static str, Domain, &'static str);

/// Experiment-level general fields live at the record root
const VOCABULARY: &[VocabRow] = &[
    // Experiment metadata
    ("exname", Domain::Experiment, ""),
    ("local_name", Domain::Experiment, ""),
    ("trt_name", Domain::Experiment, ""),
    ("trt_num", Domain::Experiment, ""),
    ("people", Domain::Experiment, ""),
    ("institution", Domain::Experiment, ""),
    ("rotation", Domain::Experiment, ""),
    ("crid", Domain::Experiment, ""),
    ("cul_id", Domain::Experiment, ""),
    ("cul_name", Domain::Experiment, ""),
    ("fl_name", Domain::Experiment, ""),
    ("fl_lat", Domain::Experiment, ""),
    ("fl_long", Domain::Experiment, ""),
    ("flele", Domain::Experiment, ""),
    ("fl_loc_1", Domain::Experiment, ""),
    ("fl_loc_2", Domain::Experiment, ""),
    ("fl_loc_3", Domain::Experiment, ""),
    ("sdat", Domain::Experiment, ""),
    ("endat", Domain::Experiment, ""),
    // Observed summary data
    ("hwah", Domain::Experiment, "observed"),
    ("cwah", Domain::Experiment, "observed"),
    ("hdate", Domain::Experiment, "observed"),
    ("adat", Domain::Experiment, "observed"),
    ("mdat", Domain::Experiment, "observed"),
    // Observed time-series data
    ("date", Domain::Experiment, "observed@time_series"),
    ("cwad", Domain::Experiment, "observed@time_series"),
    ("lai", Domain::Experiment, "observed@time_series"),
    // Initial conditions
    ("icdat", Domain::Experiment, "initial_conditions"),
    ("icpcr", Domain::Experiment, "initial_conditions"),
    ("icrag", Domain::Experiment, "initial_conditions"),
    ("icbl", Domain::Experiment, "initial_conditions@soil_layer"),
    ("ich2o", Domain::Experiment, "initial_conditions@soil_layer"),
    ("icnh4", Domain::Experiment, "initial_conditions@soil_layer"),
    ("icno3", Domain::Experiment, "initial_conditions@soil_layer"),
    // Management events
    ("pdate", Domain::Experiment, "management@events"),
    ("plpop", Domain::Experiment, "management@events"),
    ("plrs", Domain::Experiment, "management@events"),
    ("pldp", Domain::Experiment, "management@events"),
    ("plma", Domain::Experiment, "management@events"),
    ("fedate", Domain::Experiment, "management@events"),
    ("fecd", Domain::Experiment, "management@events"),
    ("feacd", Domain::Experiment, "management@events"),
    ("feamn", Domain::Experiment, "management@events"),
    ("feamp", Domain::Experiment, "management@events"),
    ("feamk", Domain::Experiment, "management@events"),
    ("idate", Domain::Experiment, "management@events"),
    ("irval", Domain::Experiment, "management@events"),
    ("irop", Domain::Experiment, "management@events"),
    ("tdate", Domain::Experiment, "management@events"),
    ("tiimp", Domain::Experiment, "management@events"),
    ("tidep", Domain::Experiment, "management@events"),
    ("omdat", Domain::Experiment, "management@events"),
    ("omamt", Domain::Experiment, "management@events"),
    ("hadate", Domain::Experiment, "management@events"),
    ("event", Domain::Experiment, "management@events"),
    // Weather station metadata
    ("wst_id", Domain::Weather, "weather"),
    ("wst_name", Domain::Weather, "weather"),
    ("wst_lat", Domain::Weather, "weather"),
    ("wst_long", Domain::Weather, "weather"),
    ("wst_elev", Domain::Weather, "weather"),
    ("tav", Domain::Weather, "weather"),
    ("tamp", Domain::Weather, "weather"),
    ("refht", Domain::Weather, "weather"),
    ("wndht", Domain::Weather, "weather"),
    // Daily weather series
    ("w_date", Domain::Weather, "weather@daily_weather"),
    ("srad", Domain::Weather, "weather@daily_weather"),
    ("tmax", Domain::Weather, "weather@daily_weather"),
    ("tmin", Domain::Weather, "weather@daily_weather"),
    ("rain", Domain::Weather, "weather@daily_weather"),
    ("wind", Domain::Weather, "weather@daily_weather"),
    ("dewp", Domain::Weather, "weather@daily_weather"),
    ("vprs", Domain::Weather, "weather@daily_weather"),
    ("rhum", Domain::Weather, "weather@daily_weather"),
    // Soil profile metadata
    ("soil_id", Domain::Soil, "soil"),
    ("soil_name", Domain::Soil, "soil"),
    ("sl_source", Domain::Soil, "soil"),
    ("sltx", Domain::Soil, "soil"),
    ("sldp", Domain::Soil, "soil"),
    ("soil_lat", Domain::Soil, "soil"),
    ("soil_long", Domain::Soil, "soil"),
    ("classification", Domain::Soil, "soil"),
    ("salb", Domain::Soil, "soil"),
    ("slro", Domain::Soil, "soil"),
    ("slnf", Domain::Soil, "soil"),
    // Soil layer series
    ("sllb", Domain::Soil, "soil@soil_layer"),
    ("slmh", Domain::Soil, "soil@soil_layer"),
    ("slll", Domain::Soil, "soil@soil_layer"),
    ("sldul", Domain::Soil, "soil@soil_layer"),
    ("slsat", Domain::Soil, "soil@soil_layer"),
    ("slrgf", Domain::Soil, "soil@soil_layer"),
    ("sksat", Domain::Soil, "soil@soil_layer"),
    ("slbdm", Domain::Soil, "soil@soil_layer"),
    ("sloc", Domain::Soil, "soil@soil_layer"),
    ("slcly", Domain::Soil, "soil@soil_layer"),
    ("slsil", Domain::Soil, "soil@soil_layer"),
    ("slphw", Domain::Soil, "soil@soil_layer"),
];

/// Variables holding calendar dates, normalized to `YYYYMMDD` on insertion
const DATE_VARIABLES: &[&str] = &[
    "sdat", "endat", "pdate", "hdate", "adat", "mdat", "icdat", "fedate", "idate", "tdate",
    "omdat", "hadate", "w_date", "date",
];

/// Default vocabulary table shipped with the crate
#[derive(Debug)]
pub struct IcasaTable {
    domains: HashMap<&'static str, Domain>,
    paths: HashMap<&'static str, VarPath>,
    dates: HashSet<&'static str>,
}

impl IcasaTable {
    pub fn new() -> Self {
        let mut domains = HashMap::new();
        let mut paths = HashMap::new();
        for (variable, domain, path) in VOCABULARY {
            domains.insert(*variable, *domain);
            paths.insert(*variable, VarPath::parse(path));
        }
        Self {
            domains,
            paths,
            dates: DATE_VARIABLES.iter().copied().collect(),
        }
    }
}

impl Default for IcasaTable {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableTable for IcasaTable {
    fn classify(&self, variable: &str) -> Domain {
        self.domains.get(variable).copied().unwrap_or(Domain::Unknown)
    }

    fn canonical_path(&self, variable: &str) -> Option<VarPath> {
        self.paths.get(variable).cloned()
    }

    fn is_date(&self, variable: &str) -> bool {
        self.dates.contains(variable)
    }
}
