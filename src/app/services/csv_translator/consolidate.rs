//! Final consolidation and pruning of the domain trees
//!
//! After all input is consumed: the AgTrails meta record (if any) is lifted
//! out of the experiment partition and merged as a base layer under every
//! remaining experiment; placeholder-only records are pruned; weather and
//! soil partitions keep only records with a substantive domain sub-tree.

use tracing::{debug, info};

use crate::app::models::{DataMap, DataValue, Domain, TranslationOutput};
use crate::constants::{
    AGTRAILS_DATA_SOURCE, DATA_SOURCE_FIELD, EMBEDDED_SOIL_KEY, EMBEDDED_WEATHER_KEY,
    SOIL_ID_FIELD, WEATHER_STATION_FIELD,
};

use super::translator::CsvTranslator;

/// Decides whether a stripped record is a placeholder to discard
///
/// Configurable because the exact field-count combinations that count as
/// "placeholder-only" may grow; see [`default_placeholder`] for the shipped
/// rule.
pub type PlaceholderPredicate = fn(&DataMap, Domain) -> bool;

/// Shipped placeholder rule
///
/// An experiment holding nothing but its one or two cross-reference fields
/// is a placeholder. A weather or soil sub-tree is a placeholder when empty
/// or holding only its own cross-reference field.
pub fn default_placeholder(record: &DataMap, domain: Domain) -> bool {
    match domain {
        Domain::Experiment => {
            (record.len() == 2
                && record.contains_key(WEATHER_STATION_FIELD)
                && record.contains_key(SOIL_ID_FIELD))
                || (record.len() == 1
                    && (record.contains_key(WEATHER_STATION_FIELD)
                        || record.contains_key(SOIL_ID_FIELD)))
        }
        Domain::Weather => {
            record.is_empty() || (record.len() == 1 && record.contains_key(WEATHER_STATION_FIELD))
        }
        Domain::Soil => {
            record.is_empty() || (record.len() == 1 && record.contains_key(SOIL_ID_FIELD))
        }
        Domain::Unknown => false,
    }
}

impl CsvTranslator {
    /// Consolidate the accumulated trees into the final output triple
    ///
    /// Consumes the translator; experiment ordering follows first-creation
    /// order across all processed streams.
    pub fn finish(mut self) -> TranslationOutput {
        self.merge_agtrails_meta();

        let mut experiments = Vec::new();
        for id in &self.experiment_order {
            let Some(mut experiment) = self.experiments.remove(id) else {
                continue;
            };
            // Transient embedded domain sub-trees never reach the output.
            experiment.remove(EMBEDDED_WEATHER_KEY);
            experiment.remove(EMBEDDED_SOIL_KEY);
            if (self.placeholder)(&experiment, Domain::Experiment) {
                debug!(%id, "pruning placeholder experiment record");
                continue;
            }
            experiments.push(experiment);
        }

        let mut weathers = Vec::new();
        for id in &self.weather_order {
            let Some(mut record) = self.weathers.remove(id) else {
                continue;
            };
            if let Some(DataValue::Map(weather)) = record.remove(EMBEDDED_WEATHER_KEY) {
                if !(self.placeholder)(&weather, Domain::Weather) {
                    weathers.push(weather);
                }
            }
        }

        let mut soils = Vec::new();
        for id in &self.soil_order {
            let Some(mut record) = self.soils.remove(id) else {
                continue;
            };
            if let Some(DataValue::Map(soil)) = record.remove(EMBEDDED_SOIL_KEY) {
                if !(self.placeholder)(&soil, Domain::Soil) {
                    soils.push(soil);
                }
            }
        }

        info!(
            experiments = experiments.len(),
            weathers = weathers.len(),
            soils = soils.len(),
            "consolidated translation output"
        );

        TranslationOutput {
            experiments,
            weathers,
            soils,
        }
    }

    /// Lift the AgTrails meta record out of the experiment partition and
    /// merge it as a base layer under every remaining data record
    fn merge_agtrails_meta(&mut self) {
        let Some(meta_id) = self.agtrails_meta_id.take() else {
            return;
        };
        let Some(mut meta) = self.experiments.remove(&meta_id) else {
            return;
        };
        self.experiment_order.retain(|id| id != &meta_id);
        meta.insert(
            DATA_SOURCE_FIELD.to_string(),
            DataValue::Text(AGTRAILS_DATA_SOURCE.to_string()),
        );
        debug!(%meta_id, "merging AgTrails meta record under data records");

        for id in &self.experiment_order {
            if let Some(record) = self.experiments.get_mut(id) {
                *record = merge_records(&meta, record);
            }
        }
    }
}

/// Merge an incoming record over a base layer
///
/// Strings from the incoming record overwrite the base; lists concatenate
/// base-then-incoming unless the base value is not a list, in which case the
/// incoming list replaces it; nested maps merge recursively; any other
/// combination is overwritten by the incoming value.
pub(crate) fn merge_records(base: &DataMap, incoming: &DataMap) -> DataMap {
    let mut merged = base.clone();
    for (key, value) in incoming {
        let replacement = match (merged.get(key), value) {
            (Some(DataValue::List(existing)), DataValue::List(additions)) => {
                let mut list = existing.clone();
                list.extend(additions.iter().cloned());
                DataValue::List(list)
            }
            (Some(DataValue::Map(existing)), DataValue::Map(additions)) => {
                DataValue::Map(merge_records(existing, additions))
            }
            _ => value.clone(),
        };
        merged.insert(key.clone(), replacement);
    }
    merged
}
