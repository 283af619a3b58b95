//! Variable classification and value normalization
//!
//! Every (record id, variable, value) triple funnels through here. The
//! structural special cases run first: cross-domain reference fields are
//! mirrored onto the experiment record, experiment names get an occurrence
//! suffix, and date fields are reformatted to the compact 8-digit form.
//! Generic classification then routes the value into the experiment, weather
//! or soil tree and delegates the nested insertion to the path table.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::app::models::{DataMap, DataValue, Domain};
use crate::app::services::pathfinder::{self, VarPath};
use crate::constants::{
    EXPERIMENT_NAME_FIELD, INPUT_DATE_FORMAT, SOIL_ID_FIELD, STORED_DATE_FORMAT,
    WEATHER_STATION_FIELD,
};

use super::translator::{CsvTranslator, ReadContext};

impl CsvTranslator {
    /// Classify, normalize and insert one variable/value pair
    pub(crate) fn insert_triple(
        &mut self,
        ctx: &mut ReadContext,
        id: &str,
        variable: &str,
        value: &str,
    ) {
        let variable = variable.trim().to_lowercase();
        let mut value = value.to_string();

        if variable == WEATHER_STATION_FIELD || variable == SOIL_ID_FIELD {
            // Mirror the cross-reference onto the experiment record so the
            // link survives even if the record is otherwise pruned. The value
            // still flows on into its classified domain tree below.
            let experiment = self.ensure_record(Domain::Experiment, id);
            experiment.insert(variable.clone(), DataValue::Text(value.clone()));
        } else if variable == EXPERIMENT_NAME_FIELD {
            let count = ctx
                .treatment_counter
                .entry(value.clone())
                .and_modify(|c| *c += 1)
                .or_insert(1);
            value = format!("{}_{}", value, count);
        } else if self.table.is_date(&variable) {
            match normalize_date(&value) {
                Ok(normalized) => {
                    debug!(%variable, from = %value, to = %normalized, "normalized date");
                    value = normalized;
                }
                Err(reason) => {
                    warn!(%variable, %value, %reason, "dropping unparseable date");
                    self.stats.values_dropped += 1;
                    self.stats.errors.push(reason);
                    return;
                }
            }
        }

        let domain = match self.table.classify(&variable) {
            Domain::Weather => Domain::Weather,
            Domain::Soil => Domain::Soil,
            Domain::Unknown => {
                if self.unknown_variables.insert(variable.clone()) {
                    warn!(%variable, "storing unclassified variable");
                }
                // Fall back to the header's default domain when it points at
                // weather or soil; everything else lands on the experiment.
                match ctx.header.default_domain {
                    Some(Domain::Weather) => Domain::Weather,
                    Some(Domain::Soil) => Domain::Soil,
                    _ => Domain::Experiment,
                }
            }
            _ => Domain::Experiment,
        };

        let path = self
            .table
            .canonical_path(&variable)
            .or_else(|| ctx.header.default_path.clone())
            .unwrap_or_else(VarPath::root);

        let record = self.ensure_record(domain, id);
        pathfinder::insert_value(record, &path, &variable, &value);
        self.stats.values_inserted += 1;
    }

    /// Fetch or lazily create the record for an id in one domain partition,
    /// registering its first-creation order
    pub(crate) fn ensure_record(&mut self, domain: Domain, id: &str) -> &mut DataMap {
        let (map, order) = match domain {
            Domain::Weather => (&mut self.weathers, &mut self.weather_order),
            Domain::Soil => (&mut self.soils, &mut self.soil_order),
            _ => (&mut self.experiments, &mut self.experiment_order),
        };
        map.entry(id.to_string()).or_insert_with(|| {
            order.push(id.to_string());
            DataMap::new()
        })
    }
}

/// Reformat a `YYYY/MM/DD` or `YYYY-MM-DD` date into compact `YYYYMMDD`
///
/// An unparseable date is a per-value failure, reported to the caller; it
/// never aborts the containing row or stream.
pub(crate) fn normalize_date(value: &str) -> Result<String, String> {
    let folded = value.trim().replace('/', "-");
    NaiveDate::parse_from_str(&folded, INPUT_DATE_FORMAT)
        .map(|date| date.format(STORED_DATE_FORMAT).to_string())
        .map_err(|e| format!("unparseable date '{value}': {e}"))
}
