//! Data model for translated agronomic records
//!
//! Domain records are nested string-keyed trees of scalars, sub-trees and
//! ordered lists of sub-trees (repeating series such as daily weather or
//! soil layers). Three domain partitions exist: experiment, weather, soil.

use serde::Serialize;
use std::collections::HashMap;

/// A nested domain record tree
pub type DataMap = HashMap<String, DataValue>;

/// One value slot inside a domain record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataValue {
    /// Scalar field value, always stored as text
    Text(String),

    /// Nested sub-tree
    Map(DataMap),

    /// Ordered list of sub-trees for repeating sections
    List(Vec<DataMap>),
}

impl DataValue {
    /// Borrow the scalar text if this value is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the nested map if this value is one
    pub fn as_map(&self) -> Option<&DataMap> {
        match self {
            DataValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Borrow the list of sub-trees if this value is one
    pub fn as_list(&self) -> Option<&Vec<DataMap>> {
        match self {
            DataValue::List(l) => Some(l),
            _ => None,
        }
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Text(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::Text(s)
    }
}

/// Domain partition a variable belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Experiment,
    Weather,
    Soil,
    /// Not present in the classification table
    Unknown,
}

/// Final consolidated output of one translation run
///
/// Each collection is ordered; experiments follow the order in which their
/// records were first created across all processed streams.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TranslationOutput {
    pub experiments: Vec<DataMap>,
    pub weathers: Vec<DataMap>,
    pub soils: Vec<DataMap>,
}

impl TranslationOutput {
    /// Total number of records across all three domains
    pub fn record_count(&self) -> usize {
        self.experiments.len() + self.weathers.len() + self.soils.len()
    }

    /// True when no domain holds any record
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}
