//! Variable classification and nested-path insertion
//!
//! The translation engine never hard-codes the agronomic vocabulary. It talks
//! to a read-only [`VariableTable`] capability that maps a lower-cased
//! variable name to its domain partition, its canonical insertion path inside
//! a domain record, and a date-field predicate. The crate ships [`IcasaTable`]
//! as the default vocabulary; tests may substitute a stub table.

pub mod codes;
pub mod table;

use crate::app::models::{DataMap, DataValue, Domain};

pub use table::IcasaTable;

/// Canonical insertion path of a variable inside a domain record
///
/// A path is a chain of nested map components with an optional trailing list
/// bucket. `weather@daily_weather` navigates into the `weather` sub-tree and
/// appends into the `daily_weather` list; `initial_conditions` is a plain
/// nested map; the empty path is the record root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarPath {
    /// Nested map components, outermost first
    pub components: Vec<String>,

    /// Trailing list bucket for repeating sub-sections
    pub bucket: Option<String>,
}

impl VarPath {
    /// The record root: no nesting, no bucket
    pub fn root() -> Self {
        Self {
            components: Vec::new(),
            bucket: None,
        }
    }

    /// Parse a path expression such as `soil@soil_layer` or
    /// `management:events` (colon-nested maps, `@` list bucket)
    pub fn parse(expr: &str) -> Self {
        let (prefix, bucket) = match expr.split_once('@') {
            Some((p, b)) => (p, Some(b.to_string())),
            None => (expr, None),
        };
        let components = prefix
            .split(':')
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        Self { components, bucket }
    }
}

/// Read-only lookup capability for the agronomic vocabulary
pub trait VariableTable: Send + Sync {
    /// Domain partition of a lower-cased variable name
    fn classify(&self, variable: &str) -> Domain;

    /// Canonical insertion path, if the variable is in the table
    fn canonical_path(&self, variable: &str) -> Option<VarPath>;

    /// True when the variable holds a calendar date
    fn is_date(&self, variable: &str) -> bool;
}

/// Insert a value into a domain record at the given path
///
/// Map components are created on demand; a component occupied by a non-map
/// value is replaced. For bucket paths the value lands in the last list
/// element unless that element already holds the variable, in which case a
/// new element is appended. Series rows rely on this: each row re-states its
/// leading variable, which rolls the bucket over to a fresh sub-tree.
pub fn insert_value(record: &mut DataMap, path: &VarPath, variable: &str, value: &str) {
    let mut current = record;
    for component in &path.components {
        let entry = current
            .entry(component.clone())
            .or_insert_with(|| DataValue::Map(DataMap::new()));
        if !matches!(entry, DataValue::Map(_)) {
            *entry = DataValue::Map(DataMap::new());
        }
        match entry {
            DataValue::Map(m) => current = m,
            _ => unreachable!(),
        }
    }

    match &path.bucket {
        None => {
            current.insert(variable.to_string(), DataValue::Text(value.to_string()));
        }
        Some(bucket) => {
            let entry = current
                .entry(bucket.clone())
                .or_insert_with(|| DataValue::List(Vec::new()));
            if !matches!(entry, DataValue::List(_)) {
                *entry = DataValue::List(Vec::new());
            }
            let list = match entry {
                DataValue::List(l) => l,
                _ => unreachable!(),
            };
            let needs_new = match list.last() {
                None => true,
                Some(last) => last.contains_key(variable),
            };
            if needs_new {
                list.push(DataMap::new());
            }
            list.last_mut()
                .expect("bucket list has at least one element")
                .insert(variable.to_string(), DataValue::Text(value.to_string()));
        }
    }
}
