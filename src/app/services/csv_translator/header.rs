//! Header-row interpretation
//!
//! A header row becomes an immutable [`CsvHeader`] descriptor: the ordered
//! variable names, the skipped column positions, the inferred default domain
//! and insertion path, and (for AgTrails) the located pivot columns. One
//! descriptor is active at a time; the next header row replaces it.

use std::collections::HashSet;

use csv::StringRecord;
use tracing::debug;

use crate::app::models::Domain;
use crate::app::services::pathfinder::{VarPath, VariableTable};
use crate::constants::{
    AGTRAILS_DEFAULT_VALUE_COLUMN, AGTRAILS_DEFAULT_VARIABLE_COLUMN, AGTRAILS_VALUE_LABEL,
    AGTRAILS_VARIABLE_LABEL, COMMENT_MARKER,
};

use super::agtrails;

/// Immutable descriptor of the currently active header row
#[derive(Debug, Clone)]
pub struct CsvHeader {
    /// Variable names in column order; index `i` pairs with data column `i + 1`
    pub variables: Vec<String>,

    /// Absolute data-row positions whose values must be ignored
    pub skipped_columns: HashSet<usize>,

    /// Domain of the first classifiable variable, used for unresolved names
    pub default_domain: Option<Domain>,

    /// Insertion path of the first classifiable variable
    pub default_path: Option<VarPath>,

    /// Column holding the variable name of an AgTrails pivot row
    pub variable_column: usize,

    /// Column holding the value of an AgTrails pivot row
    pub value_column: usize,
}

impl CsvHeader {
    /// Descriptor used before any header row has been seen; data rows parsed
    /// against it degenerate to no-ops
    pub fn empty() -> Self {
        Self {
            variables: Vec::new(),
            skipped_columns: HashSet::new(),
            default_domain: None,
            default_path: None,
            variable_column: AGTRAILS_DEFAULT_VARIABLE_COLUMN,
            value_column: AGTRAILS_DEFAULT_VALUE_COLUMN,
        }
    }

    /// Build a descriptor from a generic `#`/`%` header row
    ///
    /// Columns after the identity column: a `!`-prefixed column is recorded
    /// as skipped but still occupies its position, so later columns keep
    /// their alignment; blank columns are dropped entirely.
    pub fn from_summary_row(record: &StringRecord, table: &dyn VariableTable) -> Self {
        let mut header = Self::empty();

        for (position, column) in record.iter().enumerate().skip(1) {
            if column.starts_with(COMMENT_MARKER) {
                header.skipped_columns.insert(position);
            }
            if !column.trim().is_empty() {
                header.variables.push(column.to_string());
            }
        }

        header.infer_defaults(table);
        debug!(
            variables = header.variables.len(),
            skipped = header.skipped_columns.len(),
            default_domain = ?header.default_domain,
            "built header descriptor"
        );
        header
    }

    /// Build a descriptor from an AgTrails section signature row
    ///
    /// Each label goes through the dialect rename table. An unmapped label is
    /// kept as lower-cased literal text to preserve column alignment, but its
    /// data is skipped. The var/value pivot columns are located by label, or
    /// fall back to their fixed default positions.
    pub fn from_agtrails_row(record: &StringRecord, table: &dyn VariableTable) -> Self {
        let mut header = Self::empty();
        let mut variable_column = None;
        let mut value_column = None;

        for (position, column) in record.iter().enumerate().skip(1) {
            let label = column.trim();
            if label.eq_ignore_ascii_case(AGTRAILS_VARIABLE_LABEL) {
                variable_column = Some(position);
            } else if label.eq_ignore_ascii_case(AGTRAILS_VALUE_LABEL) {
                value_column = Some(position);
            }

            match agtrails::canonical_variable(label) {
                Some(canonical) => header.variables.push(canonical.to_string()),
                None => {
                    header.skipped_columns.insert(position);
                    header.variables.push(label.to_lowercase());
                }
            }
        }

        header.variable_column = variable_column.unwrap_or(AGTRAILS_DEFAULT_VARIABLE_COLUMN);
        header.value_column = value_column.unwrap_or(AGTRAILS_DEFAULT_VALUE_COLUMN);
        header.infer_defaults(table);
        debug!(
            variables = header.variables.len(),
            variable_column = header.variable_column,
            value_column = header.value_column,
            "built AgTrails header descriptor"
        );
        header
    }

    /// True when the data value at this absolute position must be ignored
    pub fn is_skipped(&self, position: usize) -> bool {
        self.skipped_columns.contains(&position)
    }

    /// Fix the default domain and path from the first classifiable variable
    fn infer_defaults(&mut self, table: &dyn VariableTable) {
        for (index, variable) in self.variables.iter().enumerate() {
            if self.is_skipped(index + 1) {
                continue;
            }
            let lowered = variable.trim().to_lowercase();
            let domain = table.classify(&lowered);
            if domain != Domain::Unknown {
                self.default_domain = Some(domain);
                self.default_path = table.canonical_path(&lowered);
                return;
            }
        }
    }
}
