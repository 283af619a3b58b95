//! Data-row decoding and record identity resolution
//!
//! A data row first resolves its stable record identity through the
//! natural-key index (or mints a fresh identity for inline-complete rows),
//! then decodes into variable/value pairs according to its shape: pivoted
//! event row, AgTrails data pivot row, or the common positional row.

use csv::StringRecord;
use tracing::{debug, warn};

use crate::constants::EVENT_TOKEN;

use super::agtrails;
use super::header::CsvHeader;
use super::line::ParseMode;
use super::translator::{CsvTranslator, ReadContext};

/// Decoded contents of one data row
struct DecodedRow {
    /// Variable/value pairs ready for classification and insertion
    pairs: Vec<(String, String)>,

    /// Per-value failures: the pair was dropped, the row continues
    dropped: Vec<String>,
}

impl CsvTranslator {
    /// Assemble one data row into its logical record
    pub(crate) fn parse_data_row(
        &mut self,
        ctx: &mut ReadContext,
        record: &StringRecord,
        complete: bool,
    ) {
        self.stats.data_rows += 1;

        // Inline-complete rows bypass the natural-key index entirely.
        let natural_key = record.get(0).unwrap_or("").to_string();
        let id = if complete {
            self.mint_id()
        } else if let Some(existing) = ctx.id_map.get(&natural_key) {
            existing.clone()
        } else {
            let minted = self.mint_id();
            ctx.id_map.insert(natural_key.clone(), minted.clone());
            minted
        };
        debug!(key = %natural_key, id = %id, complete, "resolved record identity");

        // A complete row is parsed with summary semantics regardless of mode.
        let mode = if complete { ParseMode::Summary } else { ctx.mode };

        if mode == ParseMode::DialectMeta {
            self.agtrails_meta_id = Some(id.clone());
        }

        let decoded = decode_row(&ctx.header, mode, record);
        for reason in decoded.dropped {
            warn!(%reason, "dropping value");
            self.stats.values_dropped += 1;
            self.stats.errors.push(reason);
        }
        for (variable, value) in decoded.pairs {
            self.insert_triple(ctx, &id, &variable, &value);
        }
    }
}

/// Decode a data row into variable/value pairs by row shape
fn decode_row(header: &CsvHeader, mode: ParseMode, record: &StringRecord) -> DecodedRow {
    let mut decoded = DecodedRow {
        pairs: Vec::new(),
        dropped: Vec::new(),
    };

    let is_event = record
        .get(1)
        .is_some_and(|c| c.trim().eq_ignore_ascii_case(EVENT_TOKEN));

    if is_event {
        decode_event_row(record, &mut decoded);
    } else if mode == ParseMode::DialectData {
        decode_agtrails_pivot_row(header, record, &mut decoded);
    } else {
        decode_positional_row(header, mode, record, &mut decoded);
    }

    decoded
}

/// Pivoted event row: adjacent (variable, value) pairs from the fourth
/// column on; a trailing unpaired column is ignored
fn decode_event_row(record: &StringRecord, decoded: &mut DecodedRow) {
    let mut index = 3;
    while index + 1 < record.len() {
        let variable = record.get(index).unwrap_or("").trim().to_lowercase();
        let value = record.get(index + 1).unwrap_or("").trim();
        if !variable.is_empty() && !value.is_empty() {
            decoded.pairs.push((variable, value.to_string()));
        }
        index += 2;
    }
}

/// AgTrails data pivot row: a single (variable, value) pair read from the
/// header's located columns, resolved through the rename table and passed
/// through the dialect data conversion
fn decode_agtrails_pivot_row(header: &CsvHeader, record: &StringRecord, decoded: &mut DecodedRow) {
    let raw_variable = record.get(header.variable_column).unwrap_or("").trim();
    let raw_value = record.get(header.value_column).unwrap_or("").trim();
    if raw_variable.is_empty() || raw_value.is_empty() {
        return;
    }

    let Some(canonical) = agtrails::canonical_variable(raw_variable) else {
        decoded
            .dropped
            .push(format!("unmapped AgTrails variable '{raw_variable}'"));
        return;
    };

    match agtrails::convert_data_value(canonical, raw_value) {
        Ok(converted) => decoded.pairs.push((canonical.to_string(), converted)),
        Err(reason) => decoded.dropped.push(reason),
    }
}

/// Positional row: header variables paired with data columns at the same
/// offset, skipping columns the header marked, never inserting blank values
fn decode_positional_row(
    header: &CsvHeader,
    mode: ParseMode,
    record: &StringRecord,
    decoded: &mut DecodedRow,
) {
    for (index, variable) in header.variables.iter().enumerate() {
        let position = index + 1;
        if header.is_skipped(position) {
            continue;
        }
        let Some(value) = record.get(position) else {
            break;
        };
        if value.trim().is_empty() {
            continue;
        }
        let value = if mode == ParseMode::DialectMeta {
            agtrails::convert_meta_value(&variable.trim().to_lowercase(), value)
        } else {
            value.to_string()
        };
        decoded.pairs.push((variable.clone(), value));
    }
}
