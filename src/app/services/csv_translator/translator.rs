//! Translation orchestration
//!
//! [`CsvTranslator`] owns the accumulated domain trees and drives one stream
//! at a time through sniffing, line classification, header building and
//! record assembly. Domain trees accumulate across every file or archive
//! entry processed in one run; per-stream state lives in a fresh
//! [`ReadContext`] for each stream.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};
use zip::ZipArchive;

use crate::app::models::DataMap;
use crate::app::services::pathfinder::{IcasaTable, VariableTable};
use crate::constants::{CSV_SUFFIX, ZIP_SUFFIX};
use crate::{Error, Result};

use super::consolidate::{PlaceholderPredicate, default_placeholder};
use super::header::CsvHeader;
use super::line::{self, LineKind, ParseMode};
use super::sniffer::{self, DialectFlags};
use super::stats::TranslateStats;

/// Per-stream mutable state, created afresh for every input stream
///
/// The natural-key index guarantees that two data rows sharing a first-column
/// token merge into one logical record within a stream; the treatment counter
/// disambiguates repeated experiment names. Neither survives into the next
/// stream.
#[derive(Debug)]
pub(crate) struct ReadContext {
    /// Sniffed dialect flags for this stream
    pub dialect: DialectFlags,

    /// Current parser mode
    pub mode: ParseMode,

    /// Currently active header descriptor
    pub header: CsvHeader,

    /// Natural key (raw first-column token) to synthetic record id
    pub id_map: HashMap<String, String>,

    /// Raw experiment name to occurrence count
    pub treatment_counter: HashMap<String, u32>,
}

impl ReadContext {
    fn new(dialect: DialectFlags) -> Self {
        Self {
            dialect,
            mode: ParseMode::Unknown,
            header: CsvHeader::empty(),
            id_map: HashMap::new(),
            treatment_counter: HashMap::new(),
        }
    }
}

/// Translation engine for agronomic trial CSV dialects
///
/// Not safe for concurrent use by multiple threads against the same file
/// set; independent instances are fully independent, including the
/// unknown-variable warning dedup set, which is per instance.
pub struct CsvTranslator {
    pub(crate) table: Arc<dyn VariableTable>,
    pub(crate) placeholder: PlaceholderPredicate,

    /// Domain partitions, keyed by synthetic record id
    pub(crate) experiments: HashMap<String, DataMap>,
    pub(crate) weathers: HashMap<String, DataMap>,
    pub(crate) soils: HashMap<String, DataMap>,

    /// First-creation order of records in each partition
    pub(crate) experiment_order: Vec<String>,
    pub(crate) weather_order: Vec<String>,
    pub(crate) soil_order: Vec<String>,

    /// Synthetic id of the AgTrails meta record, merged on consolidation
    pub(crate) agtrails_meta_id: Option<String>,

    /// Variable names already warned about, to suppress duplicate warnings
    pub(crate) unknown_variables: HashSet<String>,

    next_id: u64,
    pub(crate) stats: TranslateStats,
}

impl CsvTranslator {
    /// Create a translator backed by the given vocabulary table
    pub fn new(table: Arc<dyn VariableTable>) -> Self {
        Self {
            table,
            placeholder: default_placeholder,
            experiments: HashMap::new(),
            weathers: HashMap::new(),
            soils: HashMap::new(),
            experiment_order: Vec::new(),
            weather_order: Vec::new(),
            soil_order: Vec::new(),
            agtrails_meta_id: None,
            unknown_variables: HashSet::new(),
            next_id: 0,
            stats: TranslateStats::new(),
        }
    }

    /// Replace the placeholder-pruning predicate used on consolidation
    pub fn with_placeholder_predicate(mut self, predicate: PlaceholderPredicate) -> Self {
        self.placeholder = predicate;
        self
    }

    /// Statistics accumulated so far in this run
    pub fn stats(&self) -> &TranslateStats {
        &self.stats
    }

    /// Translate one input file, accumulating into the domain trees
    ///
    /// File-type selection is by name suffix: `.csv` is a single stream,
    /// `.zip` is a bundle whose entries are processed in listing order. Any
    /// other suffix is ignored with a warning.
    pub fn translate_file(&mut self, path: &Path) -> Result<()> {
        let display_name = path.display().to_string();
        let lowered = display_name.to_lowercase();

        if lowered.ends_with(CSV_SUFFIX) {
            info!(file = %display_name, "translating CSV file");
            let content = std::fs::read_to_string(path)
                .map_err(|e| Error::io(format!("failed to read {display_name}"), e))?;
            self.translate_stream(&content, &display_name)
        } else if lowered.ends_with(ZIP_SUFFIX) {
            info!(file = %display_name, "translating ZIP bundle");
            self.translate_archive(path, &display_name)
        } else {
            warn!(file = %display_name, "unrecognized input suffix, ignoring");
            Ok(())
        }
    }

    /// Translate every entry of a ZIP bundle in listing order
    ///
    /// Each entry is fully read and released before the next one is opened;
    /// an error on one entry aborts the whole read.
    fn translate_archive(&mut self, path: &Path, display_name: &str) -> Result<()> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("failed to open archive {display_name}"), e))?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| Error::archive(display_name, "corrupt archive structure", Some(e)))?;

        for index in 0..archive.len() {
            let (entry_name, content) = {
                let mut entry = archive
                    .by_index(index)
                    .map_err(|e| Error::archive(display_name, "failed to open entry", Some(e)))?;
                if entry.is_dir() {
                    continue;
                }
                let name = entry.name().to_string();
                let mut content = String::new();
                entry
                    .read_to_string(&mut content)
                    .map_err(|e| Error::io(format!("failed to read entry {name}"), e))?;
                (name, content)
            };
            debug!(entry = %entry_name, "entering archive entry");
            self.translate_stream(&content, &entry_name)?;
        }
        Ok(())
    }

    /// Translate one in-memory stream
    pub fn translate_stream(&mut self, content: &str, source: &str) -> Result<()> {
        let sniffed = sniffer::sniff(content);
        let mut ctx = ReadContext::new(sniffed.dialect);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(sniffed.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        for result in reader.records() {
            let record = result
                .map_err(|e| Error::csv_decoding(source, "failed to decode row", Some(e)))?;
            self.stats.lines_read += 1;

            let kind = line::classify(&record, ctx.dialect, ctx.mode);
            debug!(?kind, mode = ?ctx.mode, "classified line");

            match kind {
                LineKind::Comment | LineKind::Directive | LineKind::Blank => {}
                LineKind::SummaryHeader | LineKind::SeriesHeader => {
                    ctx.header = CsvHeader::from_summary_row(&record, self.table.as_ref());
                }
                LineKind::DialectDataHeader | LineKind::DialectMetaHeader => {
                    ctx.header = CsvHeader::from_agtrails_row(&record, self.table.as_ref());
                }
                LineKind::CompleteRecord => self.parse_data_row(&mut ctx, &record, true),
                LineKind::Data => self.parse_data_row(&mut ctx, &record, false),
            }

            ctx.mode = line::transition(ctx.mode, kind);
        }

        self.stats.files_processed += 1;
        Ok(())
    }

    /// Mint a fresh synthetic record identifier, unique within this run
    pub(crate) fn mint_id(&mut self) -> String {
        self.next_id += 1;
        format!("record_{:06}", self.next_id)
    }
}

impl Default for CsvTranslator {
    fn default() -> Self {
        Self::new(Arc::new(IcasaTable::new()))
    }
}
