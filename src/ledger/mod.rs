use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use log::{debug, info};
use serde::{Deserialize, Serialize, Serializer};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::stats::HistoryStats;


pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const HEADERS: [&str; 7] = [
    "Timestamp",
    "Category",
    "Question",
    "Selected Option",
    "Correct Option",
    "Is Correct",
    "Attempts",
];

fn timestamp_to_string<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

fn bool_to_string<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *value { "True" } else { "False" })
}

/// One answered question. Option indices are positions as displayed to the
/// player, after shuffling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    #[serde(rename = "Timestamp", serialize_with = "timestamp_to_string")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Selected Option")]
    pub selected_option: Option<usize>,
    #[serde(rename = "Correct Option")]
    pub correct_option: usize,
    #[serde(rename = "Is Correct", serialize_with = "bool_to_string")]
    pub is_correct: bool,
    #[serde(rename = "Attempts")]
    pub attempts: u32,
}

#[derive(Deserialize)]
struct LedgerRecord {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Is Correct")]
    is_correct: String,
}

#[derive(Clone, Debug)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Ledger { path: path.into() }
    }

    pub fn get_path(&self) -> &Path {
        &self.path
    }

    /// A ledger that does not exist yet reads as empty history.
    pub fn read_stats(&self) -> Result<HistoryStats> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HistoryStats::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Could not open ledger `{}`", self.path.display()))
            }
        };
        read_stats_from(file)
            .with_context(|| format!("Could not read ledger `{}`", self.path.display()))
    }

    pub fn open_for_append(&self) -> Result<LedgerWriter<File>> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Could not open ledger `{}`", self.path.display()))?;
        let is_empty = file.metadata()?.len() == 0;
        info!(
            "Opened ledger {} for append (new: {})",
            self.path.display(),
            is_empty
        );
        LedgerWriter::new(file, is_empty)
    }
}

pub fn read_stats_from<R: Read>(reader: R) -> Result<HistoryStats> {
    let mut history = HistoryStats::default();
    let mut csv_reader = csv::Reader::from_reader(reader);
    for record in csv_reader.deserialize() {
        let record: LedgerRecord = record.context("Malformed ledger row")?;
        history.record(&record.category, record.is_correct == "True");
    }
    Ok(history)
}

pub struct LedgerWriter<W: Write> {
    csv_writer: csv::Writer<W>,
    rows_written: usize,
}

impl<W: Write> LedgerWriter<W> {
    pub fn new(writer: W, write_header: bool) -> Result<Self> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        if write_header {
            csv_writer.write_record(&HEADERS)?;
            csv_writer.flush()?;
        }
        Ok(LedgerWriter {
            csv_writer,
            rows_written: 0,
        })
    }

    /// Rows are flushed one at a time so that everything answered so far
    /// survives an interrupted session.
    pub fn append(&mut self, entry: &LedgerEntry) -> Result<()> {
        self.csv_writer.serialize(entry)?;
        self.csv_writer.flush()?;
        self.rows_written += 1;
        debug!("Recorded ledger entry: {:?}", entry);
        Ok(())
    }

    pub fn get_rows_written(&self) -> usize {
        self.rows_written
    }

    #[cfg(test)]
    pub fn into_inner(self) -> Result<W> {
        self.csv_writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Could not flush ledger: {}", e.error()))
    }
}
