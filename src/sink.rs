use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// One flattened dataset row. Field order is the column order of the output
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbRecord {
    pub verb: String,
    pub conjugations_present: String,
    pub conjugations_past: String,
    pub conjugations_perfect: String,
    pub conjugations_imperative: String,
    pub structures: String,
    pub wortfamilie: String,
    pub prefix_verbs: String,
}

const HEADER: [&str; 8] = [
    "verb",
    "conjugations_present",
    "conjugations_past",
    "conjugations_perfect",
    "conjugations_imperative",
    "structures",
    "wortfamilie",
    "prefix_verbs",
];

/// Write records as UTF-8 CSV: header row first, one row per record, order
/// preserved, no index column. The header is written even for an empty run.
pub fn write_records<W: Write>(writer: W, records: &[VerbRecord]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv(path: &Path, records: &[VerbRecord]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    write_records(file, records)
}

// ── Tests ──
