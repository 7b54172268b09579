//! POS timekeeping CSV loader
//!
//! Export layout:
//! - line 1: banner (skipped)
//! - line 2: header ("Name", ..., "Work Hours", ...)
//! - per-employee rows until the first row whose second column is "Role"
//! - role summary section (ignored)

mod header;

pub use header::{find_cutoff, HeaderColumns, CUTOFF_MARKER, HOURS_HEADER, NAME_HEADER};

use crate::error::{PayrollError, Result};
use csv::{ReaderBuilder, StringRecord};
use payroll_merge_common::{parse_hours, CleanedRecord, DiagnosticKind, Diagnostics, ParsedHours};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A data row before cleaning
#[derive(Debug, Clone)]
pub struct RawRecord {
    /// 1-based data row number (banner and header excluded)
    pub row: usize,
    pub name: String,
    pub hours_raw: String,
}

/// Load and clean the hours section of a POS export
pub fn load_hours(csv_path: &Path, diagnostics: &mut Diagnostics) -> Result<Vec<CleanedRecord>> {
    if !csv_path.exists() {
        return Err(PayrollError::CsvNotFound(csv_path.display().to_string()));
    }

    let file = File::open(csv_path)?;
    read_hours(file, &csv_path.display().to_string(), diagnostics)
}

/// Same as [`load_hours`] for any reader; `source` names it in messages
pub fn read_hours<R: Read>(
    reader: R,
    source: &str,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<CleanedRecord>> {
    let raw = read_raw_records(reader, source, diagnostics)?;

    let records: Vec<CleanedRecord> = raw
        .into_iter()
        .filter_map(|r| clean_record(r, diagnostics))
        .collect();

    diagnostics.info(
        DiagnosticKind::RowsLoaded,
        None,
        format!("Read {} rows from {}", records.len(), source),
    );

    Ok(records)
}

/// Name/hours pairs from the rows above the cutoff
pub fn read_raw_records<R: Read>(
    reader: R,
    source: &str,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<RawRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = csv_reader
        .records()
        .collect::<std::result::Result<Vec<StringRecord>, csv::Error>>()?
        .into_iter()
        .skip(1);

    let header = rows
        .next()
        .ok_or_else(|| PayrollError::MissingHeader(source.to_string()))?;
    let columns = HeaderColumns::locate(&header)?;
    let data: Vec<StringRecord> = rows.collect();

    let usable = match find_cutoff(&data) {
        Some(index) => index,
        None => {
            diagnostics.warn(
                DiagnosticKind::CutoffNotFound,
                None,
                format!(
                    "Cutoff '{}' not found in column B of {}. Processing all rows.",
                    CUTOFF_MARKER, source
                ),
            );
            data.len()
        }
    };

    Ok(data[..usable]
        .iter()
        .enumerate()
        .map(|(i, row)| RawRecord {
            row: i + 1,
            name: row.get(columns.name).unwrap_or_default().to_string(),
            hours_raw: row.get(columns.hours).unwrap_or_default().to_string(),
        })
        .collect())
}

fn clean_record(raw: RawRecord, diagnostics: &mut Diagnostics) -> Option<CleanedRecord> {
    if raw.name.trim().is_empty() {
        diagnostics.warn(
            DiagnosticKind::EmptyName,
            Some(raw.row),
            format!("Dropped: empty Name (Work Hours '{}')", raw.hours_raw),
        );
        return None;
    }

    match parse_hours(&raw.hours_raw) {
        ParsedHours::Valid(hours) => Some(CleanedRecord::new(raw.name, hours)),
        ParsedHours::Empty => {
            diagnostics.warn(
                DiagnosticKind::EmptyHours,
                Some(raw.row),
                format!("Dropped '{}': empty Work Hours", raw.name),
            );
            None
        }
        ParsedHours::Malformed(original) => {
            diagnostics.warn(
                DiagnosticKind::MalformedHours,
                Some(raw.row),
                format!("Dropped '{}': could not convert Work Hours '{}'", raw.name, original),
            );
            None
        }
    }
}
