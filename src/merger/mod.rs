//! Payroll template merger
//!
//! Opens the template workbook, matches each record to an employee row by
//! normalized name, and writes regular/overtime hours into the selected
//! week's columns. Names missing from the template get a new row under the
//! last column-B entry, flagged with a red fill.

mod roster;

pub use roster::{cell_text, InsertCursor, Roster};

use crate::error::{PayrollError, Result};
use crate::output::{ensure_parent_dir, is_same_file};
use payroll_merge_common::week::ANCHOR_COLUMN;
use payroll_merge_common::{
    column_letter, normalize, CleanedRecord, DiagnosticKind, Diagnostics, HoursSplit, IgnoreSet,
    MergeStats, ProcessingResult, TargetColumns, Week,
};
use std::collections::HashSet;
use std::path::Path;
use umya_spreadsheet::Worksheet;

/// Solid red fill applied to the name cell of inserted rows
pub const FLAG_FILL_ARGB: &str = "FFFF0000";

/// Merge records into the template and save to `output_path`.
///
/// Never fails: every error is reported through the returned
/// [`ProcessingResult`] and an error-level diagnostic.
pub fn merge_into_template(
    template_path: &Path,
    records: &[CleanedRecord],
    week: &str,
    output_path: &Path,
    diagnostics: &mut Diagnostics,
) -> ProcessingResult {
    match merge(template_path, records, week, output_path, diagnostics) {
        Ok(stats) => ProcessingResult::saved(output_path.to_path_buf(), stats),
        Err(e) => {
            diagnostics.error(DiagnosticKind::Failed, None, e.to_string());
            ProcessingResult::failure(e.to_string())
        }
    }
}

/// Fallible core of [`merge_into_template`].
///
/// Validation (empty records, bad week) happens before any file is touched.
/// The template itself is never a valid output.
pub fn merge(
    template_path: &Path,
    records: &[CleanedRecord],
    week: &str,
    output_path: &Path,
    diagnostics: &mut Diagnostics,
) -> Result<MergeStats> {
    if records.is_empty() {
        return Err(PayrollError::NoRecords);
    }
    let week = Week::parse(week)?;

    if !template_path.exists() {
        return Err(PayrollError::TemplateNotFound(template_path.display().to_string()));
    }
    if is_same_file(template_path, output_path) {
        return Err(PayrollError::OutputIsTemplate(output_path.display().to_string()));
    }

    let mut book = umya_spreadsheet::reader::xlsx::read(template_path)
        .map_err(|e| PayrollError::Spreadsheet(format!("{}: {}", template_path.display(), e)))?;

    let stats = apply_records(
        book.get_active_sheet_mut(),
        records,
        week,
        &IgnoreSet::default(),
        diagnostics,
    );

    ensure_parent_dir(output_path)?;
    umya_spreadsheet::writer::xlsx::write(&book, output_path)
        .map_err(|e| PayrollError::Spreadsheet(format!("{}: {}", output_path.display(), e)))?;

    Ok(stats)
}

/// Apply records to an open worksheet
pub fn apply_records(
    sheet: &mut Worksheet,
    records: &[CleanedRecord],
    week: Week,
    ignore: &IgnoreSet,
    diagnostics: &mut Diagnostics,
) -> MergeStats {
    let columns = week.columns();
    let mut roster = Roster::scan(sheet);
    let mut cursor = InsertCursor::scan(sheet);
    let mut processed: HashSet<String> = HashSet::new();
    let mut stats = MergeStats::default();

    for record in records {
        if !record.is_valid() {
            diagnostics.warn(
                DiagnosticKind::InvalidRecord,
                None,
                format!("Skipping invalid row: Name='{}', Hours={}", record.name, record.hours),
            );
            stats.invalid += 1;
            continue;
        }

        let key = normalize(&record.name);

        if ignore.contains(&key) {
            diagnostics.info(
                DiagnosticKind::IgnoredName,
                None,
                format!("Skipping ignored name: '{}'", record.name),
            );
            stats.ignored += 1;
            continue;
        }

        if !processed.insert(key.clone()) {
            diagnostics.warn(
                DiagnosticKind::DuplicateName,
                None,
                format!("Duplicate entry for '{}'", record.name),
            );
            stats.duplicates += 1;
            continue;
        }

        let split = HoursSplit::from_total(record.hours);

        match roster.row_for(&key) {
            Some(row) => {
                write_hours(sheet, row, columns, split);
                diagnostics.debug(
                    DiagnosticKind::Updated,
                    Some(row as usize),
                    format!("Updated {} (row {})", record.name, row),
                );
                stats.updated += 1;
            }
            None => {
                let anchor = cursor.get_or_insert_with(|| {
                    diagnostics.warn(
                        DiagnosticKind::NoAnchorRow,
                        None,
                        format!(
                            "No value in column {} below the header; inserting from row 2",
                            column_letter(ANCHOR_COLUMN)
                        ),
                    );
                    InsertCursor::below_header()
                });

                let row = anchor.next_row();
                sheet.insert_new_row(&row, &1);
                roster.shift_from(row);

                sheet
                    .get_cell_mut((ANCHOR_COLUMN, row))
                    .set_value_string(record.name.clone());
                sheet
                    .get_style_mut((ANCHOR_COLUMN, row))
                    .set_background_color(FLAG_FILL_ARGB);
                write_hours(sheet, row, columns, split);
                anchor.advance(row);

                diagnostics.info(
                    DiagnosticKind::Inserted,
                    Some(row as usize),
                    format!("Added new '{}' at row {}", record.name, row),
                );
                stats.inserted += 1;
            }
        }
    }

    stats
}

/// Regular hours always; overtime left blank when zero.
fn write_hours(sheet: &mut Worksheet, row: u32, columns: TargetColumns, split: HoursSplit) {
    sheet
        .get_cell_mut((columns.regular, row))
        .set_value_number(split.regular);

    let overtime = sheet.get_cell_mut((columns.overtime, row));
    if split.has_overtime() {
        overtime.set_value_number(split.overtime);
    } else {
        overtime.set_value_string("");
    }
}
