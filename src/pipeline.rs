//! One full run: load the CSV, merge into the template, save.
//!
//! This is the call a front end (CLI or a file-picker form) makes after the
//! user has chosen the two input files and a week.

use crate::error::{PayrollError, Result};
use crate::loader;
use crate::merger;
use crate::output::{is_same_file, output_path_in};
use payroll_merge_common::{CleanedRecord, DiagnosticKind, Diagnostics, ProcessingResult};
use std::path::PathBuf;

/// Where the output goes
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Exact file path
    File(PathBuf),
    /// Directory plus a suffix for the derived file name
    Dir { dir: PathBuf, suffix: Option<String> },
}

#[derive(Debug, Clone)]
pub struct RunRequest {
    pub csv_path: PathBuf,
    pub template_path: PathBuf,
    /// "Week 1" or "Week 2"
    pub week: String,
    pub output: OutputTarget,
}

impl RunRequest {
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            OutputTarget::File(path) => path.clone(),
            OutputTarget::Dir { dir, suffix } => {
                output_path_in(dir, &self.template_path, suffix.as_deref())
            }
        }
    }
}

/// Run the whole load-merge-save cycle; failures come back in the result.
pub fn run(request: &RunRequest, diagnostics: &mut Diagnostics) -> ProcessingResult {
    let records = match load(request, diagnostics) {
        Ok(records) => records,
        Err(e) => {
            diagnostics.error(DiagnosticKind::Failed, None, e.to_string());
            return ProcessingResult::failure(e.to_string());
        }
    };

    merge(request, &records, diagnostics)
}

/// First step: refuse the template as output, then read the CSV.
///
/// Nothing is written to disk here.
pub fn load(request: &RunRequest, diagnostics: &mut Diagnostics) -> Result<Vec<CleanedRecord>> {
    let output_path = request.output_path();
    if is_same_file(&request.template_path, &output_path) {
        return Err(PayrollError::OutputIsTemplate(output_path.display().to_string()));
    }

    log::debug!(
        "run: csv={} template={} week={} output={}",
        request.csv_path.display(),
        request.template_path.display(),
        request.week,
        output_path.display()
    );

    loader::load_hours(&request.csv_path, diagnostics)
}

/// Second step: merge loaded records and save the output workbook.
pub fn merge(
    request: &RunRequest,
    records: &[CleanedRecord],
    diagnostics: &mut Diagnostics,
) -> ProcessingResult {
    merger::merge_into_template(
        &request.template_path,
        records,
        &request.week,
        &request.output_path(),
        diagnostics,
    )
}
