//! Record and result types
//!
//! Shared between the CLI and any other front end:
//! - CleanedRecord: loader output (name + numeric hours)
//! - MergeStats: what the merger did to the template
//! - ProcessingResult: the outcome handed back to the caller

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One employee's hours from the POS export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedRecord {
    /// Name as it appears in the CSV (not normalized)
    pub name: String,
    /// Total worked hours, finite and non-negative
    pub hours: f64,
}

impl CleanedRecord {
    pub fn new(name: impl Into<String>, hours: f64) -> Self {
        Self {
            name: name.into(),
            hours,
        }
    }

    /// Non-blank name and finite, non-negative hours
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.hours.is_finite() && self.hours >= 0.0
    }
}

/// Counters for one merge run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeStats {
    /// Existing template rows written
    pub updated: usize,
    /// New flagged rows inserted
    pub inserted: usize,
    /// Placeholder accounts skipped
    pub ignored: usize,
    /// Repeated names skipped
    pub duplicates: usize,
    /// Records with blank name or unusable hours
    pub invalid: usize,
}

impl MergeStats {
    pub fn written(&self) -> usize {
        self.updated + self.inserted
    }
}

/// Outcome reported back to the caller
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub success: bool,
    pub message: String,
    pub output_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<MergeStats>,
}

impl ProcessingResult {
    pub fn saved(output_path: PathBuf, stats: MergeStats) -> Self {
        Self {
            success: true,
            message: format!("Saved to {}", output_path.display()),
            output_path: Some(output_path),
            stats: Some(stats),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            output_path: None,
            stats: None,
        }
    }
}

/// Serialize records as pretty JSON (used for previews)
pub fn records_to_json(records: &[CleanedRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
