//! Structured diagnostics collected during a run
//!
//! Loader and merger push entries here instead of only logging, so callers
//! (CLI, tests, a form front end) can inspect what was skipped and why.
//! Every entry is also forwarded to the `log` facade.

use serde::Serialize;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// No "Role" row in the CSV; all rows were used
    CutoffNotFound,
    /// CSV row dropped: blank name
    EmptyName,
    /// CSV row dropped: blank hours
    EmptyHours,
    /// CSV row dropped: hours not numeric after cleaning
    MalformedHours,
    /// Loader summary
    RowsLoaded,
    /// Record rejected by the merger (blank name / bad hours)
    InvalidRecord,
    /// Placeholder account skipped
    IgnoredName,
    /// Same normalized name seen again in this run
    DuplicateName,
    /// Template row had no anchor value in column B
    NoAnchorRow,
    /// Existing template row written
    Updated,
    /// New flagged row inserted
    Inserted,
    /// Run-level failure
    Failed,
}

/// One diagnostic entry
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub level: Level,
    pub kind: DiagnosticKind,
    /// CSV data row (1-based, header excluded) or template row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.row {
            Some(row) => write!(f, "row {}: {}", row, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Collected diagnostics for one run
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        level: Level,
        kind: DiagnosticKind,
        row: Option<usize>,
        message: impl Into<String>,
    ) {
        let entry = Diagnostic {
            level,
            kind,
            row,
            message: message.into(),
        };

        match level {
            Level::Debug => log::debug!("{}", entry),
            Level::Info => log::info!("{}", entry),
            Level::Warning => log::warn!("{}", entry),
            Level::Error => log::error!("{}", entry),
        }

        self.entries.push(entry);
    }

    pub fn debug(&mut self, kind: DiagnosticKind, row: Option<usize>, message: impl Into<String>) {
        self.push(Level::Debug, kind, row, message);
    }

    pub fn info(&mut self, kind: DiagnosticKind, row: Option<usize>, message: impl Into<String>) {
        self.push(Level::Info, kind, row, message);
    }

    pub fn warn(&mut self, kind: DiagnosticKind, row: Option<usize>, message: impl Into<String>) {
        self.push(Level::Warning, kind, row, message);
    }

    pub fn error(&mut self, kind: DiagnosticKind, row: Option<usize>, message: impl Into<String>) {
        self.push(Level::Error, kind, row, message);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(move |d| d.kind == kind)
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.of_kind(kind).count()
    }

    /// Entries at warning level or above
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.level >= Level::Warning)
    }
}
