//! Payroll Merge Common Library
//!
//! I/O-free domain pieces shared by the CLI and any other front end

pub mod types;
pub mod week;
pub mod name;
pub mod hours;
pub mod diagnostics;
pub mod error;

pub use types::{CleanedRecord, MergeStats, ProcessingResult, records_to_json};
pub use week::{Week, TargetColumns, column_letter};
pub use name::{normalize, IgnoreSet, NameKey};
pub use hours::{parse_hours, HoursSplit, ParsedHours, OVERTIME_THRESHOLD};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Level};
pub use error::{Error, Result};
