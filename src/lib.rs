//! Payroll Merge
//!
//! Loads worked hours from a POS timekeeping CSV and merges them into a
//! payroll spreadsheet template.

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod merger;
pub mod output;
pub mod pipeline;

pub use loader::load_hours;
pub use merger::merge_into_template;
pub use output::output_file_name;
pub use pipeline::{run, OutputTarget, RunRequest};
