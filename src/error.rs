use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("CSV file not found: {0}")]
    CsvNotFound(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Error reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV has no header row (expected on line 2): {0}")]
    MissingHeader(String),

    #[error("Required column '{0}' not found in CSV header")]
    MissingColumn(String),

    #[error("No valid CSV data provided.")]
    NoRecords,

    #[error("Error processing: {0}")]
    Spreadsheet(String),

    #[error("Output would overwrite the template: {0}")]
    OutputIsTemplate(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] payroll_merge_common::Error),
}

impl PayrollError {
    /// Fatal before any file was opened (bad week, nothing to merge)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PayrollError::NoRecords
                | PayrollError::Common(payroll_merge_common::Error::InvalidWeek(_))
        )
    }
}

pub type Result<T> = std::result::Result<T, PayrollError>;
