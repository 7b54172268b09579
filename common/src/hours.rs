//! Work hours parsing and the regular/overtime split

use lazy_static::lazy_static;
use regex::Regex;

/// Weekly hours paid at the regular rate
pub const OVERTIME_THRESHOLD: f64 = 40.0;

lazy_static! {
    static ref NON_NUMERIC_RE: Regex = Regex::new(r"[^0-9.]").unwrap();
}

/// Outcome of cleaning a raw "Work Hours" cell
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedHours {
    Valid(f64),
    /// Cell was empty
    Empty,
    /// Cell had text but no number survived cleaning
    Malformed(String),
}

/// Strip everything except digits and '.', then parse.
pub fn parse_hours(raw: &str) -> ParsedHours {
    if raw.trim().is_empty() {
        return ParsedHours::Empty;
    }

    let cleaned = NON_NUMERIC_RE.replace_all(raw, "");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => ParsedHours::Valid(value),
        _ => ParsedHours::Malformed(raw.to_string()),
    }
}

/// Hours split into the regular and overtime buckets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursSplit {
    pub regular: f64,
    pub overtime: f64,
}

impl HoursSplit {
    pub fn from_total(hours: f64) -> Self {
        Self {
            regular: hours.min(OVERTIME_THRESHOLD),
            overtime: (hours - OVERTIME_THRESHOLD).max(0.0),
        }
    }

    pub fn has_overtime(&self) -> bool {
        self.overtime > 0.0
    }
}
