//! Header column lookup and cutoff detection

use crate::error::{PayrollError, Result};
use csv::StringRecord;

pub const NAME_HEADER: &str = "Name";
pub const HOURS_HEADER: &str = "Work Hours";

/// Marker in the second column that ends the per-employee section
pub const CUTOFF_MARKER: &str = "Role";

/// Positions of the columns we read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderColumns {
    pub name: usize,
    pub hours: usize,
}

impl HeaderColumns {
    pub fn locate(header: &StringRecord) -> Result<Self> {
        let find = |wanted: &str| {
            header
                .iter()
                .position(|field| field.trim() == wanted)
                .ok_or_else(|| PayrollError::MissingColumn(wanted.to_string()))
        };

        Ok(Self {
            name: find(NAME_HEADER)?,
            hours: find(HOURS_HEADER)?,
        })
    }
}

/// Index of the first data row whose second column is exactly "Role"
pub fn find_cutoff(rows: &[StringRecord]) -> Option<usize> {
    rows.iter().position(|row| row.get(1) == Some(CUTOFF_MARKER))
}
