//! Payroll week selection and the template columns it targets
//!
//! - Week 1: regular hours in S, overtime in T
//! - Week 2: regular hours in V, overtime in W

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Employee display name column (C)
pub const NAME_COLUMN: u32 = 3;

/// Anchor column for inserted rows (B)
pub const ANCHOR_COLUMN: u32 = 2;

/// First data row (row 1 is the header)
pub const FIRST_DATA_ROW: u32 = 2;

/// Pay period week within the template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Week {
    #[serde(rename = "Week 1")]
    One,
    #[serde(rename = "Week 2")]
    Two,
}

/// Target columns for one week (1-based indices)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetColumns {
    pub regular: u32,
    pub overtime: u32,
}

impl Week {
    pub const ALL: [Week; 2] = [Week::One, Week::Two];

    /// Label as shown to the user and accepted by [`Week::parse`]
    pub fn label(&self) -> &'static str {
        match self {
            Week::One => "Week 1",
            Week::Two => "Week 2",
        }
    }

    /// Parse an exact selector string ("Week 1" / "Week 2")
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Week 1" => Ok(Week::One),
            "Week 2" => Ok(Week::Two),
            other => Err(Error::InvalidWeek(other.to_string())),
        }
    }

    pub fn columns(&self) -> TargetColumns {
        match self {
            Week::One => TargetColumns { regular: 19, overtime: 20 }, // S, T
            Week::Two => TargetColumns { regular: 22, overtime: 23 }, // V, W
        }
    }
}

impl std::str::FromStr for Week {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Week::parse(s)
    }
}

impl std::fmt::Display for Week {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Convert a 1-based column index to its letter name (1 -> A, 27 -> AA)
pub fn column_letter(mut index: u32) -> String {
    let mut letters = Vec::new();
    while index > 0 {
        let rem = ((index - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        index = (index - 1) / 26;
    }
    letters.iter().rev().collect()
}
