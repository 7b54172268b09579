//! Template roster lookup and the row insertion cursor

use payroll_merge_common::week::{ANCHOR_COLUMN, FIRST_DATA_ROW, NAME_COLUMN};
use payroll_merge_common::{normalize, NameKey};
use std::collections::HashMap;
use umya_spreadsheet::Worksheet;

/// Trimmed display text of a cell, empty when the cell is absent
pub fn cell_text(sheet: &Worksheet, column: u32, row: u32) -> String {
    sheet.get_value((column, row)).trim().to_string()
}

/// Normalized employee name -> template row
#[derive(Debug, Clone, Default)]
pub struct Roster {
    rows: HashMap<NameKey, u32>,
}

impl Roster {
    /// Read column C from row 2 to the last row. A name listed twice keeps
    /// its last row.
    pub fn scan(sheet: &Worksheet) -> Self {
        let last_row = sheet.get_highest_row();
        Self::from_rows(
            (FIRST_DATA_ROW..=last_row).map(|row| (row, cell_text(sheet, NAME_COLUMN, row))),
        )
    }

    pub fn from_rows<S: AsRef<str>>(rows: impl IntoIterator<Item = (u32, S)>) -> Self {
        let mut roster = Self::default();
        for (row, name) in rows {
            let key = normalize(name.as_ref());
            if !key.is_empty() {
                roster.rows.insert(key, row);
            }
        }
        roster
    }

    pub fn row_for(&self, key: &str) -> Option<u32> {
        self.rows.get(key).copied()
    }

    /// Account for a row inserted at `inserted_at`: everything at or below
    /// it moved down by one.
    pub fn shift_from(&mut self, inserted_at: u32) {
        for row in self.rows.values_mut() {
            if *row >= inserted_at {
                *row += 1;
            }
        }
    }
}

/// Tracks the last row holding a column-B value; new rows go right below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertCursor {
    last_anchor: u32,
}

impl InsertCursor {
    /// Returns `None` when no row below the header has a column-B value.
    pub fn scan(sheet: &Worksheet) -> Option<Self> {
        let last_row = sheet.get_highest_row();
        (FIRST_DATA_ROW..=last_row)
            .rev()
            .find(|&row| !cell_text(sheet, ANCHOR_COLUMN, row).is_empty())
            .map(Self::after)
    }

    pub fn after(last_anchor: u32) -> Self {
        Self { last_anchor }
    }

    /// Start right under the header
    pub fn below_header() -> Self {
        Self::after(FIRST_DATA_ROW - 1)
    }

    pub fn next_row(&self) -> u32 {
        self.last_anchor + 1
    }

    /// The inserted row carries a column-B value, so it becomes the anchor.
    pub fn advance(&mut self, inserted_at: u32) {
        self.last_anchor = inserted_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_normalizes_names() {
        let roster = Roster::from_rows(vec![(2, "Jane Doe"), (3, "  JOHN-roe "), (4, "")]);
        assert_eq!(roster.row_for("jane doe"), Some(2));
        assert_eq!(roster.row_for("john roe"), Some(3));
        assert_eq!(roster.row_for(""), None);
    }

    #[test]
    fn test_roster_last_duplicate_wins() {
        let roster = Roster::from_rows(vec![(2, "Jane Doe"), (9, "jane  doe")]);
        assert_eq!(roster.row_for("jane doe"), Some(9));
    }

    #[test]
    fn test_roster_shift_from() {
        let mut roster = Roster::from_rows(vec![(2, "A"), (5, "B"), (6, "C")]);
        roster.shift_from(5);
        assert_eq!(roster.row_for("a"), Some(2));
        assert_eq!(roster.row_for("b"), Some(6));
        assert_eq!(roster.row_for("c"), Some(7));
    }

    #[test]
    fn test_cursor_advance() {
        let mut cursor = InsertCursor::after(10);
        assert_eq!(cursor.next_row(), 11);
        cursor.advance(11);
        assert_eq!(cursor.next_row(), 12);
    }

    #[test]
    fn test_cursor_below_header() {
        assert_eq!(InsertCursor::below_header().next_row(), 2);
    }

    #[test]
    fn test_scan_sheet() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_active_sheet_mut();
        sheet.get_cell_mut("C1").set_value_string("Employee");
        sheet.get_cell_mut("B2").set_value_string("FOH");
        sheet.get_cell_mut("C2").set_value_string("Jane Doe");
        sheet.get_cell_mut("B4").set_value_string("BOH");
        sheet.get_cell_mut("C4").set_value_string("John Roe");
        sheet.get_cell_mut("C6").set_value_string("Totals");

        let roster = Roster::scan(sheet);
        assert_eq!(roster.row_for("jane doe"), Some(2));
        assert_eq!(roster.row_for("john roe"), Some(4));
        assert_eq!(roster.row_for("employee"), None);

        let cursor = InsertCursor::scan(sheet).unwrap();
        assert_eq!(cursor.next_row(), 5);
    }

    #[test]
    fn test_scan_sheet_without_anchor() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_active_sheet_mut();
        sheet.get_cell_mut("B1").set_value_string("Dept");
        sheet.get_cell_mut("C2").set_value_string("Jane Doe");
        assert!(InsertCursor::scan(sheet).is_none());
    }
}
