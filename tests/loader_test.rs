//! POS CSV loader tests against files on disk

use payroll_merge::loader;
use payroll_merge_common::{CleanedRecord, DiagnosticKind, Diagnostics};
use tempfile::tempdir;

const EXPORT: &str = "\
\"Labor Summary\",\"10/05/2026 - 10/11/2026\"
Name,Job Title,Regular Rate,Clock In,Clock Out,Breaks,Work Hours
Jane Doe,Server,2.13,10/05 10:00 AM,10/05 06:00 PM,0:30,45.00
\"Roe, John\",Host,12.00,,,,\"12.5 hrs\"
Online,Online,0.00,,,,10
Mia Park,Line Cook,16.00,,,,
Chris Vale,Dish,15.00,,,,#VALUE!

,Role,Total Hours,,,,
,Server,45.00,,,,
,Host,12.50,,,,
";

/// Realistic export with a role summary after the cutoff
#[test]
fn test_load_export_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("labor.csv");
    std::fs::write(&path, EXPORT).unwrap();

    let mut diag = Diagnostics::new();
    let records = loader::load_hours(&path, &mut diag).expect("load failed");

    assert_eq!(
        records,
        vec![
            CleanedRecord::new("Jane Doe", 45.0),
            CleanedRecord::new("Roe, John", 12.5),
            CleanedRecord::new("Online", 10.0),
        ]
    );

    assert_eq!(diag.count(DiagnosticKind::EmptyHours), 1);
    assert_eq!(diag.count(DiagnosticKind::MalformedHours), 1);
    assert_eq!(diag.count(DiagnosticKind::CutoffNotFound), 0);
    assert_eq!(diag.count(DiagnosticKind::RowsLoaded), 1);

    let dropped: Vec<_> = diag.warnings().filter_map(|d| d.row).collect();
    assert_eq!(dropped, vec![4, 5]);
}

/// Cutoff at data index k leaves exactly k rows
#[test]
fn test_cutoff_row_count() {
    let dir = tempdir().expect("Failed to create temp dir");

    for k in 0..4usize {
        let mut content = String::from("banner\nName,Role,Work Hours\n");
        for i in 0..k {
            content.push_str(&format!("Person {},Server,{}\n", i, i + 1));
        }
        content.push_str(",Role,\n");
        content.push_str("Late Person,Server,8\n");

        let path = dir.path().join(format!("cutoff_{}.csv", k));
        std::fs::write(&path, content).unwrap();

        let mut diag = Diagnostics::new();
        let records = loader::load_hours(&path, &mut diag).unwrap();
        assert_eq!(records.len(), k, "cutoff at {}", k);
    }
}

/// No "Role" marker: every row is used and a warning is recorded
#[test]
fn test_no_cutoff_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("no_cutoff.csv");
    std::fs::write(&path, "banner\nName,Job,Work Hours\nA,Server,1\nB,Host,2\nC,Cook,3\n").unwrap();

    let mut diag = Diagnostics::new();
    let records = loader::load_hours(&path, &mut diag).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(diag.count(DiagnosticKind::CutoffNotFound), 1);
}
