//! Integration tests for Rollcall.

use std::io::Write;
use tempfile::NamedTempFile;

use rollcall::{
    DataTable, ErrorKind, ExclusionReason, NotResponded, Rollcall, Roster, SchemaDetector,
    SchemaError, reconcile,
};

/// Helper to create a temporary CSV file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn survey() -> DataTable {
    DataTable::from_strings(
        ["Full Name", "Q1", "Q2"],
        [vec!["Alice", "yes", "yes"], vec!["Bob", "", "yes"]],
    )
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn test_scenario_no_roster() {
    let result = Rollcall::new().check_table(&survey(), None).unwrap();

    assert_eq!(result.total_students, 2);
    assert_eq!(result.responded_count, 1);
    assert_eq!(result.not_responded_count, 1);
    assert_eq!(
        result.not_responded_list,
        vec![NotResponded {
            name: "Bob".to_string(),
            missing: vec!["Q1".to_string()],
        }]
    );
}

#[test]
fn test_scenario_roster_ignores_unlisted_rows() {
    let roster = Roster::new(["Alice", "Carol"]);
    let result = Rollcall::new().check_table(&survey(), Some(&roster)).unwrap();

    assert_eq!(result.responded_list, vec!["Alice"]);
    assert!(result.not_responded_list.is_empty());
    assert_eq!(result.missing_from_master, vec!["Carol"]);
}

#[test]
fn test_scenario_duplicate_case_variant_last_wins() {
    let table = DataTable::from_strings(
        ["Name", "Q1", "Q2"],
        [vec!["alice", "yes", ""], vec!["Alice", "yes", "no"]],
    );
    let result = Rollcall::new().check_table(&table, None).unwrap();

    assert_eq!(result.total_students, 1);
    assert_eq!(result.responded_count, 1);
    assert_eq!(result.not_responded_count, 0);
}

#[test]
fn test_scenario_mostly_empty_column_not_required() {
    let mut rows = Vec::new();
    for i in 0..20 {
        let comment = if i == 3 { "late" } else { "" };
        rows.push(vec![format!("Student {i}"), "a".to_string(), comment.to_string()]);
    }
    let table = DataTable::from_strings(["Name", "Answer", "Comments"], rows);

    let roles = SchemaDetector::new().detect(&table).unwrap();
    assert_eq!(roles.required_columns(), vec!["Answer"]);
    assert!(matches!(
        roles.excluded[0].reason,
        ExclusionReason::Sparse { .. }
    ));

    let result = reconcile(&table, &roles, None);
    assert_eq!(result.responded_count, 20);
}

#[test]
fn test_missing_field_accuracy() {
    let table = DataTable::from_strings(
        ["Name", "A", "B", "C"],
        [vec!["Ann", "x", "", "x"], vec!["Ben", "x", "x", "x"]],
    );
    let result = Rollcall::new().check_table(&table, None).unwrap();

    assert_eq!(result.not_responded_list[0].missing, vec!["B"]);
}

// =============================================================================
// File-Based Checks
// =============================================================================

#[test]
fn test_google_forms_export() {
    let content = "Timestamp,Email Address,Student Name,What did you learn?,Rate the class,Total score\n\
                   2024/03/01 9:00:00,a@x.edu,Alice Smith,Loops,5,10\n\
                   2024/03/01 9:02:00,b@x.edu,Bob Jones,,4,8\n\
                   2024/03/01 9:05:00,c@x.edu,  carol  king ,Traits,5,9\n";
    let file = create_test_file(content);
    let roster = Roster::parse("Alice Smith\nBob Jones\nCarol King\nDan Brown\n").unwrap();

    let report = Rollcall::new()
        .check_file(file.path(), Some(&roster))
        .expect("Check failed");
    let result = report.result;

    assert_eq!(result.total_students, 4);
    assert_eq!(result.responded_list, vec!["Alice Smith", "Carol King"]);
    assert_eq!(result.not_responded_list[0].name, "Bob Jones");
    assert_eq!(result.not_responded_list[0].missing, vec!["What did you learn?"]);
    assert_eq!(result.missing_from_master, vec!["Dan Brown"]);

    let info = result.debug_info.expect("debug info");
    assert_eq!(info.detected_name_column, "Student Name");
    assert_eq!(
        info.detected_answer_columns,
        vec!["Email Address", "What did you learn?", "Rate the class"]
    );
}

#[test]
fn test_tsv_with_roster_csv() {
    let content = "Participant\tQ1\n\
                   Doe, Jane\tyes\n\
                   Roe. Rick\t\n";
    let mut file = NamedTempFile::with_suffix(".tsv").unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let roster = Roster::parse("Name,Section\n\"Doe, Jane\",A\nRoe Rick,B\n").unwrap();
    let report = Rollcall::new().check_file(file.path(), Some(&roster)).unwrap();

    assert_eq!(report.source.format, "tsv");
    assert_eq!(report.result.responded_list, vec!["Doe, Jane"]);
    assert_eq!(report.result.not_responded_list[0].name, "Roe Rick");
}

#[test]
fn test_no_name_column_is_reported_as_schema_error() {
    let file = create_test_file("Q1,Q2\n1,2\n3,4\n");
    let err = Rollcall::new().check_file(file.path(), None).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(err.to_string().contains("Could not identify a name column"));
}

#[test]
fn test_excel_upload_is_ingest_error() {
    let err = Rollcall::new()
        .check_upload("responses.xlsx", b"PK\x03\x04", None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Ingest);
}

#[test]
fn test_empty_upload_has_no_columns() {
    let err = Rollcall::new()
        .check_upload("empty.csv", b"", None)
        .unwrap_err();
    assert!(matches!(
        err,
        rollcall::RollcallError::Schema(SchemaError::NoColumns)
    ));
}

// =============================================================================
// Output Shape
// =============================================================================

#[test]
fn test_json_contract() {
    let result = Rollcall::new().check_table(&survey(), None).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["total_students"], 2);
    assert_eq!(json["responded_list"][0], "Alice");
    assert_eq!(json["not_responded_list"][0]["name"], "Bob");
    assert_eq!(json["not_responded_list"][0]["missing"][0], "Q1");
    assert_eq!(json["missing_from_master"].as_array().unwrap().len(), 0);
    assert_eq!(json["debug_info"]["detected_name_column"], "Full Name");
    assert_eq!(json["debug_info"]["preview_rows"][1]["status"], "Not Responded");
}

#[test]
fn test_repeated_checks_are_identical() {
    let roster = Roster::new(["Bob", "Alice", "Zoe"]);
    let rollcall = Rollcall::new();

    let first = rollcall.check_table(&survey(), Some(&roster)).unwrap();
    let second = rollcall.check_table(&survey(), Some(&roster)).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
