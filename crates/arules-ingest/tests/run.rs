//! Ingestion run-loop tests: policies, blank lines, line numbers.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{Cursor, Write};

use arules_ingest::{IngestError, RecordPolicy, run_file, run_reader};
use arules_model::{CodeRange, ColumnSpan, FieldKind, FieldSpec};
use arules_preprocess::{IdPolicy, Preprocessor};
use tempfile::NamedTempFile;

fn values(pairs: &[(i64, &str)]) -> BTreeMap<i64, String> {
    pairs
        .iter()
        .map(|(code, label)| (*code, (*label).to_string()))
        .collect()
}

/// SEX at column 1, RACE at column 2, SCORE at columns 3-7.
fn specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            column: "SEX".to_string(),
            span: ColumnSpan::new(1, 1),
            kind: FieldKind::Binary {
                values: values(&[(1, "MALE"), (2, "FEMALE")]),
            },
        },
        FieldSpec {
            column: "RACE".to_string(),
            span: ColumnSpan::new(2, 2),
            kind: FieldKind::Categorical {
                values: values(&[(3, "BLACK"), (7, "WHITE")]),
                others: Some(BTreeSet::from([3])),
                code_range: CodeRange::default(),
            },
        },
        FieldSpec {
            column: "SCORE".to_string(),
            span: ColumnSpan::new(3, 7),
            kind: FieldKind::Continuous {
                min: 20.91,
                max: 81.04,
                intervals: 5,
            },
        },
    ]
}

#[test]
fn processes_every_record_of_a_file() {
    let mut file = NamedTempFile::new().expect("create data file");
    write!(file, "1325.50\n2779.99\n").expect("write records");

    let mut preprocessor = Preprocessor::new();
    let summary = run_file(
        file.path(),
        &mut preprocessor,
        &specs(),
        RecordPolicy::Abort,
    )
    .expect("run file");

    assert_eq!(summary.records_read, 2);
    assert_eq!(summary.transactions_built, 2);
    assert_eq!(summary.records_skipped, 0);
    assert_eq!(preprocessor.dataset().count(), 2);
}

#[test]
fn missing_file_reports_open_error() {
    let mut preprocessor = Preprocessor::new();
    let error = run_file(
        "no/such/data.txt".as_ref(),
        &mut preprocessor,
        &specs(),
        RecordPolicy::Abort,
    )
    .unwrap_err();
    assert!(matches!(error, IngestError::Open { .. }));
}

#[test]
fn abort_policy_reports_the_offending_line() {
    // Line 2 carries a boundary score and cannot be encoded.
    let source = Cursor::new("1325.50\n1332.40\n2779.99\n");
    let mut preprocessor = Preprocessor::new();
    let error = run_reader(source, &mut preprocessor, &specs(), RecordPolicy::Abort).unwrap_err();
    match error {
        IngestError::Record { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
    // The bad record committed nothing.
    assert_eq!(preprocessor.dataset().count(), 1);
}

#[test]
fn skip_policy_drops_bad_records_and_continues() {
    let source = Cursor::new("1325.50\n1332.40\n2779.99\n");
    let mut preprocessor = Preprocessor::new();
    let summary =
        run_reader(source, &mut preprocessor, &specs(), RecordPolicy::Skip).expect("run source");

    assert_eq!(summary.records_read, 3);
    assert_eq!(summary.transactions_built, 2);
    assert_eq!(summary.records_skipped, 1);

    let dataset = preprocessor.dataset();
    assert_eq!(dataset.count(), 2);
    // Eager IDs: the skipped record consumed ID 2.
    assert_eq!(dataset.transactions()[0].id, 1);
    assert_eq!(dataset.transactions()[1].id, 3);
}

#[test]
fn skip_policy_with_deferred_ids_stays_contiguous() {
    let source = Cursor::new("1325.50\n1332.40\n2779.99\n");
    let mut preprocessor = Preprocessor::with_policy(IdPolicy::Deferred);
    run_reader(source, &mut preprocessor, &specs(), RecordPolicy::Skip).expect("run source");

    let dataset = preprocessor.dataset();
    assert_eq!(dataset.transactions()[0].id, 1);
    assert_eq!(dataset.transactions()[1].id, 2);
}

#[test]
fn blank_lines_are_skipped_without_consuming_ids() {
    let source = Cursor::new("1325.50\n\n   \n2779.99\n");
    let mut preprocessor = Preprocessor::new();
    let summary =
        run_reader(source, &mut preprocessor, &specs(), RecordPolicy::Abort).expect("run source");

    assert_eq!(summary.records_read, 2);
    assert_eq!(summary.transactions_built, 2);
    let dataset = preprocessor.dataset();
    assert_eq!(dataset.transactions()[0].id, 1);
    assert_eq!(dataset.transactions()[1].id, 2);
}

#[test]
fn crlf_line_endings_are_stripped() {
    let source = Cursor::new("1325.50\r\n2779.99\r\n");
    let mut preprocessor = Preprocessor::new();
    let summary =
        run_reader(source, &mut preprocessor, &specs(), RecordPolicy::Abort).expect("run source");
    assert_eq!(summary.transactions_built, 2);
}
