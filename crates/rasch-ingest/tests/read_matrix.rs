//! Integration tests for file-based matrix ingestion.

use std::fs;

use rasch_ingest::{IngestError, read_matrix};
use rasch_model::RawCell;
use tempfile::tempdir;

#[test]
fn json_extension_reads_request_body() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("request.JSON");
    fs::write(&path, r#"{"responses": [["Ism", "Q1", "Q2"], ["Ali", 1, "0"]]}"#).unwrap();

    let matrix = read_matrix(&path).unwrap();
    assert_eq!(matrix.len(), 2);
    assert_eq!(matrix.rows()[1][1], RawCell::Int(1));
    assert_eq!(matrix.rows()[1][2], RawCell::from("0"));
}

#[test]
fn json_extension_reads_bare_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("matrix.json");
    fs::write(&path, "[[1, 0], [0, null]]").unwrap();

    let matrix = read_matrix(&path).unwrap();
    assert_eq!(matrix.rows()[1][1], RawCell::Empty);
}

#[test]
fn other_extensions_read_as_delimited() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("answers.txt");
    fs::write(&path, "Ism\tQ1\tQ2\nAli\t1\t0\nVali\t\t1\n").unwrap();

    let matrix = read_matrix(&path).unwrap();
    assert_eq!(matrix.len(), 3);
    assert_eq!(matrix.width(), 3);
    assert_eq!(matrix.rows()[2][1], RawCell::Empty);
}

#[test]
fn empty_json_matrix_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, r#"{"responses": []}"#).unwrap();

    assert!(matches!(read_matrix(&path), Err(IngestError::EmptyMatrix)));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.json");
    assert!(matches!(
        read_matrix(&path),
        Err(IngestError::FileNotFound { .. })
    ));
}
