//! JSON request bodies.
//!
//! Accepts `{"responses": [[...], ...]}` as sent by API clients, or a bare
//! `[[...], ...]` array. Cells may be any JSON value.

use rasch_model::{RawCell, RawMatrix};
use serde_json::Value;

use crate::error::{IngestError, Result};

/// Field holding the matrix in a request body.
pub const RESPONSES_FIELD: &str = "responses";

/// Parses a request body of the form `{"responses": [[...]]}`.
pub fn parse_request(body: &str) -> Result<RawMatrix> {
    let value: Value = serde_json::from_str(body)?;
    from_request_value(value)
}

/// Extracts the matrix from an already parsed request body.
pub fn from_request_value(value: Value) -> Result<RawMatrix> {
    let Value::Object(mut body) = value else {
        return Err(IngestError::MissingResponses);
    };
    let responses = body
        .remove(RESPONSES_FIELD)
        .ok_or(IngestError::MissingResponses)?;
    matrix_from_value(responses)
}

/// Parses either a request body or a bare array of rows.
pub fn parse_json_matrix(text: &str) -> Result<RawMatrix> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(_) => matrix_from_value(value),
        other => from_request_value(other),
    }
}

fn matrix_from_value(value: Value) -> Result<RawMatrix> {
    let Value::Array(rows) = value else {
        return Err(IngestError::MissingResponses);
    };
    if rows.is_empty() {
        return Err(IngestError::EmptyMatrix);
    }

    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| match row {
            Value::Array(cells) => Ok(cells.into_iter().map(RawCell::from).collect()),
            _ => Err(IngestError::RowNotArray { row: idx + 1 }),
        })
        .collect::<Result<Vec<Vec<RawCell>>>>()
        .map(RawMatrix::new)
}
