//! Writers for the estimation input.
//!
//! The estimation procedure reads a header-less grid: one row per
//! respondent, one field per item, `0`/`1` or an empty field for missing.

use std::io::Write;

use csv::WriterBuilder;
use rasch_model::{CleanedMatrix, Response};
use serde::Serialize;

use crate::error::Result;

/// Writes the header-less estimation CSV.
pub fn write_estimation_csv<W: Write>(matrix: &CleanedMatrix, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    for row in matrix.rows() {
        csv_writer.write_record(row.iter().map(response_field))?;
    }
    csv_writer.flush()?;
    tracing::debug!(
        respondents = matrix.height(),
        items = matrix.width(),
        "estimation CSV written"
    );
    Ok(())
}

/// Renders the estimation CSV into a string.
pub fn estimation_csv_string(matrix: &CleanedMatrix) -> Result<String> {
    let mut buffer = Vec::new();
    write_estimation_csv(matrix, &mut buffer)?;
    // Only ASCII digits and commas are written.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn response_field(response: &Response) -> &'static str {
    match response {
        Response::Missing => "",
        Response::Incorrect => "0",
        Response::Correct => "1",
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    items: &'a [String],
    responses: &'a CleanedMatrix,
}

/// Writes `{"items": [...], "responses": [[0, 1, null], ...]}`.
pub fn write_json<W: Write>(matrix: &CleanedMatrix, items: &[String], writer: W) -> Result<()> {
    let document = JsonDocument {
        items,
        responses: matrix,
    };
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
