//! Delimited text (CSV/TSV) reading.
//!
//! Spreadsheet exports are read without assuming a header row and with
//! ragged records allowed; every non-empty field becomes a text cell.

use std::path::Path;

use csv::ReaderBuilder;
use rasch_model::{RawCell, RawMatrix};

use crate::error::{IngestError, Result};

/// Delimiters tried when none is given.
pub const CANDIDATE_DELIMITERS: &[u8] = b"\t;,|";

/// Number of leading lines inspected when sniffing the delimiter.
const SNIFF_LINES: usize = 10;

/// Reads a delimited file, sniffing the delimiter.
pub fn read_delimited(path: &Path) -> Result<RawMatrix> {
    let content = read_text(path)?;
    parse_delimited(&content, None)
}

/// Parses delimited text. `None` sniffs the delimiter from the content.
pub fn parse_delimited(content: &str, delimiter: Option<u8>) -> Result<RawMatrix> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(content));

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| IngestError::Delimited {
            record: idx + 1,
            message: e.to_string(),
        })?;
        rows.push(record.iter().map(field_to_cell).collect());
    }

    let matrix = RawMatrix::new(rows);
    tracing::debug!(
        rows = matrix.len(),
        width = matrix.width(),
        delimiter = %char::from(delimiter).escape_default(),
        "delimited text parsed"
    );
    Ok(matrix)
}

fn field_to_cell(field: &str) -> RawCell {
    if field.is_empty() {
        RawCell::Empty
    } else {
        RawCell::Text(field.to_string())
    }
}

/// Picks the delimiter that splits the first lines most consistently.
///
/// Each candidate scores (lines with the same field count as line 1) times
/// that field count; a candidate must split line 1 into more than one field.
/// Falls back to a comma.
pub fn sniff_delimiter(content: &str) -> u8 {
    let sample: Vec<&str> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SNIFF_LINES)
        .collect();

    let mut best = b',';
    let mut best_score = 0usize;
    for &delimiter in CANDIDATE_DELIMITERS {
        let counts: Vec<usize> = sample
            .iter()
            .map(|line| field_count(line, delimiter))
            .collect();
        let Some(&target) = counts.first() else {
            break;
        };
        if target <= 1 {
            continue;
        }
        let consistent = counts.iter().filter(|&&count| count == target).count();
        let score = consistent * target;
        if score > best_score {
            best_score = score;
            best = delimiter;
        }
    }
    best
}

fn field_count(line: &str, delimiter: u8) -> usize {
    ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes())
        .records()
        .next()
        .and_then(std::result::Result::ok)
        .map_or(1, |record| record.len())
}

/// Reads a file as UTF-8, decoding Windows-1252 when it is not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            // Excel exports on Windows
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            tracing::debug!(path = %path.display(), "decoded input as Windows-1252");
            Ok(decoded.into_owned())
        }
    }
}
