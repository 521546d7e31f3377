//! Response matrix ingestion.
//!
//! Builds a [`RawMatrix`] from what upstream transports hand over: a JSON
//! request body (`{"responses": [[...]]}`) or a delimited text export.
//! No cleaning happens here; cells keep their original representation.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rasch_ingest::read_matrix;
//!
//! let raw = read_matrix(Path::new("answers.csv"))?;
//! ```

mod delimited;
mod error;
mod json;

use std::path::Path;

use rasch_model::RawMatrix;

// === Error Types ===
pub use error::{IngestError, Result};

// === Delimited Text ===
pub use delimited::{
    CANDIDATE_DELIMITERS, parse_delimited, read_delimited, read_text, sniff_delimiter,
};

// === JSON ===
pub use json::{RESPONSES_FIELD, from_request_value, parse_json_matrix, parse_request};

/// Reads a raw matrix from a file, choosing the format by extension.
///
/// `.json` files hold a request body or a bare array of rows; anything else
/// is read as delimited text.
pub fn read_matrix(path: &Path) -> Result<RawMatrix> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let text = read_text(path)?;
        parse_json_matrix(&text)
    } else {
        read_delimited(path)
    }
}
