//! Error types for response matrix ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a raw response matrix.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === JSON Errors ===
    /// Body is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Request body has no `responses` field.
    #[error("request body must contain a 'responses' array")]
    MissingResponses,

    /// `responses` is present but empty.
    #[error("response matrix must not be empty")]
    EmptyMatrix,

    /// A row of the matrix is not a list.
    #[error("row {row} must be an array")]
    RowNotArray { row: usize },

    // === Delimited Text Errors ===
    /// Failed to parse delimited text.
    #[error("failed to parse delimited text at record {record}: {message}")]
    Delimited { record: usize, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
