use thiserror::Error;

/// Errors raised when a cleaned matrix cannot be handed to estimation.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Every row was dropped during cleaning.
    #[error("matrix empty after cleaning")]
    EmptyMatrix,

    /// Rows exist but no item column was identified.
    #[error("no item columns identified")]
    NoItemColumns,

    /// Row length differs from the first row (1-based row number).
    #[error("row {row} has {len} items, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OutputError>;
