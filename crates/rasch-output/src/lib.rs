//! Hand-off of cleaned matrices to the estimation procedure.
//!
//! Callers validate the cleaned matrix here (an empty or zero-width result
//! is a user-facing error) and then write it in the header-less CSV form
//! the estimator expects, or as JSON.

mod error;
mod validate;
mod writer;

pub use error::{OutputError, Result};
pub use validate::{MatrixShape, validate_cleaned};
pub use writer::{estimation_csv_string, write_estimation_csv, write_json};
