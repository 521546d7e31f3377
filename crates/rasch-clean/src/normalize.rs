//! Cell normalization.
//!
//! Every raw cell reads as correct, incorrect or missing. Unrecognized
//! content is missing, never an error.

use rasch_model::{RawCell, Response};

use crate::tokens::{is_false_token, is_na_token, is_true_token};

/// How a raw cell was read.
///
/// The three non-binary classes all normalize to [`Response::Missing`]; they
/// are kept apart so the ratio analyzer can tell absent cells from present
/// but non-binary ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    /// Absent, empty or whitespace-only.
    Blank,
    /// An explicit "not answered" token such as `NA` or `null`.
    NotApplicable,
    /// A 0/1 answer.
    Binary(Response),
    /// Present content that is not a 0/1 answer (names, `2`, `abc`).
    Unrecognized,
}

impl CellClass {
    pub fn response(self) -> Response {
        match self {
            Self::Binary(response) => response,
            Self::Blank | Self::NotApplicable | Self::Unrecognized => Response::Missing,
        }
    }

    /// True when the cell holds content (binary or not).
    pub fn is_present(self) -> bool {
        matches!(self, Self::Binary(_) | Self::Unrecognized)
    }
}

/// Normalizes one raw cell to a ternary response.
pub fn normalize(cell: &RawCell) -> Response {
    classify(cell).response()
}

/// Classifies one raw cell. First matching rule wins.
pub fn classify(cell: &RawCell) -> CellClass {
    match cell {
        RawCell::Empty => CellClass::Blank,
        RawCell::Bool(flag) => CellClass::Binary(Response::from_bool(*flag)),
        RawCell::Int(value) => classify_int(*value),
        RawCell::Float(value) => classify_float(*value),
        RawCell::Text(text) => classify_text(text),
    }
}

fn classify_int(value: i64) -> CellClass {
    Response::from_binary(value).map_or(CellClass::Unrecognized, CellClass::Binary)
}

/// Truncates toward zero; only 0 and 1 survive, so `2.0` is rejected like `2`.
fn classify_float(value: f64) -> CellClass {
    if !value.is_finite() {
        return CellClass::Unrecognized;
    }
    let truncated = value.trunc();
    if truncated == 0.0 {
        CellClass::Binary(Response::Incorrect)
    } else if truncated == 1.0 {
        CellClass::Binary(Response::Correct)
    } else {
        CellClass::Unrecognized
    }
}

fn classify_text(text: &str) -> CellClass {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return CellClass::Blank;
    }
    let lowered = trimmed.to_lowercase();
    if is_na_token(&lowered) {
        return CellClass::NotApplicable;
    }
    if is_true_token(&lowered) {
        return CellClass::Binary(Response::Correct);
    }
    if is_false_token(&lowered) {
        return CellClass::Binary(Response::Incorrect);
    }
    match trimmed.parse::<f64>() {
        Ok(value) => classify_float(value),
        Err(_) => CellClass::Unrecognized,
    }
}
