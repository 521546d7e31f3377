use serde::{Deserialize, Serialize};

use crate::response::{FillMissing, Response};

/// Rows of ternary responses, one per respondent, one column per item.
///
/// Produced by the cleaning pipeline; rows with no observed value are
/// never present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CleanedMatrix {
    rows: Vec<Vec<Response>>,
}

impl CleanedMatrix {
    pub fn new(rows: Vec<Vec<Response>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Response>] {
        &self.rows
    }

    /// Number of respondents.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of items, taken from the first row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.len() == width)
    }

    pub fn missing_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|value| !value.is_observed())
            .count()
    }

    /// Replaces every missing response with the fill constant.
    #[must_use]
    pub fn fill_missing(self, fill: FillMissing) -> Self {
        let replacement = fill.response();
        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|value| if value.is_observed() { value } else { replacement })
                    .collect()
            })
            .collect();
        Self { rows }
    }
}
