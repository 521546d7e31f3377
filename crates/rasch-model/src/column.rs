//! Per-column facts and the item columns chosen from them.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// 0-based position in the padded grid.
pub type ColumnIndex = usize;

/// Facts derived for one column of the padded grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSignal {
    pub index: ColumnIndex,
    /// Header text names a respondent attribute (name, ID, ...).
    pub is_label_header: bool,
    /// Header text looks like an item index (Q1, Item 12, ...).
    pub is_question_header: bool,
    /// Fraction of present data cells that are 0/1 (0.0 to 1.0).
    pub binary_ratio: f64,
}

/// A contiguous half-open run `[start, end)` of column indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBlock {
    pub start: ColumnIndex,
    pub end: ColumnIndex,
}

impl ItemBlock {
    pub fn new(start: ColumnIndex, end: ColumnIndex) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn indices(&self) -> Range<ColumnIndex> {
        self.start..self.end
    }

    /// Keeps at most the first `max_len` columns.
    pub fn truncated(self, max_len: usize) -> Self {
        Self::new(self.start, self.start + self.len().min(max_len))
    }

    pub fn to_columns(self) -> Vec<ColumnIndex> {
        self.indices().collect()
    }
}

/// Which rule of the selection cascade produced the item columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStage {
    /// Question headers or the strict binary-ratio threshold.
    Primary,
    /// Relaxed binary-ratio threshold.
    Relaxed,
    /// Top columns by binary ratio, labels not excluded.
    TopRatio,
    /// Nothing could be selected; rows are kept at full width.
    Unresolved,
}

impl SelectionStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Relaxed => "relaxed",
            Self::TopRatio => "top-ratio",
            Self::Unresolved => "unresolved",
        }
    }

    /// True when a fallback rule had to fire.
    pub fn is_fallback(self) -> bool {
        !matches!(self, Self::Primary)
    }
}

/// Item columns in output order, with the stage that chose them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSelection {
    pub columns: Vec<ColumnIndex>,
    pub stage: SelectionStage,
}

impl ItemSelection {
    pub fn unresolved() -> Self {
        Self {
            columns: Vec::new(),
            stage: SelectionStage::Unresolved,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}
