//! Item-column selection cascade.
//!
//! Rules are tried top to bottom and the first one that yields columns wins:
//!
//! 1. **Primary**: drop label headers, keep question headers, keep columns
//!    with ratio >= `min_binary_ratio`.
//! 2. **Relaxed**: only when (1) is empty; non-label columns with ratio >=
//!    `relaxed_binary_ratio`.
//! 3. The candidates from (1) or (2) are reduced to their best contiguous
//!    block.
//! 4. **TopRatio**: only when there were no candidates at all; the
//!    `fallback_top_n` highest-ratio columns, labels included.

use rasch_model::{ColumnIndex, ColumnSignal, ItemSelection, SelectionStage};
use tracing::{debug, warn};

use crate::block::{pick_best_block, top_ratio_columns};
use crate::config::CleanConfig;

/// Candidate item columns in ascending order, before block selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    pub columns: Vec<ColumnIndex>,
    pub stage: SelectionStage,
}

/// Applies the primary rule and, if it finds nothing, the relaxed rule.
pub fn select_candidates(signals: &[ColumnSignal], config: &CleanConfig) -> Candidates {
    let primary: Vec<ColumnIndex> = signals
        .iter()
        .filter(|signal| {
            !signal.is_label_header
                && (signal.is_question_header || signal.binary_ratio >= config.min_binary_ratio)
        })
        .map(|signal| signal.index)
        .collect();
    if !primary.is_empty() {
        return Candidates {
            columns: primary,
            stage: SelectionStage::Primary,
        };
    }

    let relaxed = signals
        .iter()
        .filter(|signal| {
            !signal.is_label_header && signal.binary_ratio >= config.relaxed_binary_ratio
        })
        .map(|signal| signal.index)
        .collect();
    Candidates {
        columns: relaxed,
        stage: SelectionStage::Relaxed,
    }
}

/// Runs the full cascade and returns the item columns in output order.
pub fn select_items(signals: &[ColumnSignal], config: &CleanConfig) -> ItemSelection {
    let candidates = select_candidates(signals, config);
    debug!(
        stage = candidates.stage.as_str(),
        candidates = candidates.columns.len(),
        "item candidates selected"
    );

    if let Some(block) = pick_best_block(&candidates.columns, config.block_target) {
        if candidates.stage.is_fallback() {
            warn!(
                threshold = config.relaxed_binary_ratio,
                "no column reached the primary binary ratio; using relaxed threshold"
            );
        }
        debug!(start = block.start, end = block.end, "item block chosen");
        return ItemSelection {
            columns: block.to_columns(),
            stage: candidates.stage,
        };
    }

    let ranked = top_ratio_columns(signals, config.fallback_top_n);
    if ranked.is_empty() {
        warn!("grid has no columns; item columns unresolved");
        return ItemSelection::unresolved();
    }
    warn!(
        columns = ranked.len(),
        "no candidate item columns; falling back to top columns by binary ratio"
    );
    ItemSelection {
        columns: ranked,
        stage: SelectionStage::TopRatio,
    }
}
