//! Contiguous item-block selection.
//!
//! Candidate columns are split into maximal runs of consecutive indices and
//! the run whose length best fits the expected item count wins. Runs are
//! never merged across gaps.

use std::cmp::Reverse;

use rasch_model::{ColumnIndex, ColumnSignal, ItemBlock};

use crate::config::ItemCountRange;

/// Splits column indices into maximal runs of consecutive values.
///
/// Input is sorted and deduplicated first.
pub fn contiguous_runs(columns: &[ColumnIndex]) -> Vec<ItemBlock> {
    let mut sorted = columns.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut runs = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return runs;
    };

    let mut current = ItemBlock::new(first, first + 1);
    for column in iter {
        if column == current.end {
            current.end += 1;
        } else {
            runs.push(current);
            current = ItemBlock::new(column, column + 1);
        }
    }
    runs.push(current);
    runs
}

/// Ranking key of a run: distance from the target range, then longer first.
pub fn block_score(block: &ItemBlock, target: ItemCountRange) -> (usize, Reverse<usize>) {
    (target.distance(block.len()), Reverse(block.len()))
}

/// Picks the best-fitting run and cuts it to `target.max` columns.
///
/// Ties keep the earliest run. Returns `None` for an empty input or when
/// `target.max` leaves no room for a column.
pub fn pick_best_block(columns: &[ColumnIndex], target: ItemCountRange) -> Option<ItemBlock> {
    contiguous_runs(columns)
        .into_iter()
        .min_by_key(|block| block_score(block, target))
        .map(|block| block.truncated(target.max))
        .filter(|block| !block.is_empty())
}

/// The `top_n` columns with the highest binary ratio, in column order.
///
/// Equal ratios keep column order. Label columns are not excluded.
pub fn top_ratio_columns(signals: &[ColumnSignal], top_n: usize) -> Vec<ColumnIndex> {
    let mut ranked: Vec<&ColumnSignal> = signals.iter().collect();
    ranked.sort_by(|a, b| b.binary_ratio.total_cmp(&a.binary_ratio));
    let mut picked: Vec<ColumnIndex> = ranked
        .into_iter()
        .take(top_n)
        .map(|signal| signal.index)
        .collect();
    picked.sort_unstable();
    picked
}
