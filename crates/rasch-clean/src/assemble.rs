//! Matrix assembly: from a raw grid to a cleaned response matrix.

use rasch_model::{
    CleanedMatrix, ColumnSignal, FillMissing, ItemSelection, RawCell, RawMatrix, Response,
    SelectionStage,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::CleanConfig;
use crate::normalize::normalize;
use crate::ratio::column_signals;
use crate::select::select_items;

/// Result of one cleaning pass together with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanReport {
    pub matrix: CleanedMatrix,
    pub signals: Vec<ColumnSignal>,
    pub selection: ItemSelection,
    /// Header text of every column of the padded grid.
    pub headers: Vec<String>,
    /// Header text of each selected column, in output order.
    pub item_headers: Vec<String>,
    pub input_rows: usize,
    /// Rows dropped before normalization because every cell was blank.
    pub blank_rows_dropped: usize,
    /// Rows dropped after projection because no item was answered.
    pub uninformative_rows_dropped: usize,
}

impl CleanReport {
    fn empty(input_rows: usize, blank_rows_dropped: usize) -> Self {
        Self {
            matrix: CleanedMatrix::default(),
            signals: Vec::new(),
            selection: ItemSelection::unresolved(),
            headers: Vec::new(),
            item_headers: Vec::new(),
            input_rows,
            blank_rows_dropped,
            uninformative_rows_dropped: 0,
        }
    }
}

/// Cleans a raw grid with the default configuration.
///
/// Returns an empty matrix when the input is empty or every row is dropped;
/// deciding whether that is fatal is left to the caller.
pub fn clean(raw: &RawMatrix, fill: Option<FillMissing>) -> CleanedMatrix {
    clean_with_report(raw, &CleanConfig::default(), fill).matrix
}

/// Infers item columns for a rectangular grid whose first row is the header.
pub fn infer_item_columns(
    rows: &[Vec<RawCell>],
    config: &CleanConfig,
) -> (Vec<ColumnSignal>, ItemSelection) {
    let signals = column_signals(rows);
    let selection = select_items(&signals, config);
    (signals, selection)
}

/// Cleans a raw grid and reports how the item columns were chosen.
pub fn clean_with_report(
    raw: &RawMatrix,
    config: &CleanConfig,
    fill: Option<FillMissing>,
) -> CleanReport {
    let input_rows = raw.len();
    let rows: Vec<Vec<RawCell>> = raw
        .padded()
        .into_iter()
        .filter(|row| !row.iter().all(RawCell::is_blank))
        .collect();
    let blank_rows_dropped = input_rows - rows.len();
    if rows.is_empty() {
        debug!(input_rows, "no non-blank rows to clean");
        return CleanReport::empty(input_rows, blank_rows_dropped);
    }

    let (signals, selection) = infer_item_columns(&rows, config);
    if selection.stage == SelectionStage::Unresolved {
        warn!("no item columns selected; keeping full row width");
    }

    let headers: Vec<String> = rows[0].iter().map(ToString::to_string).collect();
    let item_headers = selection
        .columns
        .iter()
        .map(|&column| headers.get(column).cloned().unwrap_or_default())
        .collect();

    let projected: Vec<Vec<Response>> = rows
        .iter()
        .map(|row| project_row(row, &selection))
        .collect();
    let kept_rows = projected.len();
    let informative: Vec<Vec<Response>> = projected
        .into_iter()
        .filter(|row| row.iter().any(|value| value.is_observed()))
        .collect();
    let uninformative_rows_dropped = kept_rows - informative.len();

    let mut matrix = CleanedMatrix::new(informative);
    if let Some(fill) = fill {
        matrix = matrix.fill_missing(fill);
    }

    info!(
        input_rows,
        respondents = matrix.height(),
        items = matrix.width(),
        stage = selection.stage.as_str(),
        blank_rows_dropped,
        uninformative_rows_dropped,
        "response matrix cleaned"
    );

    CleanReport {
        matrix,
        signals,
        selection,
        headers,
        item_headers,
        input_rows,
        blank_rows_dropped,
        uninformative_rows_dropped,
    }
}

/// Normalizes a row and keeps the selected columns (all of them when none
/// were selected).
fn project_row(row: &[RawCell], selection: &ItemSelection) -> Vec<Response> {
    if selection.is_empty() {
        return row.iter().map(normalize).collect();
    }
    selection
        .columns
        .iter()
        .map(|&column| row.get(column).map_or(Response::Missing, normalize))
        .collect()
}
