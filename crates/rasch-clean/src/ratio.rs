//! Per-column binary ratios and header signals.

use rasch_model::{ColumnSignal, RawCell};

use crate::header::classify_header;
use crate::normalize::{CellClass, classify};

/// Fraction of present cells that read as 0/1.
///
/// Blank cells and NA tokens are not counted at all; a column with nothing
/// present has ratio 0.0.
pub fn binary_ratio<I>(cells: I) -> f64
where
    I: IntoIterator<Item = CellClass>,
{
    let mut present = 0usize;
    let mut binary = 0usize;
    for class in cells {
        if class.is_present() {
            present += 1;
            if matches!(class, CellClass::Binary(_)) {
                binary += 1;
            }
        }
    }
    if present == 0 {
        0.0
    } else {
        binary as f64 / present as f64
    }
}

/// Computes one signal per column of a rectangular grid.
///
/// Row 0 supplies the header classification; the ratio is taken over the
/// remaining rows only.
pub fn column_signals(rows: &[Vec<RawCell>]) -> Vec<ColumnSignal> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };

    header
        .iter()
        .enumerate()
        .map(|(index, header_cell)| {
            let class = classify_header(header_cell);
            let ratio = binary_ratio(
                data.iter()
                    .map(|row| row.get(index).map_or(CellClass::Blank, classify)),
            );
            ColumnSignal {
                index,
                is_label_header: class.is_label,
                is_question_header: class.is_question,
                binary_ratio: ratio,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<CellClass> {
        values
            .iter()
            .map(|value| classify(&RawCell::from(*value)))
            .collect()
    }

    #[test]
    fn all_binary_column() {
        assert!((binary_ratio(cells(&["1", "0", "yes", "no"])) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mixed_column() {
        let ratio = binary_ratio(cells(&["1", "0", "1", "Ali"]));
        assert!((ratio - 0.75).abs() < 1e-9);
    }

    #[test]
    fn blanks_and_na_are_ignored() {
        let ratio = binary_ratio(cells(&["1", "", "na", "  ", "0"]));
        assert!((ratio - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nothing_present_is_zero() {
        assert_eq!(binary_ratio(cells(&["", "null"])), 0.0);
        assert_eq!(binary_ratio(Vec::new()), 0.0);
    }

    #[test]
    fn signals_skip_header_row() {
        let rows = vec![
            vec![RawCell::from("Ism"), RawCell::from("Q1"), RawCell::from("notes")],
            vec![RawCell::from("Ali"), RawCell::from(1), RawCell::from("ok")],
            vec![RawCell::from("Vali"), RawCell::from(0), RawCell::from("1")],
        ];
        let signals = column_signals(&rows);
        assert_eq!(signals.len(), 3);

        assert!(signals[0].is_label_header);
        assert_eq!(signals[0].binary_ratio, 0.0);

        assert!(signals[1].is_question_header);
        assert!((signals[1].binary_ratio - 1.0).abs() < f64::EPSILON);

        assert!(!signals[2].is_label_header && !signals[2].is_question_header);
        assert!((signals[2].binary_ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn header_only_grid_has_zero_ratios() {
        let rows = vec![vec![RawCell::from("Q1"), RawCell::from("Q2")]];
        let signals = column_signals(&rows);
        assert!(signals.iter().all(|signal| signal.binary_ratio == 0.0));
    }
}
