use std::collections::BTreeSet;
use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rasch_clean::CleanReport;
use rasch_model::{ColumnSignal, SelectionStage};
use rasch_output::MatrixShape;

/// Printed to stderr so stdout stays a clean data stream.
pub fn print_clean_summary(report: &CleanReport, shape: MatrixShape, output: Option<&Path>) {
    if let Some(path) = output {
        eprintln!("Output: {}", path.display());
    }
    eprintln!("{}", clean_summary_table(report, shape));
}

fn clean_summary_table(report: &CleanReport, shape: MatrixShape) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Step"), header_cell("Rows"), header_cell("Detail")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(report.input_rows),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Blank rows"),
        count_cell(report.blank_rows_dropped, Color::Yellow),
        dim_cell("dropped before selection"),
    ]);
    table.add_row(vec![
        Cell::new("Unanswered rows"),
        count_cell(report.uninformative_rows_dropped, Color::Yellow),
        dim_cell("no item answered"),
    ]);
    table.add_row(vec![
        Cell::new("Items"),
        Cell::new(shape.items),
        stage_cell(report.selection.stage),
    ]);
    table.add_row(vec![
        Cell::new("Respondents")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(shape.respondents).add_attribute(Attribute::Bold),
        Cell::new(format!("{} missing", report.matrix.missing_count())),
    ]);
    table
}

/// Per-column classification table followed by the selection stage.
pub fn print_inspect_summary(report: &CleanReport) {
    println!("{}", inspect_table(report));
    println!("{}", stage_line(report));
}

fn stage_line(report: &CleanReport) -> String {
    format!(
        "Stage: {} ({} of {} columns selected)",
        report.selection.stage.as_str(),
        report.selection.len(),
        report.signals.len()
    )
}

fn inspect_table(report: &CleanReport) -> Table {
    let selected: BTreeSet<usize> = report.selection.columns.iter().copied().collect();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Header"),
        header_cell("Label"),
        header_cell("Question"),
        header_cell("Binary ratio"),
        header_cell("Selected"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for signal in &report.signals {
        table.add_row(signal_row(report, signal, selected.contains(&signal.index)));
    }
    table
}

fn signal_row(report: &CleanReport, signal: &ColumnSignal, is_selected: bool) -> Vec<Cell> {
    let header = match report.headers.get(signal.index) {
        Some(text) if !text.is_empty() => Cell::new(text),
        _ => dim_cell("-"),
    };
    vec![
        Cell::new(signal.index),
        header,
        flag_cell(signal.is_label_header, Color::Magenta),
        flag_cell(signal.is_question_header, Color::Blue),
        ratio_cell(signal.binary_ratio),
        flag_cell(is_selected, Color::Green),
    ]
}

fn stage_cell(stage: SelectionStage) -> Cell {
    match stage {
        SelectionStage::Primary => Cell::new(stage.as_str()).fg(Color::Green),
        SelectionStage::Relaxed | SelectionStage::TopRatio => {
            Cell::new(stage.as_str()).fg(Color::Yellow)
        }
        SelectionStage::Unresolved => Cell::new(stage.as_str())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn ratio_cell(ratio: f64) -> Cell {
    let cell = Cell::new(format!("{ratio:.2}"));
    if ratio == 0.0 { cell.fg(Color::DarkGrey) } else { cell }
}

fn flag_cell(value: bool, color: Color) -> Cell {
    if value {
        Cell::new("✓").fg(color)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasch_clean::{CleanConfig, clean_with_report};
    use rasch_model::{RawCell, RawMatrix};

    fn report() -> CleanReport {
        let raw = RawMatrix::new(vec![
            vec!["Ism".into(), "Q1".into(), "Q2".into()],
            vec!["Ali".into(), RawCell::Int(1), "no".into()],
            vec!["".into(), "".into(), "".into()],
            vec!["Vali".into(), "na".into(), "yes".into()],
        ]);
        clean_with_report(&raw, &CleanConfig::default(), None)
    }

    fn render(mut table: Table) -> String {
        table.force_no_tty();
        table.to_string()
    }

    #[test]
    fn clean_summary_lists_counts_and_stage() {
        let report = report();
        let shape = MatrixShape {
            respondents: report.matrix.height(),
            items: report.matrix.width(),
        };
        let rendered = render(clean_summary_table(&report, shape));
        assert!(rendered.contains("Blank rows"));
        assert!(rendered.contains("primary"));
        assert!(rendered.contains("1 missing"));
    }

    #[test]
    fn inspect_table_has_one_row_per_column() {
        let report = report();
        let rendered = render(inspect_table(&report));
        for header in ["Ism", "Q1", "Q2"] {
            assert!(rendered.contains(header), "{header}");
        }
        assert!(rendered.contains("1.00"));
        assert!(rendered.contains("0.00"));
        assert_eq!(
            stage_line(&report),
            "Stage: primary (2 of 3 columns selected)"
        );
    }
}
