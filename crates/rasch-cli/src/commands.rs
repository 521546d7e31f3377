use anyhow::Result;
use tracing::info;

use rasch_cli::pipeline::{OutputFormat, clean_input, load_config, write_output};
use rasch_clean::CleanReport;
use rasch_output::MatrixShape;

use crate::cli::{CleanArgs, InspectArgs, OutputFormatArg};

pub fn run_clean(args: &CleanArgs) -> Result<(CleanReport, MatrixShape)> {
    let config = load_config(args.config.as_deref())?;
    let report = clean_input(&args.input, &config, args.fill_missing)?;
    let format = match args.format {
        OutputFormatArg::Csv => OutputFormat::Csv,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    let shape = write_output(&report, format, args.output.as_deref())?;
    if let Some(path) = &args.output {
        info!(
            output = %path.display(),
            respondents = shape.respondents,
            items = shape.items,
            "estimation input written"
        );
    }
    Ok((report, shape))
}

pub fn run_inspect(args: &InspectArgs) -> Result<CleanReport> {
    let config = load_config(args.config.as_deref())?;
    clean_input(&args.input, &config, None)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use rasch_model::{FillMissing, SelectionStage};
    use tempfile::TempDir;

    use super::*;

    fn write_sheet(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("answers.csv");
        fs::write(&path, "Ism,Q1,Q2\nAli,1,0\nVali,,1\n").unwrap();
        path
    }

    #[test]
    fn run_clean_writes_requested_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("matrix.csv");
        let args = CleanArgs {
            input: write_sheet(&dir),
            output: Some(output.clone()),
            format: OutputFormatArg::Csv,
            fill_missing: Some(FillMissing::Zero),
            config: None,
        };
        let (report, shape) = run_clean(&args).unwrap();
        assert_eq!(report.selection.stage, SelectionStage::Primary);
        assert_eq!(shape.respondents, 2);
        assert_eq!(shape.items, 2);
        assert_eq!(fs::read_to_string(output).unwrap(), "1,0\n0,1\n");
    }

    #[test]
    fn run_clean_rejects_zero_block_target_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("clean.json");
        fs::write(&config, r#"{"block_target": {"min": 0, "max": 0}}"#).unwrap();
        let output = dir.path().join("matrix.csv");
        let args = CleanArgs {
            input: write_sheet(&dir),
            output: Some(output.clone()),
            format: OutputFormatArg::Csv,
            fill_missing: None,
            config: Some(config),
        };
        let err = run_clean(&args).unwrap_err();
        assert!(format!("{err:#}").contains("block_target.max must be at least 1"));
        assert!(!output.exists());
    }

    #[test]
    fn run_inspect_reports_every_column() {
        let dir = TempDir::new().unwrap();
        let args = InspectArgs {
            input: write_sheet(&dir),
            config: None,
        };
        let report = run_inspect(&args).unwrap();
        assert_eq!(report.headers, vec!["Ism", "Q1", "Q2"]);
        assert_eq!(report.selection.columns, vec![1, 2]);
        assert!(report.signals[0].is_label_header);
    }
}
