//! Ingest, clean and hand-off steps shared by the subcommands.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rasch_clean::{CleanConfig, CleanReport, clean_with_report};
use rasch_ingest::read_matrix;
use rasch_model::FillMissing;
use rasch_output::{MatrixShape, validate_cleaned, write_estimation_csv, write_json};
use tracing::{debug, info_span};

/// Output encodings of a cleaned matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

/// Loads cleaning thresholds, falling back to defaults without a file.
pub fn load_config(path: Option<&Path>) -> Result<CleanConfig> {
    let Some(path) = path else {
        return Ok(CleanConfig::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config = CleanConfig::from_json_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    debug!(?config, "cleaning config loaded");
    Ok(config)
}

/// Reads a raw matrix and cleans it.
pub fn clean_input(
    path: &Path,
    config: &CleanConfig,
    fill: Option<FillMissing>,
) -> Result<CleanReport> {
    let span = info_span!("clean", input = %path.display());
    let _guard = span.enter();
    let raw = read_matrix(path).with_context(|| format!("read {}", path.display()))?;
    Ok(clean_with_report(&raw, config, fill))
}

/// Validates the cleaned matrix and writes it to `output`, or stdout.
pub fn write_output(
    report: &CleanReport,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<MatrixShape> {
    let shape = validate_cleaned(&report.matrix)?;
    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            encode(report, format, &mut writer)
                .with_context(|| format!("write {}", path.display()))?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            encode(report, format, &mut writer).context("write stdout")?;
            writer.flush()?;
        }
    }
    Ok(shape)
}

fn encode<W: Write>(report: &CleanReport, format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Csv => write_estimation_csv(&report.matrix, writer)?,
        OutputFormat::Json => {
            write_json(&report.matrix, &report.item_headers, &mut *writer)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
