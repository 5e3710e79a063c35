//! Table-level workflows that keep the tool's own columns: concatenation of
//! per-sample tables, SignalP prediction filtering and per-residue summaries.

use super::report_skipped;
use crate::core::io::error::FormatError;
use crate::core::io::signalp::{ResidueCounts, SignalpResidues};
use crate::core::io::tabular::{META_ID_COLUMN, Table};
use crate::core::io::traits::RecordFormat;
use crate::core::models::record::SourceMeta;
use crate::engine::config::SignalpConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Column of SignalP's prediction summary holding the predicted class.
pub const PREDICTION_COLUMN: &str = "Prediction";

/// Stacks tab-delimited tables, aligning columns by name and prefixing every
/// row with `meta_id` and `tax_id`. `skip_lines` leading lines of each file
/// are discarded before the header.
#[instrument(skip_all, name = "concat_workflow")]
pub fn concat(
    inputs: &[PathBuf],
    skip_lines: usize,
    source: &SourceMeta,
    reporter: &ProgressReporter,
) -> Result<Table, EngineError> {
    let mut tables = Vec::with_capacity(inputs.len());

    reporter.report(Progress::FilesStart {
        total: inputs.len() as u64,
    });
    for path in inputs {
        match Table::read_from_path(path, b'\t', skip_lines) {
            Ok(table) => {
                reporter.report(Progress::FileDone {
                    path: path.clone(),
                    records: table.rows.len(),
                });
                tables.push(table.with_source_columns(source));
            }
            Err(e) => report_skipped(reporter, path, e),
        }
    }
    reporter.report(Progress::FilesFinish);

    if tables.is_empty() {
        return Err(EngineError::NoData {
            inputs: inputs.len(),
        });
    }
    let merged = Table::concat(tables);
    info!("Concatenated {} row(s).", merged.rows.len());
    Ok(merged)
}

/// Drops the rows of a SignalP prediction summary whose `Prediction` equals
/// the configured excluded label.
#[instrument(skip_all, name = "signalp_filter_workflow")]
pub fn filter_predictions(input: &Path, config: &SignalpConfig) -> Result<Table, EngineError> {
    let table = Table::read_from_path(input, b'\t', 0)?;
    let excluded = config.excluded_prediction.as_str();
    let kept = table.filter_rows(PREDICTION_COLUMN, |value| value != excluded)?;
    info!(
        "Kept {} of {} prediction(s) not labelled '{}'.",
        kept.rows.len(),
        table.rows.len(),
        excluded
    );
    Ok(kept)
}

fn aligned_counts(counts: &ResidueCounts, columns: &[String], path: &Path) -> Vec<String> {
    if counts.columns != columns {
        warn!(
            "Probability columns of {} differ from the first file; aligning by name.",
            path.display()
        );
    }
    columns
        .iter()
        .map(|name| {
            counts
                .columns
                .iter()
                .position(|c| c == name)
                .map_or(0, |i| counts.counts[i])
                .to_string()
        })
        .collect()
}

/// Summarises SignalP per-residue reports, one row per file: the number of
/// residues above the probability threshold for each probability column.
/// The columns of the first usable file define the output header.
#[instrument(skip_all, name = "signalp_summarise_workflow")]
pub fn summarise_residues(
    inputs: &[PathBuf],
    meta_id: &str,
    config: &SignalpConfig,
    reporter: &ProgressReporter,
) -> Result<Table, EngineError> {
    let mut summary: Option<Table> = None;

    reporter.report(Progress::FilesStart {
        total: inputs.len() as u64,
    });
    for path in inputs {
        let counted = SignalpResidues::read_from_path(path).and_then(|mut reports| {
            reports
                .pop()
                .ok_or(FormatError::Empty)?
                .summarise(config.probability_threshold)
        });
        let counts = match counted {
            Ok(counts) => counts,
            Err(e) => {
                report_skipped(reporter, path, e);
                continue;
            }
        };

        let table = summary.get_or_insert_with(|| {
            let mut headers = vec![
                META_ID_COLUMN.to_string(),
                "protein_id".to_string(),
                "protein_name".to_string(),
            ];
            headers.extend(counts.columns.iter().cloned());
            Table::new(headers)
        });
        let mut row = vec![
            meta_id.to_string(),
            counts.protein_id.clone(),
            counts.protein_name.clone(),
        ];
        row.extend(aligned_counts(&counts, &table.headers[3..], path));
        table.rows.push(row);

        reporter.report(Progress::FileDone {
            path: path.clone(),
            records: 1,
        });
    }
    reporter.report(Progress::FilesFinish);

    let summary = summary.ok_or(EngineError::NoData {
        inputs: inputs.len(),
    })?;
    info!("Summarised {} SignalP report(s).", summary.rows.len());
    Ok(summary)
}
