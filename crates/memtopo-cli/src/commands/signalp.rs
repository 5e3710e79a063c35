use super::concat::concat_tables;
use super::write_output;
use crate::cli::{SignalpArgs, SignalpCommands, SignalpConcatArgs, SummariseArgs};
use crate::error::Result;
use crate::utils::inputs::expand_inputs;
use crate::utils::progress::CliProgressHandler;
use memtopo::core::io::paths;
use memtopo::core::models::record::SourceMeta;
use memtopo::engine::config::AnalysisConfig;
use memtopo::engine::progress::ProgressReporter;
use memtopo::workflows;
use std::path::Path;
use tracing::info;

/// SignalP prediction summaries start with one `#` comment line.
const SUMMARY_COMMENT_LINES: usize = 1;

pub fn run(args: SignalpArgs, config: &AnalysisConfig) -> Result<()> {
    match args.command {
        SignalpCommands::Concat(args) => concat(args),
        SignalpCommands::Filter { input } => filter(&input, config),
        SignalpCommands::Summarise(args) => summarise(args, config),
    }
}

fn concat(args: SignalpConcatArgs) -> Result<()> {
    let source = SourceMeta {
        meta_id: args.meta_id,
        tax_id: args.tax_id,
    };
    concat_tables(&args.inputs, SUMMARY_COMMENT_LINES, &source, &args.output)
}

fn filter(input: &Path, config: &AnalysisConfig) -> Result<()> {
    let kept = workflows::tabular::filter_predictions(input, &config.signalp)?;
    let output = paths::filtered_path(input);
    write_output(&output, |w| kept.write_to(w, b'\t'))?;
    println!("Filtered file saved as {}", output.display());
    Ok(())
}

fn summarise(args: SummariseArgs, config: &AnalysisConfig) -> Result<()> {
    let inputs = expand_inputs(&args.inputs)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        "Summarising {} SignalP per-residue file(s) at threshold {}.",
        inputs.len(),
        config.signalp.probability_threshold
    );
    let summary = workflows::tabular::summarise_residues(
        &inputs,
        &args.meta_id,
        &config.signalp,
        &reporter,
    )?;

    let output = paths::summary_csv_path(&args.output);
    write_output(&output, |w| summary.write_to(w, b','))?;
    println!(
        "Processed {} file(s) and saved the results to {}",
        inputs.len(),
        output.display()
    );
    Ok(())
}
