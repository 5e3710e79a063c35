use super::write_output;
use crate::cli::ConcatArgs;
use crate::error::Result;
use crate::utils::inputs::expand_inputs;
use crate::utils::progress::CliProgressHandler;
use memtopo::core::models::record::SourceMeta;
use memtopo::engine::progress::ProgressReporter;
use memtopo::workflows;
use std::path::{Path, PathBuf};

/// Shared by `concat` and `signalp concat`.
pub(crate) fn concat_tables(
    inputs: &[String],
    skip_lines: usize,
    source: &SourceMeta,
    output: &Path,
) -> Result<()> {
    let inputs: Vec<PathBuf> = expand_inputs(inputs)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let merged = workflows::tabular::concat(&inputs, skip_lines, source, &reporter)?;
    write_output(output, |w| merged.write_to(w, b'\t'))?;

    println!("Merged file saved as {}", output.display());
    Ok(())
}

pub fn run(args: ConcatArgs) -> Result<()> {
    concat_tables(&args.inputs, args.skip_lines, &args.source(), &args.output)
}
