use super::{analyze_entries, report_skipped};
use crate::core::io::boctopus2::Boctopus2Table;
use crate::core::io::traits::RecordFormat;
use crate::core::models::record::SourceMeta;
use crate::core::models::table::{MergedTable, Merger};
use crate::core::topology::alphabet::AlphabetConfig;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::PathBuf;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct Boctopus2Result {
    /// Every analyzed protein, deduplicated and sorted by id.
    pub table: MergedTable,
    /// The subset classified as beta-barrels.
    pub beta_barrels: MergedTable,
}

#[instrument(skip_all, name = "boctopus2_workflow")]
pub fn run(
    inputs: &[PathBuf],
    config: &AnalysisConfig,
    source: Option<&SourceMeta>,
    reporter: &ProgressReporter,
) -> Result<Boctopus2Result, EngineError> {
    let alphabet = AlphabetConfig::boctopus2();
    let mut merger = Merger::new();

    reporter.report(Progress::FilesStart {
        total: inputs.len() as u64,
    });
    for path in inputs {
        match Boctopus2Table::read_from_path(path) {
            Ok(entries) => {
                let records = analyze_entries(entries, &alphabet, &config.strands, source, path);
                reporter.report(Progress::FileDone {
                    path: path.clone(),
                    records: records.len(),
                });
                merger.push_file(records);
            }
            Err(e) => {
                report_skipped(reporter, path, e);
                merger.skip_file();
            }
        }
    }
    reporter.report(Progress::FilesFinish);

    let table = merger.finish()?;
    let beta_barrels = table.partition(|r| r.metrics.is_classified);
    let summary = format!(
        "Merged {} protein(s), {} classified as beta-barrel.",
        table.len(),
        beta_barrels.len()
    );
    info!("{}", summary);
    reporter.report(Progress::Message(summary));
    Ok(Boctopus2Result {
        table,
        beta_barrels,
    })
}
