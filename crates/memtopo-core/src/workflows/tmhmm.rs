use super::{analyze_entries, report_skipped};
use crate::core::io::error::FormatError;
use crate::core::io::tmhmm::{TmhmmAnnotation, TmhmmSummary};
use crate::core::io::traits::RecordFormat;
use crate::core::models::record::{HelixCounts, SourceMeta};
use crate::core::models::table::{MergedTable, Merger};
use crate::core::topology::alphabet::AlphabetConfig;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct TmhmmResult {
    pub table: MergedTable,
    /// Proteins with a predicted helix or enough membrane residues.
    pub tm_only: MergedTable,
}

/// Collects helix counts from all summary files. An unreadable summary only
/// costs its helix data; the first file to mention a protein wins.
fn load_helices(summaries: &[PathBuf]) -> HashMap<String, HelixCounts> {
    let mut helices = HashMap::new();
    for path in summaries {
        let parsed = File::open(path)
            .map_err(FormatError::from)
            .and_then(|file| TmhmmSummary::read_map(&mut BufReader::new(file)));
        match parsed {
            Ok(map) => {
                for (id, counts) in map {
                    helices.entry(id).or_insert(counts);
                }
            }
            Err(e) => warn!(
                "Ignoring TMHMM summary {}: {}. Helix counts default to 0.",
                path.display(),
                e
            ),
        }
    }
    helices
}

#[instrument(skip_all, name = "tmhmm_workflow")]
pub fn run(
    annotations: &[PathBuf],
    summaries: &[PathBuf],
    config: &AnalysisConfig,
    source: Option<&SourceMeta>,
    reporter: &ProgressReporter,
) -> Result<TmhmmResult, EngineError> {
    let alphabet = AlphabetConfig::tmhmm();
    let helices = load_helices(summaries);
    let mut merger = Merger::new();

    reporter.report(Progress::FilesStart {
        total: annotations.len() as u64,
    });
    for path in annotations {
        match TmhmmAnnotation::read_from_path(path) {
            Ok(entries) => {
                let records: Vec<_> =
                    analyze_entries(entries, &alphabet, &config.strands, source, path)
                        .into_iter()
                        .map(|record| {
                            let counts = helices
                                .get(&record.protein_id)
                                .copied()
                                .unwrap_or_default();
                            record.with_helices(counts)
                        })
                        .collect();
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
    let threshold = config.tmhmm.membrane_prop_threshold;
    let tm_only = table.partition(|r| r.has_tm(threshold));
    let summary = format!(
        "Total proteins: {}. Proteins with TM domains: {}.",
        table.len(),
        tm_only.len()
    );
    info!("{}", summary);
    reporter.report(Progress::Message(summary));
    Ok(TmhmmResult { table, tm_only })
}
