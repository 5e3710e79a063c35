//! # Workflows Module
//!
//! Complete procedures built on [`crate::core`] and [`crate::engine`]. These
//! are the entry points used by the command-line tool.
//!
//! ## Overview
//!
//! Every multi-file workflow follows the same shape: each input is read and
//! processed to completion before the next one, unusable files are skipped
//! with a warning and a [`Progress::FileSkipped`] event, and a run in which no
//! record survives returns [`EngineError::NoData`].
//!
//! - **BOCTOPUS2** ([`boctopus2`]) - Analyze and merge beta-barrel topology tables
//! - **TMHMM** ([`tmhmm`]) - Analyze helix annotations and join the helix summaries
//! - **Tables** ([`tabular`]) - Concatenate, filter and summarise SignalP and TMHMM tables
//! - **PSORTb** ([`psortb`]) - Extract localization predictions from a long-format report
//!
//! [`Progress::FileSkipped`]: crate::engine::progress::Progress::FileSkipped
//! [`EngineError::NoData`]: crate::engine::error::EngineError::NoData

pub mod boctopus2;
pub mod psortb;
pub mod tabular;
pub mod tmhmm;

use crate::core::io::traits::ParsedEntry;
use crate::core::models::record::{ProteinRecord, SourceMeta};
use crate::core::topology::alphabet::AlphabetConfig;
use crate::core::topology::analyzer::analyze;
use crate::engine::config::StrandCriteria;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::Path;
use tracing::warn;

/// Analyzes every parsed entry of one file. Entries whose annotation cannot
/// be analyzed are dropped with a warning; the rest of the file is kept.
pub(crate) fn analyze_entries(
    entries: Vec<ParsedEntry>,
    alphabet: &AlphabetConfig,
    criteria: &StrandCriteria,
    source: Option<&SourceMeta>,
    path: &Path,
) -> Vec<ProteinRecord> {
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        match analyze(&entry.annotation, alphabet, criteria) {
            Ok(metrics) => records.push(
                ProteinRecord::new(entry.protein_id, entry.annotation, metrics)
                    .with_name(entry.protein_name)
                    .with_source(source.cloned()),
            ),
            Err(e) => warn!(
                "Skipping record '{}' in {}: {}",
                entry.protein_id,
                path.display(),
                e
            ),
        }
    }
    records
}

/// Logs and reports an input file that could not be used.
pub(crate) fn report_skipped(reporter: &ProgressReporter, path: &Path, reason: impl ToString) {
    let reason = reason.to_string();
    warn!("Skipping {}: {}", path.display(), reason);
    reporter.report(Progress::FileSkipped {
        path: path.to_path_buf(),
        reason,
    });
}
