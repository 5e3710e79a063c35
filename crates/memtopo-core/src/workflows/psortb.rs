use crate::core::io::psortb::{PsortbPrediction, PsortbReport};
use crate::core::io::traits::RecordFormat;
use crate::engine::error::EngineError;
use std::path::Path;
use tracing::{info, instrument};

/// Extracts the final and secondary localization of every protein in a
/// PSORTb long-format report. Proteins without a final prediction are left out.
#[instrument(skip_all, name = "psortb_workflow")]
pub fn run(input: &Path) -> Result<Vec<PsortbPrediction>, EngineError> {
    let predictions = PsortbReport::read_from_path(input)?;
    info!(
        "Extracted {} localization prediction(s) from {}.",
        predictions.len(),
        input.display()
    );
    Ok(predictions)
}
