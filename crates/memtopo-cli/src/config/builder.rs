use super::file::FileConfig;
use crate::error::{CliError, Result};
use memtopo::engine::config::{AnalysisConfig, AnalysisConfigBuilder};
use std::path::Path;

fn set_if<T>(
    builder: AnalysisConfigBuilder,
    value: Option<T>,
    setter: fn(AnalysisConfigBuilder, T) -> AnalysisConfigBuilder,
) -> AnalysisConfigBuilder {
    match value {
        Some(v) => setter(builder, v),
        None => builder,
    }
}

pub fn build_config(config_path: Option<&Path>, set_values: &[String]) -> Result<AnalysisConfig> {
    let file_config = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let file_config = file_config.apply_set_values(set_values)?;

    let beta = file_config.beta_barrel.unwrap_or_default();
    let tmhmm = file_config.tmhmm.unwrap_or_default();
    let signalp = file_config.signalp.unwrap_or_default();

    let mut builder = AnalysisConfigBuilder::new();
    builder = set_if(builder, beta.min_segment_length, AnalysisConfigBuilder::min_segment_length);
    builder = set_if(
        builder,
        beta.min_alternation_ratio,
        AnalysisConfigBuilder::min_alternation_ratio,
    );
    builder = set_if(builder, beta.min_strand_count, AnalysisConfigBuilder::min_strand_count);
    builder = set_if(
        builder,
        tmhmm.membrane_prop_threshold,
        AnalysisConfigBuilder::membrane_prop_threshold,
    );
    builder = set_if(
        builder,
        signalp.probability_threshold,
        AnalysisConfigBuilder::probability_threshold,
    );
    builder = set_if(builder, signalp.excluded_prediction, |b, label: String| {
        b.excluded_prediction(label)
    });

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}
