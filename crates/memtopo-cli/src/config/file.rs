use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileBetaBarrelConfig {
    pub min_segment_length: Option<usize>,
    pub min_alternation_ratio: Option<f64>,
    pub min_strand_count: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileTmhmmConfig {
    pub membrane_prop_threshold: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSignalpConfig {
    pub probability_threshold: Option<f64>,
    pub excluded_prediction: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub beta_barrel: Option<FileBetaBarrelConfig>,
    pub tmhmm: Option<FileTmhmmConfig>,
    pub signalp: Option<FileSignalpConfig>,
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn apply_set_values(mut self, set_values: &[String]) -> Result<Self> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();

            match key {
                "beta-barrel.min-segment-length" => {
                    self.beta_barrel
                        .get_or_insert_with(Default::default)
                        .min_segment_length = Some(parse_value(key, value_str, "integer")?);
                }
                "beta-barrel.min-alternation-ratio" => {
                    self.beta_barrel
                        .get_or_insert_with(Default::default)
                        .min_alternation_ratio = Some(parse_value(key, value_str, "float")?);
                }
                "beta-barrel.min-strand-count" => {
                    self.beta_barrel
                        .get_or_insert_with(Default::default)
                        .min_strand_count = Some(parse_value(key, value_str, "integer")?);
                }
                "tmhmm.membrane-prop-threshold" => {
                    self.tmhmm
                        .get_or_insert_with(Default::default)
                        .membrane_prop_threshold = Some(parse_value(key, value_str, "float")?);
                }
                "signalp.probability-threshold" => {
                    self.signalp
                        .get_or_insert_with(Default::default)
                        .probability_threshold = Some(parse_value(key, value_str, "float")?);
                }
                "signalp.excluded-prediction" => {
                    self.signalp
                        .get_or_insert_with(Default::default)
                        .excluded_prediction = Some(value_str.trim().to_string());
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
            debug!("Applied override {}={}", key, value_str);
        }
        Ok(self)
    }
}
