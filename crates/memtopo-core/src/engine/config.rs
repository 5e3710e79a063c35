use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Parameter '{name}' must be greater than zero (got {value})")]
    NotPositive { name: &'static str, value: f64 },
    #[error("Parameter '{name}' must lie within [0, 1] (got {value})")]
    OutOfUnitRange { name: &'static str, value: f64 },
}

/// Thresholds that turn transmembrane segments into counted strands and
/// strand counts into a beta-barrel call.
///
/// The defaults are empirical and kept tunable rather than fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrandCriteria {
    pub min_segment_length: usize,
    pub min_alternation_ratio: f64,
    pub min_strand_count: usize,
}

impl Default for StrandCriteria {
    fn default() -> Self {
        Self {
            min_segment_length: 5,
            min_alternation_ratio: 0.6,
            min_strand_count: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TmhmmConfig {
    pub membrane_prop_threshold: f64,
}

impl Default for TmhmmConfig {
    fn default() -> Self {
        Self {
            membrane_prop_threshold: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignalpConfig {
    pub probability_threshold: f64,
    pub excluded_prediction: String,
}

impl Default for SignalpConfig {
    fn default() -> Self {
        Self {
            probability_threshold: 0.5,
            excluded_prediction: "OTHER".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisConfig {
    pub strands: StrandCriteria,
    pub tmhmm: TmhmmConfig,
    pub signalp: SignalpConfig,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    min_segment_length: Option<usize>,
    min_alternation_ratio: Option<f64>,
    min_strand_count: Option<usize>,
    membrane_prop_threshold: Option<f64>,
    probability_threshold: Option<f64>,
    excluded_prediction: Option<String>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_segment_length(mut self, length: usize) -> Self {
        self.min_segment_length = Some(length);
        self
    }
    pub fn min_alternation_ratio(mut self, ratio: f64) -> Self {
        self.min_alternation_ratio = Some(ratio);
        self
    }
    pub fn min_strand_count(mut self, count: usize) -> Self {
        self.min_strand_count = Some(count);
        self
    }
    pub fn membrane_prop_threshold(mut self, threshold: f64) -> Self {
        self.membrane_prop_threshold = Some(threshold);
        self
    }
    pub fn probability_threshold(mut self, threshold: f64) -> Self {
        self.probability_threshold = Some(threshold);
        self
    }
    pub fn excluded_prediction(mut self, label: impl Into<String>) -> Self {
        self.excluded_prediction = Some(label.into());
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let strand_defaults = StrandCriteria::default();
        let strands = StrandCriteria {
            min_segment_length: self
                .min_segment_length
                .unwrap_or(strand_defaults.min_segment_length),
            min_alternation_ratio: self
                .min_alternation_ratio
                .unwrap_or(strand_defaults.min_alternation_ratio),
            min_strand_count: self
                .min_strand_count
                .unwrap_or(strand_defaults.min_strand_count),
        };
        if strands.min_segment_length < 2 {
            // A ratio over adjacent pairs needs at least one pair.
            return Err(ConfigError::NotPositive {
                name: "min_segment_length",
                value: strands.min_segment_length as f64 - 1.0,
            });
        }
        if strands.min_strand_count == 0 {
            return Err(ConfigError::NotPositive {
                name: "min_strand_count",
                value: 0.0,
            });
        }
        check_unit_range("min_alternation_ratio", strands.min_alternation_ratio)?;

        let tmhmm = TmhmmConfig {
            membrane_prop_threshold: self
                .membrane_prop_threshold
                .unwrap_or(TmhmmConfig::default().membrane_prop_threshold),
        };
        check_unit_range("membrane_prop_threshold", tmhmm.membrane_prop_threshold)?;

        let signalp_defaults = SignalpConfig::default();
        let signalp = SignalpConfig {
            probability_threshold: self
                .probability_threshold
                .unwrap_or(signalp_defaults.probability_threshold),
            excluded_prediction: self
                .excluded_prediction
                .unwrap_or(signalp_defaults.excluded_prediction),
        };
        check_unit_range("probability_threshold", signalp.probability_threshold)?;
        if signalp.excluded_prediction.trim().is_empty() {
            return Err(ConfigError::MissingParameter("excluded_prediction"));
        }

        Ok(AnalysisConfig {
            strands,
            tmhmm,
            signalp,
        })
    }
}

fn check_unit_range(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}
