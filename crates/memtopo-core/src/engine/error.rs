use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::error::FormatError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No valid records in {inputs} input file(s): every file was unreadable or held no usable rows")]
    NoData { inputs: usize },

    #[error("Invalid analysis configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}
