//! # Topology Module
//!
//! Turns per-residue topology annotation strings into summary statistics and
//! a heuristic structural classification.
//!
//! - [`alphabet`] - The label alphabets of the supported predictors and their membrane subsets
//! - [`metrics`] - The derived [`TopologyMetrics`](metrics::TopologyMetrics) and the shared proportion helpers
//! - [`analyzer`] - Counting, transmembrane segmentation and strand detection
//!
//! ```ignore
//! use memtopo::core::topology::{alphabet::AlphabetConfig, analyzer::analyze};
//! use memtopo::engine::config::StrandCriteria;
//!
//! let metrics = analyze("IIioioioOO", &AlphabetConfig::boctopus2(), &StrandCriteria::default())?;
//! println!("{}", metrics.summary);
//! ```

pub mod alphabet;
pub mod analyzer;
pub mod metrics;
