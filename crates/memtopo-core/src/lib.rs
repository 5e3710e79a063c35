//! # memtopo Core Library
//!
//! Topology analysis and record merging for the outputs of membrane protein
//! prediction tools (BOCTOPUS2, TMHMM, SignalP and PSORTb).
//!
//! ## Architectural Philosophy
//!
//! The library is organized in three layers:
//!
//! - **[`core`]: The Foundation.** Stateless record models, the topology analyzer
//!   (`analyze`) and the per-tool file readers and writers.
//!
//! - **[`engine`]: Shared Machinery.** Validated analysis configuration, the
//!   library error type and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Complete procedures such as merging a set
//!   of BOCTOPUS2 result files into one analyzed table. Each workflow takes input
//!   paths and an [`engine::config::AnalysisConfig`] and returns an in-memory result
//!   that the caller writes out.

pub mod core;
pub mod engine;
pub mod workflows;
