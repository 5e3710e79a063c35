//! # Engine Module
//!
//! Run-level plumbing shared by every workflow: the validated analysis
//! configuration, the error type surfaced to callers, and the progress
//! reporting hook.
//!
//! - **Configuration** ([`config`]) - Strand/barrel thresholds, TMHMM and SignalP cut-offs
//! - **Error Handling** ([`error`]) - Fatal, run-level failures such as an all-invalid input set
//! - **Progress Monitoring** ([`progress`]) - Per-file progress events for front-ends

pub mod config;
pub mod error;
pub mod progress;
