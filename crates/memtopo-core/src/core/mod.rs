//! # Core Module
//!
//! Stateless building blocks of memtopo: record models, the topology
//! analyzer and the format I/O layer.
//!
//! ## Overview
//!
//! - **Records** ([`models`]) - Analyzed protein records and the merged, deduplicated table
//! - **Topology** ([`topology`]) - Annotation alphabets, segment scanning and per-record metrics
//! - **File I/O** ([`io`]) - BOCTOPUS2, TMHMM, SignalP and PSORTb readers plus table writers
//!
//! Nothing in this module touches configuration files or reports progress;
//! that is the job of [`crate::engine`] and [`crate::workflows`].

pub mod io;
pub mod models;
pub mod topology;
