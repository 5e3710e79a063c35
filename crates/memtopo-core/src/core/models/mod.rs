//! Data models for parsed proteins and the merged table that owns them.
//!
//! A [`ProteinRecord`](record::ProteinRecord) is created by a format reader,
//! enriched with topology metrics straight away, and then handed to a
//! [`Merger`](table::Merger). The resulting [`MergedTable`](table::MergedTable)
//! is deduplicated by identifier and sorted, and derives filtered sub-tables.

pub mod record;
pub mod table;
