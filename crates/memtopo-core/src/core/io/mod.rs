//! Readers and writers for the file formats of the supported prediction tools.
//!
//! Each input format implements [`traits::RecordFormat`], turning a reader
//! into a list of tool-specific records. Merged results are written back as
//! tab-delimited tables described by a [`writer::TableSchema`], and the
//! derived output paths are named by [`paths`].

pub mod boctopus2;
pub mod error;
pub mod layout;
pub mod paths;
pub mod psortb;
pub mod signalp;
pub mod tabular;
pub mod tmhmm;
pub mod traits;
pub mod writer;
