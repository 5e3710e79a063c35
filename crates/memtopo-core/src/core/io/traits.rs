use super::error::FormatError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// An identifier plus annotation string as read from a tool's output,
/// before any topology analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub protein_id: String,
    pub protein_name: Option<String>,
    pub annotation: String,
}

/// Defines the interface for reading one tool-specific output format.
///
/// Implementors only handle line-level parsing; analysis, merging and
/// output are left to the workflows.
pub trait RecordFormat {
    /// The record type produced for every entry in the file.
    type Record;

    /// Reads all records from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is empty, lacks required fields, or
    /// cannot be read. Individual malformed entries are skipped instead.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Self::Record>, FormatError>;

    /// Reads all records from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Self::Record>, FormatError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
