use super::error::FormatError;
use super::layout::{FieldLayout, LogicalField};
use super::traits::{ParsedEntry, RecordFormat};
use std::io::BufRead;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boctopus2Field {
    ProteinId,
    ProteinName,
    ProteinTopology,
}

impl LogicalField for Boctopus2Field {
    const ALL: &'static [Self] = &[Self::ProteinId, Self::ProteinName, Self::ProteinTopology];

    fn column(self) -> &'static str {
        match self {
            Self::ProteinId => "protein_id",
            Self::ProteinName => "protein_name",
            Self::ProteinTopology => "protein_topology",
        }
    }

    fn required(self) -> bool {
        !matches!(self, Self::ProteinName)
    }
}

/// Tab-delimited BOCTOPUS2 result table with a header row.
///
/// Rows without an identifier are skipped. Rows with a blank topology are
/// kept with an empty annotation so the caller can report and drop them.
pub struct Boctopus2Table;

impl RecordFormat for Boctopus2Table {
    type Record = ParsedEntry;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<ParsedEntry>, FormatError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(FormatError::Empty);
        }
        let layout = FieldLayout::<Boctopus2Field>::resolve(headers.iter())?;

        let mut entries = Vec::new();
        for (row, result) in csv_reader.records().enumerate() {
            let record = result?;
            let Some(protein_id) = layout.get(&record, Boctopus2Field::ProteinId) else {
                warn!("Skipping row {} without a protein_id.", row + 2);
                continue;
            };
            entries.push(ParsedEntry {
                protein_id: protein_id.to_string(),
                protein_name: layout
                    .get(&record, Boctopus2Field::ProteinName)
                    .map(str::to_string),
                annotation: layout
                    .get(&record, Boctopus2Field::ProteinTopology)
                    .unwrap_or_default()
                    .to_string(),
            });
        }
        Ok(entries)
    }
}
