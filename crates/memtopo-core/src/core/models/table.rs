use super::record::ProteinRecord;
use crate::engine::error::EngineError;
use std::collections::HashSet;
use tracing::debug;

/// Records keyed by `protein_id`, deduplicated and sorted ascending by id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MergedTable {
    records: Vec<ProteinRecord>,
}

impl MergedTable {
    /// Merges per-file record batches given in input order.
    ///
    /// Returns [`EngineError::NoData`] when the batches hold no record at all.
    pub fn merge<I>(batches: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = Vec<ProteinRecord>>,
    {
        let mut merger = Merger::new();
        for batch in batches {
            merger.push_file(batch);
        }
        merger.finish()
    }

    pub fn records(&self) -> &[ProteinRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.protein_id.as_str())
    }

    pub fn get(&self, protein_id: &str) -> Option<&ProteinRecord> {
        self.records
            .binary_search_by(|r| r.protein_id.as_str().cmp(protein_id))
            .ok()
            .map(|i| &self.records[i])
    }

    /// Sub-table of the records matching `predicate`, in the parent's order.
    pub fn partition<P>(&self, predicate: P) -> MergedTable
    where
        P: Fn(&ProteinRecord) -> bool,
    {
        MergedTable {
            records: self
                .records
                .iter()
                .filter(|r| predicate(r))
                .cloned()
                .collect(),
        }
    }
}

/// Single-writer accumulator behind [`MergedTable::merge`].
///
/// Batches must be pushed in input-file order: the first occurrence of a
/// `protein_id` wins and later ones are dropped whole.
#[derive(Debug, Default)]
pub struct Merger {
    records: Vec<ProteinRecord>,
    seen: HashSet<String>,
    files: usize,
    skipped: usize,
    duplicates: usize,
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_file(&mut self, batch: Vec<ProteinRecord>) {
        self.files += 1;
        for record in batch {
            if self.seen.contains(&record.protein_id) {
                debug!("Dropping duplicate record for '{}'.", record.protein_id);
                self.duplicates += 1;
                continue;
            }
            self.seen.insert(record.protein_id.clone());
            self.records.push(record);
        }
    }

    /// Records an input file that was rejected before any of its records
    /// could be pushed.
    pub fn skip_file(&mut self) {
        self.skipped += 1;
    }

    pub fn files(&self) -> usize {
        self.files
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Sorts the accumulated records. Fails with [`EngineError::NoData`]
    /// when no record survived, whether the inputs were unreadable or only
    /// held unusable rows.
    pub fn finish(self) -> Result<MergedTable, EngineError> {
        if self.records.is_empty() {
            return Err(EngineError::NoData {
                inputs: self.files + self.skipped,
            });
        }
        let mut records = self.records;
        records.sort_by(|a, b| a.protein_id.cmp(&b.protein_id));
        debug!(
            "Merged {} file(s) into {} unique record(s), {} duplicate(s) dropped.",
            self.files,
            records.len(),
            self.duplicates
        );
        Ok(MergedTable { records })
    }
}
