use super::error::FormatError;
use crate::core::models::record::SourceMeta;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

pub const META_ID_COLUMN: &str = "meta_id";
pub const TAX_ID_COLUMN: &str = "tax_id";

/// A header plus string rows, with no interpretation of the cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Reads a delimited table, discarding `skip_lines` lines before the header.
    pub fn read_from(
        reader: &mut impl BufRead,
        delimiter: u8,
        skip_lines: usize,
    ) -> Result<Self, FormatError> {
        let mut discarded = String::new();
        for _ in 0..skip_lines {
            discarded.clear();
            if reader.read_line(&mut discarded)? == 0 {
                return Err(FormatError::Empty);
            }
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(reader);
        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if headers.iter().all(String::is_empty) {
            return Err(FormatError::Empty);
        }

        let width = headers.len();
        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(width, String::new());
            rows.push(row);
        }
        Ok(Self { headers, rows })
    }

    pub fn read_from_path<P: AsRef<Path>>(
        path: P,
        delimiter: u8,
        skip_lines: usize,
    ) -> Result<Self, FormatError> {
        let file = File::open(path)?;
        Self::read_from(&mut BufReader::new(file), delimiter, skip_lines)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize, FormatError> {
        self.column_index(name)
            .ok_or_else(|| FormatError::MissingColumn {
                column: name.to_string(),
            })
    }

    /// Prepends `meta_id` and `tax_id` columns holding the same value on every row.
    pub fn with_source_columns(mut self, source: &SourceMeta) -> Self {
        self.headers
            .splice(0..0, [META_ID_COLUMN.to_string(), TAX_ID_COLUMN.to_string()]);
        for row in &mut self.rows {
            row.splice(0..0, [source.meta_id.clone(), source.tax_id.clone()]);
        }
        self
    }

    /// Rows whose `column` value satisfies `keep`, same header.
    pub fn filter_rows<P>(&self, column: &str, keep: P) -> Result<Table, FormatError>
    where
        P: Fn(&str) -> bool,
    {
        let index = self.require_column(column)?;
        Ok(Table {
            headers: self.headers.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| keep(row.get(index).map(String::as_str).unwrap_or_default()))
                .cloned()
                .collect(),
        })
    }

    /// Stacks tables, aligning columns by name. The result carries the union
    /// of headers in first-seen order; cells absent from a source are empty.
    pub fn concat<I>(tables: I) -> Table
    where
        I: IntoIterator<Item = Table>,
    {
        let mut merged = Table::default();
        for table in tables {
            let mapping: Vec<usize> = table
                .headers
                .iter()
                .map(|h| match merged.column_index(h) {
                    Some(i) => i,
                    None => {
                        merged.headers.push(h.clone());
                        merged.headers.len() - 1
                    }
                })
                .collect();
            let width = merged.headers.len();
            for row in &mut merged.rows {
                row.resize(width, String::new());
            }
            for row in table.rows {
                let mut aligned = vec![String::new(); width];
                for (cell, &target) in row.into_iter().zip(&mapping) {
                    aligned[target] = cell;
                }
                merged.rows.push(aligned);
            }
        }
        merged
    }

    pub fn write_to(&self, writer: impl Write, delimiter: u8) -> Result<(), FormatError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_writer(writer);
        csv_writer.write_record(&self.headers)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
