use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Delimited text error: {0}")]
    Csv(#[from] csv::Error),
    #[error("File is empty")]
    Empty,
    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseErrorKind {
    #[error("annotation data appears before any '>' header")]
    OrphanAnnotation,
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("invalid number '{value}' in column '{column}'")]
    InvalidNumber { column: String, value: String },
}
