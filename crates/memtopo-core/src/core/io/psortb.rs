//! PSORTb long-format report parsing.
//!
//! The report is a sequence of free-text blocks, one per protein. The parser
//! is an explicit state machine; each trimmed line drives exactly one
//! transition in [`PsortbParser::feed`].

use super::error::FormatError;
use super::traits::RecordFormat;
use regex::Regex;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::sync::LazyLock;
use tracing::{debug, warn};

static SEQID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^SeqID:\s+(\S+)").unwrap());
static FINAL_PREDICTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*Final Prediction:$").unwrap());
static FINAL_PREDICTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\S+)\s+(\d+\.\d+)$").unwrap());
static SECONDARY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*Secondary localization\(s\):$").unwrap());
static SECONDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(\S+)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PsortbPrediction {
    pub protein_id: String,
    pub localization: String,
    /// Kept verbatim so the report's precision survives.
    pub score: String,
    pub secondary: Vec<String>,
}

#[derive(Debug, Serialize)]
struct PsortbRow<'a> {
    #[serde(rename = "Protein ID")]
    protein_id: &'a str,
    #[serde(rename = "Final Prediction")]
    final_prediction: &'a str,
    #[serde(rename = "Score")]
    score: &'a str,
    #[serde(rename = "Secondary Localization")]
    secondary_localization: String,
}

impl PsortbPrediction {
    /// Secondary localizations joined by `", "`, or `N/A` when there are none.
    pub fn secondary_label(&self) -> String {
        if self.secondary.is_empty() {
            "N/A".to_string()
        } else {
            self.secondary.join(", ")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    AwaitingRecord,
    InRecord,
    AwaitingPrediction,
    CollectingSecondary,
}

#[derive(Debug, Default)]
struct OpenRecord {
    protein_id: String,
    prediction: Option<(String, String)>,
    secondary: Vec<String>,
}

impl OpenRecord {
    fn close(self) -> Option<PsortbPrediction> {
        let Some((localization, score)) = self.prediction else {
            debug!("Dropping '{}': no final prediction.", self.protein_id);
            return None;
        };
        Some(PsortbPrediction {
            protein_id: self.protein_id,
            localization,
            score,
            secondary: self.secondary,
        })
    }
}

pub struct PsortbParser {
    state: ParserState,
    open: Option<OpenRecord>,
    completed: Vec<PsortbPrediction>,
}

impl Default for PsortbParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PsortbParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::AwaitingRecord,
            open: None,
            completed: Vec::new(),
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn feed(&mut self, raw_line: &str) {
        let line = raw_line.trim();

        if let Some(caps) = SEQID.captures(line) {
            self.flush();
            self.open = Some(OpenRecord {
                protein_id: caps[1].to_string(),
                ..Default::default()
            });
            self.state = ParserState::InRecord;
            return;
        }

        self.state = match self.state {
            ParserState::AwaitingRecord => ParserState::AwaitingRecord,
            ParserState::InRecord => self.on_record_line(line),
            ParserState::AwaitingPrediction => {
                match (FINAL_PREDICTION.captures(line), self.open.as_mut()) {
                    (Some(caps), Some(open)) => {
                        open.prediction = Some((caps[1].to_string(), caps[2].to_string()));
                    }
                    _ => warn!("No valid final prediction found in line: '{}'", line),
                }
                ParserState::InRecord
            }
            ParserState::CollectingSecondary => match SECONDARY.captures(line) {
                Some(caps) => {
                    if let Some(open) = self.open.as_mut() {
                        open.secondary.push(caps[1].to_string());
                    }
                    ParserState::CollectingSecondary
                }
                // The terminating line is still an ordinary record line.
                None => self.on_record_line(line),
            },
        };
    }

    fn on_record_line(&self, line: &str) -> ParserState {
        if FINAL_PREDICTION_HEADER.is_match(line) {
            ParserState::AwaitingPrediction
        } else if SECONDARY_HEADER.is_match(line) {
            ParserState::CollectingSecondary
        } else {
            ParserState::InRecord
        }
    }

    fn flush(&mut self) {
        if let Some(record) = self.open.take().and_then(OpenRecord::close) {
            self.completed.push(record);
        }
    }

    pub fn finish(mut self) -> Vec<PsortbPrediction> {
        self.flush();
        self.completed
    }
}

pub struct PsortbReport;

impl RecordFormat for PsortbReport {
    type Record = PsortbPrediction;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<PsortbPrediction>, FormatError> {
        let mut parser = PsortbParser::new();
        let mut saw_content = false;
        for line in reader.lines() {
            let line = line?;
            saw_content |= !line.trim().is_empty();
            parser.feed(&line);
        }
        if !saw_content {
            return Err(FormatError::Empty);
        }
        Ok(parser.finish())
    }
}

/// Writes predictions as a tab-delimited table with a header row.
pub fn write_predictions(
    predictions: &[PsortbPrediction],
    writer: impl Write,
) -> Result<(), FormatError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record([
        "Protein ID",
        "Final Prediction",
        "Score",
        "Secondary Localization",
    ])?;
    for prediction in predictions {
        csv_writer.serialize(PsortbRow {
            protein_id: &prediction.protein_id,
            final_prediction: &prediction.localization,
            score: &prediction.score,
            secondary_localization: prediction.secondary_label(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const REPORT: &str = "\
SeqID: prot_1 some description
  Analysis Report:
    CMSVM-            Unknown                       [No details]
  Localization Scores:
    Cytoplasmic            9.97
    Extracellular          0.00
  Final Prediction:
    Cytoplasmic            9.97

-------------------------------------------------------------------------------

SeqID: prot_2
  Final Prediction:
    Unknown
  Secondary localization(s):
    Periplasmic
-------------------------------------------------------------------------------
SeqID: prot_3
  Final Prediction:
    OuterMembrane          10.00
  Secondary localization(s):
    Extracellular
    Periplasmic

-------------------------------------------------------------------------------
";

    fn read(content: &str) -> Result<Vec<PsortbPrediction>, FormatError> {
        PsortbReport::read_from(&mut Cursor::new(content.as_bytes()))
    }

    #[test]
    fn parses_final_and_secondary_localizations() {
        let predictions = read(REPORT).unwrap();

        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions[0].protein_id, "prot_1");
        assert_eq!(predictions[0].localization, "Cytoplasmic");
        assert_eq!(predictions[0].score, "9.97");
        assert_eq!(predictions[0].secondary_label(), "N/A");

        assert_eq!(predictions[1].protein_id, "prot_3");
        assert_eq!(predictions[1].score, "10.00");
        assert_eq!(
            predictions[1].secondary,
            vec!["Extracellular".to_string(), "Periplasmic".to_string()]
        );
        assert_eq!(predictions[1].secondary_label(), "Extracellular, Periplasmic");
    }

    #[test]
    fn record_without_final_prediction_is_dropped() {
        let predictions = read("SeqID: lonely\n  Final Prediction:\n    garbage line here\n").unwrap();
        assert!(predictions.is_empty());
    }

    #[test]
    fn state_machine_walks_through_named_states() {
        let mut parser = PsortbParser::new();
        assert_eq!(parser.state(), ParserState::AwaitingRecord);
        parser.feed("preamble text");
        assert_eq!(parser.state(), ParserState::AwaitingRecord);
        parser.feed("SeqID: x1");
        assert_eq!(parser.state(), ParserState::InRecord);
        parser.feed("  Final Prediction:");
        assert_eq!(parser.state(), ParserState::AwaitingPrediction);
        parser.feed("    Cytoplasmic   8.50");
        assert_eq!(parser.state(), ParserState::InRecord);
        parser.feed("  Secondary localization(s):");
        assert_eq!(parser.state(), ParserState::CollectingSecondary);
        parser.feed("    Periplasmic");
        assert_eq!(parser.state(), ParserState::CollectingSecondary);
        parser.feed("----- ----");
        assert_eq!(parser.state(), ParserState::InRecord);

        let predictions = parser.finish();
        assert_eq!(predictions[0].secondary, vec!["Periplasmic".to_string()]);
    }

    #[test]
    fn empty_report_is_rejected() {
        assert!(matches!(read("\n \n"), Err(FormatError::Empty)));
    }

    #[test]
    fn writes_tab_delimited_table_with_header() {
        let predictions = read(REPORT).unwrap();
        let mut buffer = Vec::new();
        write_predictions(&predictions, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Protein ID\tFinal Prediction\tScore\tSecondary Localization"
        );
        assert_eq!(lines[1], "prot_1\tCytoplasmic\t9.97\tN/A");
        assert_eq!(lines[2], "prot_3\tOuterMembrane\t10.00\tExtracellular, Periplasmic");
    }
}
