use super::error::{FormatError, ParseErrorKind};
use super::layout::{FieldLayout, LogicalField};
use super::traits::{ParsedEntry, RecordFormat};
use crate::core::models::record::HelixCounts;
use std::collections::HashMap;
use std::io::BufRead;
use tracing::debug;

const UNKNOWN_NAME: &str = "unknown";

/// FASTA-like TMHMM `.annotation` file: a `>ID description` header followed
/// by one or more lines of per-residue labels.
pub struct TmhmmAnnotation;

impl RecordFormat for TmhmmAnnotation {
    type Record = ParsedEntry;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<ParsedEntry>, FormatError> {
        let mut entries = Vec::new();
        let mut current: Option<ParsedEntry> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('>') {
                entries.extend(current.take());
                let (protein_id, protein_name) = match header.split_once(' ') {
                    Some((id, name)) => (id, name),
                    None => (header, UNKNOWN_NAME),
                };
                current = Some(ParsedEntry {
                    protein_id: protein_id.to_string(),
                    protein_name: Some(protein_name.to_string()),
                    annotation: String::new(),
                });
                continue;
            }

            match current.as_mut() {
                Some(entry) => entry.annotation.push_str(line),
                None => {
                    return Err(FormatError::Parse {
                        line: line_num + 1,
                        kind: ParseErrorKind::OrphanAnnotation,
                    });
                }
            }
        }
        entries.extend(current);

        if entries.is_empty() {
            return Err(FormatError::Empty);
        }
        Ok(entries)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryField {
    ProteinId,
    PredHel,
    Tm60,
}

impl LogicalField for SummaryField {
    const ALL: &'static [Self] = &[Self::ProteinId, Self::PredHel, Self::Tm60];

    fn column(self) -> &'static str {
        match self {
            Self::ProteinId => "protein_ID",
            Self::PredHel => "PredHel",
            Self::Tm60 => "TM_60",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub protein_id: String,
    pub helices: HelixCounts,
}

/// Headerless, tab-delimited TMHMM summary: `protein_ID  PredHel  TM_60`.
pub struct TmhmmSummary;

impl TmhmmSummary {
    /// Reads a summary file into an id-keyed lookup. The first row for a
    /// protein wins, as it does across summary files and in the merged table.
    pub fn read_map(reader: &mut impl BufRead) -> Result<HashMap<String, HelixCounts>, FormatError> {
        let mut map = HashMap::new();
        for row in Self::read_from(reader)? {
            map.entry(row.protein_id).or_insert(row.helices);
        }
        Ok(map)
    }
}

impl RecordFormat for TmhmmSummary {
    type Record = SummaryRow;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<SummaryRow>, FormatError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let layout = FieldLayout::<SummaryField>::positional();

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let Some(protein_id) = layout.get(&record, SummaryField::ProteinId) else {
                continue;
            };
            rows.push(SummaryRow {
                protein_id: protein_id.to_string(),
                helices: HelixCounts {
                    pred_hel: coerce_count(layout.get(&record, SummaryField::PredHel)),
                    tm_60: coerce_count(layout.get(&record, SummaryField::Tm60)),
                },
            });
        }
        Ok(rows)
    }
}

/// Lenient numeric coercion: accepts `7`, `7.9` (truncated) and the
/// `PredHel=7` style of TMHMM's short output. Anything else counts as 0.
pub fn coerce_count(value: Option<&str>) -> i64 {
    let Some(raw) = value else {
        return 0;
    };
    let token = raw.rsplit_once('=').map_or(raw, |(_, v)| v).trim();
    if let Ok(n) = token.parse::<i64>() {
        return n;
    }
    match token.parse::<f64>() {
        Ok(x) if x.is_finite() => x.trunc() as i64,
        _ => {
            debug!("Coercing non-numeric value '{}' to 0.", raw);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn annotations(content: &str) -> Result<Vec<ParsedEntry>, FormatError> {
        TmhmmAnnotation::read_from(&mut Cursor::new(content.as_bytes()))
    }

    #[test]
    fn annotation_blocks_concatenate_lines() {
        let entries = annotations(
            ">sp|P1| Outer membrane protein\n\
             iiiiMMMMMM\n\
             MMMMoooo\n\
             \n\
             >P2\n\
             oooooo\n",
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].protein_id, "sp|P1|");
        assert_eq!(
            entries[0].protein_name.as_deref(),
            Some("Outer membrane protein")
        );
        assert_eq!(entries[0].annotation, "iiiiMMMMMMMMMMoooo");
        assert_eq!(entries[1].protein_name.as_deref(), Some("unknown"));
        assert_eq!(entries[1].annotation, "oooooo");
    }

    #[test]
    fn header_without_annotation_yields_empty_annotation() {
        let entries = annotations(">P1 x\n>P2 y\nii\n").unwrap();
        assert_eq!(entries[0].annotation, "");
        assert_eq!(entries[1].annotation, "ii");
    }

    #[test]
    fn annotation_before_header_is_a_parse_error() {
        let result = annotations("iiii\n>P1\nii\n");
        assert!(matches!(
            result,
            Err(FormatError::Parse {
                line: 1,
                kind: ParseErrorKind::OrphanAnnotation
            })
        ));
    }

    #[test]
    fn empty_annotation_file_is_rejected() {
        assert!(matches!(annotations("\n\n"), Err(FormatError::Empty)));
    }

    #[test]
    fn summary_rows_coerce_numbers() {
        let map = TmhmmSummary::read_map(&mut Cursor::new(
            "P1\t2\t18\nP2\tPredHel=1\tnan\nP3\tabc\t3.7\n".as_bytes(),
        ))
        .unwrap();
        assert_eq!(map["P1"], HelixCounts { pred_hel: 2, tm_60: 18 });
        assert_eq!(map["P2"], HelixCounts { pred_hel: 1, tm_60: 0 });
        assert_eq!(map["P3"], HelixCounts { pred_hel: 0, tm_60: 3 });
    }

    #[test]
    fn repeated_summary_rows_keep_the_first() {
        let map = TmhmmSummary::read_map(&mut Cursor::new(
            "P1\t2\t18\nP1\t0\t0\n".as_bytes(),
        ))
        .unwrap();
        assert_eq!(map["P1"], HelixCounts { pred_hel: 2, tm_60: 18 });
    }

    #[test]
    fn summary_short_rows_default_to_zero() {
        let rows = TmhmmSummary::read_from(&mut Cursor::new("P9\n".as_bytes())).unwrap();
        assert_eq!(rows[0].helices, HelixCounts::default());
    }

    #[test]
    fn coerce_count_handles_missing_values() {
        assert_eq!(coerce_count(None), 0);
        assert_eq!(coerce_count(Some("-")), 0);
        assert_eq!(coerce_count(Some(" 4 ")), 4);
    }
}
