use super::error::{FormatError, ParseErrorKind};
use super::traits::RecordFormat;
use std::io::BufRead;

const NAME_PREFIX: &str = "# Name=";
const HEADER_PREFIX: &str = "# pos";
/// Leading columns (`pos`, `aa`, and the first label) that are not probabilities.
const LEADING_COLUMNS: usize = 3;

/// The per-residue probability table SignalP writes for a single protein.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueReport {
    pub protein_id: String,
    pub protein_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Per-column counts of residues above a probability threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueCounts {
    pub protein_id: String,
    pub protein_name: String,
    pub columns: Vec<String>,
    pub counts: Vec<usize>,
}

impl ResidueReport {
    /// Names of the probability columns.
    pub fn value_columns(&self) -> &[String] {
        self.columns.get(LEADING_COLUMNS..).unwrap_or_default()
    }

    /// Counts, per probability column, the residues whose value is strictly
    /// greater than `threshold`.
    pub fn summarise(&self, threshold: f64) -> Result<ResidueCounts, FormatError> {
        let value_columns = self.value_columns();
        let mut counts = vec![0usize; value_columns.len()];
        for (row_index, row) in self.rows.iter().enumerate() {
            for (slot, (column, raw)) in value_columns
                .iter()
                .zip(row.iter().skip(LEADING_COLUMNS))
                .enumerate()
            {
                let value: f64 = raw.trim().parse().map_err(|_| FormatError::Parse {
                    line: row_index + 1,
                    kind: ParseErrorKind::InvalidNumber {
                        column: column.clone(),
                        value: raw.clone(),
                    },
                })?;
                if value > threshold {
                    counts[slot] += 1;
                }
            }
        }
        Ok(ResidueCounts {
            protein_id: self.protein_id.clone(),
            protein_name: self.protein_name.clone(),
            columns: value_columns.to_vec(),
            counts,
        })
    }
}

/// Reader for one SignalP per-residue output file.
///
/// `# Name=` names the protein, `# pos` carries the column header, other
/// `#` lines are ignored and the remaining non-blank lines are data.
pub struct SignalpResidues;

impl RecordFormat for SignalpResidues {
    type Record = ResidueReport;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<ResidueReport>, FormatError> {
        let mut identity: Option<(String, String)> = None;
        let mut columns: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            if let Some(info) = line.strip_prefix(NAME_PREFIX) {
                let info = info.trim();
                identity = Some(match info.split_once(' ') {
                    Some((id, name)) => (id.to_string(), name.to_string()),
                    None => (info.to_string(), String::new()),
                });
            } else if line.starts_with(HEADER_PREFIX) {
                columns = Some(line.trim().split('\t').map(str::to_string).collect());
            } else if !line.starts_with('#') && !line.trim().is_empty() {
                let fields: Vec<String> = line.trim().split('\t').map(str::to_string).collect();
                if let Some(header) = &columns {
                    if header.len() != fields.len() {
                        return Err(FormatError::Parse {
                            line: line_num + 1,
                            kind: ParseErrorKind::FieldCount {
                                expected: header.len(),
                                found: fields.len(),
                            },
                        });
                    }
                }
                rows.push(fields);
            }
        }

        let columns = columns.ok_or_else(|| FormatError::MissingRecord(HEADER_PREFIX.into()))?;
        if rows.is_empty() {
            return Err(FormatError::Empty);
        }
        let (protein_id, protein_name) =
            identity.ok_or_else(|| FormatError::MissingRecord(NAME_PREFIX.into()))?;

        Ok(vec![ResidueReport {
            protein_id,
            protein_name,
            columns,
            rows,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const REPORT: &str = "\
# SignalP-6.0\tOrganism: Other\tTimestamp: 20240101
# Name=P1 Outer membrane protein A
# pos\taa\tlabel\tSP\tLIPO\tOTHER
1\tM\tS\t0.91\t0.02\t0.07
2\tK\tS\t0.88\t0.01\t0.11
3\tK\tO\t0.20\t0.00\t0.80
";

    fn read(content: &str) -> Result<Vec<ResidueReport>, FormatError> {
        SignalpResidues::read_from(&mut Cursor::new(content.as_bytes()))
    }

    #[test]
    fn reads_identity_header_and_rows() {
        let report = read(REPORT).unwrap().remove(0);
        assert_eq!(report.protein_id, "P1");
        assert_eq!(report.protein_name, "Outer membrane protein A");
        assert_eq!(report.columns[0], "# pos");
        assert_eq!(report.value_columns(), ["SP", "LIPO", "OTHER"]);
        assert_eq!(report.rows.len(), 3);
    }

    #[test]
    fn summarise_counts_values_strictly_above_threshold() {
        let report = read(REPORT).unwrap().remove(0);
        let counts = report.summarise(0.5).unwrap();
        assert_eq!(counts.counts, vec![2, 0, 1]);

        let strict = report.summarise(0.91).unwrap();
        assert_eq!(strict.counts, vec![0, 0, 0]);
    }

    #[test]
    fn name_without_description_gives_empty_name() {
        let content = REPORT.replace("# Name=P1 Outer membrane protein A", "# Name=P1");
        let report = read(&content).unwrap().remove(0);
        assert_eq!(report.protein_name, "");
    }

    #[test]
    fn missing_header_is_rejected() {
        let result = read("# Name=P1\n1\tM\tS\t0.9\n");
        assert!(matches!(result, Err(FormatError::MissingRecord(_))));
    }

    #[test]
    fn header_without_rows_is_empty() {
        let result = read("# Name=P1\n# pos\taa\tlabel\tSP\n");
        assert!(matches!(result, Err(FormatError::Empty)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let result = read("# Name=P1\n# pos\taa\tlabel\tSP\n1\tM\tS\n");
        assert!(matches!(
            result,
            Err(FormatError::Parse {
                kind: ParseErrorKind::FieldCount {
                    expected: 4,
                    found: 3
                },
                ..
            })
        ));
    }

    #[test]
    fn non_numeric_probability_fails_summary() {
        let report = read("# Name=P1\n# pos\taa\tlabel\tSP\n1\tM\tS\tx\n")
            .unwrap()
            .remove(0);
        assert!(matches!(
            report.summarise(0.5),
            Err(FormatError::Parse { .. })
        ));
    }
}
