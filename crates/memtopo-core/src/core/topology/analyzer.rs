use super::alphabet::AlphabetConfig;
use super::metrics::{ClassMetric, TopologyMetrics, round3, safe_proportion};
use crate::engine::config::StrandCriteria;
use std::fmt::Write;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AnalysisError {
    #[error("annotation string is empty")]
    Empty,
    #[error("symbol '{symbol}' at position {position} is not part of the '{alphabet}' alphabet")]
    UnknownSymbol {
        alphabet: String,
        symbol: char,
        position: usize,
    },
}

/// A maximal run of transmembrane residues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Residue offset of the first symbol in the run.
    pub start: usize,
    pub length: usize,
    /// Adjacent pairs inside the run whose symbols differ.
    pub transitions: usize,
}

impl Segment {
    /// Fraction of adjacent pairs that differ; 0 for a single-residue run.
    pub fn alternation_ratio(&self) -> f64 {
        safe_proportion(self.transitions, self.length.saturating_sub(1))
    }

    pub fn is_strand(&self, criteria: &StrandCriteria) -> bool {
        self.length >= criteria.min_segment_length
            && self.alternation_ratio() >= criteria.min_alternation_ratio
    }
}

#[derive(Default)]
struct SegmentScanner {
    segments: Vec<Segment>,
    open: Option<(Segment, char)>,
}

impl SegmentScanner {
    fn push(&mut self, position: usize, symbol: char, membrane: bool) {
        if !membrane {
            self.close();
            return;
        }
        match &mut self.open {
            Some((segment, last)) => {
                segment.length += 1;
                if *last != symbol {
                    segment.transitions += 1;
                }
                *last = symbol;
            }
            None => {
                self.open = Some((
                    Segment {
                        start: position,
                        length: 1,
                        transitions: 0,
                    },
                    symbol,
                ));
            }
        }
    }

    fn close(&mut self) {
        if let Some((segment, _)) = self.open.take() {
            self.segments.push(segment);
        }
    }

    fn finish(mut self) -> Vec<Segment> {
        self.close();
        self.segments
    }
}

/// Extracts the maximal transmembrane runs of an annotation string.
///
/// Symbols outside the alphabet end any open run and are otherwise ignored.
pub fn transmembrane_segments(annotation: &str, alphabet: &AlphabetConfig) -> Vec<Segment> {
    let mut scanner = SegmentScanner::default();
    for (position, symbol) in annotation.chars().enumerate() {
        let membrane = alphabet
            .class_of(symbol)
            .is_some_and(|class| alphabet.is_membrane(class));
        scanner.push(position, symbol, membrane);
    }
    scanner.finish()
}

/// Computes counts, proportions, segmentation and the strand-based
/// classification of one annotation string in a single pass.
pub fn analyze(
    annotation: &str,
    alphabet: &AlphabetConfig,
    criteria: &StrandCriteria,
) -> Result<TopologyMetrics, AnalysisError> {
    let annotation = annotation.trim();
    if annotation.is_empty() {
        return Err(AnalysisError::Empty);
    }

    let classes = alphabet.classes();
    let mut counts = vec![0usize; classes.len()];
    let mut scanner = SegmentScanner::default();
    let mut length = 0usize;

    for (position, symbol) in annotation.chars().enumerate() {
        let class = alphabet
            .class_of(symbol)
            .ok_or_else(|| AnalysisError::UnknownSymbol {
                alphabet: alphabet.name().to_string(),
                symbol,
                position,
            })?;
        counts[class] += 1;
        scanner.push(position, symbol, classes[class].membrane);
        length += 1;
    }
    let segments = scanner.finish();

    let membrane_residues: usize = classes
        .iter()
        .zip(&counts)
        .filter(|(class, _)| class.membrane)
        .map(|(_, &count)| count)
        .sum();
    let strands = segments.iter().filter(|s| s.is_strand(criteria)).count();

    let class_counts = classes
        .iter()
        .zip(&counts)
        .map(|(class, &count)| ClassMetric {
            key: class.key.clone(),
            count,
            proportion: round3(safe_proportion(count, length)),
        })
        .collect();

    let mut summary = String::new();
    for (class, &count) in classes.iter().zip(&counts) {
        if !class.membrane {
            let _ = write!(
                summary,
                "{}: {:.2}, ",
                class.label,
                safe_proportion(count, length)
            );
        }
    }
    let _ = write!(
        summary,
        "Membrane: {:.2}, Strands: {}",
        safe_proportion(membrane_residues, length),
        strands
    );

    Ok(TopologyMetrics {
        length,
        class_counts,
        membrane_residues,
        membrane_prop: round3(safe_proportion(membrane_residues, length)),
        tm_segments: segments.len(),
        strands,
        is_classified: strands >= criteria.min_strand_count,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boctopus(annotation: &str) -> TopologyMetrics {
        analyze(
            annotation,
            &AlphabetConfig::boctopus2(),
            &StrandCriteria::default(),
        )
        .unwrap()
    }

    fn barrel_with_strands(n: usize) -> String {
        let mut topology = String::from("II");
        for _ in 0..n {
            topology.push_str("ioioio");
            topology.push('O');
        }
        topology
    }

    #[test]
    fn all_inner_string_has_no_membrane_or_strands() {
        let metrics = boctopus("IIIIIIIIII");
        assert_eq!(metrics.length, 10);
        assert_eq!(metrics.count("inner"), Some(10));
        assert_eq!(metrics.count("outer"), Some(0));
        assert_eq!(metrics.count("pore_facing"), Some(0));
        assert_eq!(metrics.count("lipid_facing"), Some(0));
        assert_eq!(metrics.membrane_residues, 0);
        assert_eq!(metrics.membrane_prop, 0.0);
        assert_eq!(metrics.tm_segments, 0);
        assert_eq!(metrics.strands, 0);
        assert!(!metrics.is_classified);
    }

    #[test]
    fn eight_alternating_segments_classify_as_barrel() {
        let metrics = boctopus(&barrel_with_strands(8));
        assert_eq!(metrics.tm_segments, 8);
        assert_eq!(metrics.strands, 8);
        assert!(metrics.is_classified);
    }

    #[test]
    fn seven_alternating_segments_fall_short() {
        let metrics = boctopus(&barrel_with_strands(7));
        assert_eq!(metrics.strands, 7);
        assert!(!metrics.is_classified);
    }

    #[test]
    fn proportions_sum_to_one_within_rounding() {
        for annotation in ["IIOOio", "IOioIOioOOOiii", "ioIOOOOOOIIIIo", "O"] {
            let metrics = boctopus(annotation);
            let total: f64 = metrics.class_counts.iter().map(|c| c.proportion).sum();
            let tolerance = 0.001 * metrics.class_counts.len() as f64;
            assert!((total - 1.0).abs() <= tolerance, "{annotation}: {total}");
        }
    }

    #[test]
    fn single_character_string_has_no_segments_when_not_membrane() {
        let metrics = boctopus("O");
        assert_eq!(metrics.tm_segments, 0);
        assert_eq!(metrics.strands, 0);
    }

    #[test]
    fn short_segments_never_count_as_strands() {
        // Four residues, perfectly alternating, still below the length cut-off.
        let metrics = boctopus("IioioI");
        assert_eq!(metrics.tm_segments, 1);
        assert_eq!(metrics.strands, 0);
    }

    #[test]
    fn alternation_ratio_at_threshold_counts_as_strand() {
        // 6 of 10 adjacent pairs differ.
        let segment = "iiiiioioioi";
        let found = transmembrane_segments(segment, &AlphabetConfig::boctopus2());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].length, 11);
        assert_eq!(found[0].transitions, 6);
        assert_eq!(found[0].alternation_ratio(), 0.6);
        assert!(found[0].is_strand(&StrandCriteria::default()));
    }

    #[test]
    fn low_alternation_segment_is_not_a_strand() {
        let found = transmembrane_segments("IiiiiiiiiiO", &AlphabetConfig::boctopus2());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].alternation_ratio(), 0.0);
        assert!(!found[0].is_strand(&StrandCriteria::default()));
    }

    #[test]
    fn segments_record_their_offsets() {
        let found = transmembrane_segments("IioIIoiO", &AlphabetConfig::boctopus2());
        assert_eq!(
            found,
            vec![
                Segment {
                    start: 1,
                    length: 2,
                    transitions: 1
                },
                Segment {
                    start: 5,
                    length: 2,
                    transitions: 1
                },
            ]
        );
    }

    #[test]
    fn summary_interpolates_non_membrane_classes_and_strands() {
        let metrics = boctopus("IIOOio");
        assert_eq!(
            metrics.summary,
            "Inner: 0.33, Outer: 0.33, Membrane: 0.33, Strands: 0"
        );
        assert_eq!(metrics.proportion("inner"), Some(0.333));
        assert_eq!(metrics.membrane_prop, 0.333);
        assert_eq!(metrics.membrane_residues, 2);
    }

    #[test]
    fn tmhmm_alphabet_counts_case_insensitively() {
        let metrics = analyze(
            "iiiMMMMmmmooOO",
            &AlphabetConfig::tmhmm(),
            &StrandCriteria::default(),
        )
        .unwrap();
        assert_eq!(metrics.count("inside"), Some(3));
        assert_eq!(metrics.count("membrane"), Some(7));
        assert_eq!(metrics.count("outside"), Some(4));
        assert_eq!(metrics.membrane_prop, 0.5);
        assert_eq!(metrics.tm_segments, 1);
        assert_eq!(metrics.strands, 0);
    }

    #[test]
    fn empty_annotation_is_rejected() {
        let result = analyze("   ", &AlphabetConfig::boctopus2(), &StrandCriteria::default());
        assert_eq!(result, Err(AnalysisError::Empty));
    }

    #[test]
    fn unknown_symbol_is_rejected_with_position() {
        let result = analyze("IIxO", &AlphabetConfig::boctopus2(), &StrandCriteria::default());
        assert_eq!(
            result,
            Err(AnalysisError::UnknownSymbol {
                alphabet: "boctopus2".to_string(),
                symbol: 'x',
                position: 2,
            })
        );
    }

    #[test]
    fn custom_criteria_change_classification() {
        let criteria = StrandCriteria {
            min_segment_length: 5,
            min_alternation_ratio: 0.6,
            min_strand_count: 2,
        };
        let metrics = analyze(
            &barrel_with_strands(2),
            &AlphabetConfig::boctopus2(),
            &criteria,
        )
        .unwrap();
        assert!(metrics.is_classified);
    }
}
