/// Fraction of `count` over `total`, defined as 0 for an empty total.
#[inline]
pub fn safe_proportion(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Rounds to 3 decimal places the way Python's `round(x, 3)` does: the exact
/// binary value is rounded and exact ties go to the even digit, so `0.0625`
/// becomes `0.062`. Exact float formatting already follows that rule.
pub fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassMetric {
    pub key: String,
    pub count: usize,
    pub proportion: f64,
}

/// Summary statistics of one annotation string. Proportions are rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyMetrics {
    pub length: usize,
    pub class_counts: Vec<ClassMetric>,
    pub membrane_residues: usize,
    pub membrane_prop: f64,
    pub tm_segments: usize,
    pub strands: usize,
    pub is_classified: bool,
    pub summary: String,
}

impl TopologyMetrics {
    pub fn class(&self, key: &str) -> Option<&ClassMetric> {
        self.class_counts.iter().find(|c| c.key == key)
    }

    pub fn count(&self, key: &str) -> Option<usize> {
        self.class(key).map(|c| c.count)
    }

    pub fn proportion(&self, key: &str) -> Option<f64> {
        self.class(key).map(|c| c.proportion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_proportion_is_zero_for_empty_total() {
        assert_eq!(safe_proportion(0, 0), 0.0);
        assert_eq!(safe_proportion(5, 0), 0.0);
    }

    #[test]
    fn safe_proportion_divides_otherwise() {
        assert_eq!(safe_proportion(1, 4), 0.25);
        assert_eq!(safe_proportion(3, 3), 1.0);
    }

    #[test]
    fn round3_keeps_three_decimals() {
        assert_eq!(round3(1.0 / 3.0), 0.333);
        assert_eq!(round3(2.0 / 3.0), 0.667);
        assert_eq!(round3(0.0), 0.0);
        assert_eq!(round3(1.2344), 1.234);
        assert_eq!(round3(0.9999), 1.0);
    }

    #[test]
    fn round3_sends_exact_ties_to_even() {
        assert_eq!(round3(0.0625), 0.062);
        assert_eq!(round3(0.1875), 0.188);
        assert_eq!(round3(0.4375), 0.438);
        assert_eq!(round3(0.3125), 0.312);
    }

    #[test]
    fn round3_does_not_round_up_below_a_tie() {
        // 1.0005 is stored slightly below the midpoint.
        assert_eq!(round3(1.0005), 1.0);
        assert_eq!(round3(5.0 / 8.0), 0.625);
    }

    #[test]
    fn lookup_by_class_key() {
        let metrics = TopologyMetrics {
            length: 4,
            class_counts: vec![
                ClassMetric {
                    key: "inside".to_string(),
                    count: 3,
                    proportion: 0.75,
                },
                ClassMetric {
                    key: "membrane".to_string(),
                    count: 1,
                    proportion: 0.25,
                },
            ],
            membrane_residues: 1,
            membrane_prop: 0.25,
            tm_segments: 1,
            strands: 0,
            is_classified: false,
            summary: String::new(),
        };
        assert_eq!(metrics.count("inside"), Some(3));
        assert_eq!(metrics.proportion("membrane"), Some(0.25));
        assert_eq!(metrics.count("outside"), None);
    }
}
