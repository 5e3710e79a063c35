use crate::core::topology::metrics::TopologyMetrics;

/// Run-level provenance stamped onto every record of a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMeta {
    pub meta_id: String,
    pub tax_id: String,
}

/// Tool-native helix predictions carried through from a TMHMM summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HelixCounts {
    pub pred_hel: i64,
    pub tm_60: i64,
}

/// One protein after parsing and topology analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinRecord {
    pub protein_id: String,
    pub protein_name: Option<String>,
    pub source: Option<SourceMeta>,
    pub annotation: String,
    pub metrics: TopologyMetrics,
    pub helices: Option<HelixCounts>,
}

impl ProteinRecord {
    pub fn new(protein_id: impl Into<String>, annotation: impl Into<String>, metrics: TopologyMetrics) -> Self {
        Self {
            protein_id: protein_id.into(),
            protein_name: None,
            source: None,
            annotation: annotation.into(),
            metrics,
            helices: None,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.protein_name = name;
        self
    }

    pub fn with_source(mut self, source: Option<SourceMeta>) -> Self {
        self.source = source;
        self
    }

    pub fn with_helices(mut self, helices: HelixCounts) -> Self {
        self.helices = Some(helices);
        self
    }

    /// TMHMM-style transmembrane call: any predicted helix, or a membrane
    /// fraction strictly above `membrane_prop_threshold`.
    pub fn has_tm(&self, membrane_prop_threshold: f64) -> bool {
        self.helices.is_some_and(|h| h.pred_hel > 0)
            || self.metrics.membrane_prop > membrane_prop_threshold
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::core::topology::alphabet::AlphabetConfig;
    use crate::core::topology::analyzer::analyze;
    use crate::engine::config::StrandCriteria;

    pub fn boctopus_record(id: &str, topology: &str) -> ProteinRecord {
        let metrics = analyze(
            topology,
            &AlphabetConfig::boctopus2(),
            &StrandCriteria::default(),
        )
        .unwrap();
        ProteinRecord::new(id, topology, metrics)
    }

    pub fn tmhmm_record(id: &str, annotation: &str) -> ProteinRecord {
        let metrics = analyze(
            annotation,
            &AlphabetConfig::tmhmm(),
            &StrandCriteria::default(),
        )
        .unwrap();
        ProteinRecord::new(id, annotation, metrics)
    }
}
