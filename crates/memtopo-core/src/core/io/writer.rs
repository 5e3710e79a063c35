use super::error::FormatError;
use crate::core::models::record::ProteinRecord;
use crate::core::models::table::MergedTable;
use crate::core::topology::alphabet::AlphabetConfig;
use std::io::Write;

/// One output column of a merged table and how to render it from a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    ProteinId { header: &'static str },
    MetaId,
    TaxId,
    ProteinName,
    TopologyLength,
    ClassCount(String),
    ClassProp(String),
    MembraneResidues,
    MembraneProp,
    TmSegments,
    BetaStrands,
    IsBetaBarrel,
    PredHel,
    Tm60,
    HasTm { threshold: f64 },
    TopologySummary,
    Annotation { header: &'static str },
}

fn flag(value: bool) -> String {
    if value { "True" } else { "False" }.to_string()
}

fn decimal(value: f64) -> String {
    format!("{value:?}")
}

impl Column {
    pub fn header(&self) -> String {
        match self {
            Self::ProteinId { header } | Self::Annotation { header } => header.to_string(),
            Self::MetaId => "meta_id".to_string(),
            Self::TaxId => "tax_id".to_string(),
            Self::ProteinName => "protein_name".to_string(),
            Self::TopologyLength => "topology_length".to_string(),
            Self::ClassCount(key) => format!("{key}_count"),
            Self::ClassProp(key) => format!("{key}_prop"),
            Self::MembraneResidues => "membrane_residues".to_string(),
            Self::MembraneProp => "membrane_prop".to_string(),
            Self::TmSegments => "tm_segments".to_string(),
            Self::BetaStrands => "beta_strands".to_string(),
            Self::IsBetaBarrel => "is_beta_barrel".to_string(),
            Self::PredHel => "PredHel".to_string(),
            Self::Tm60 => "TM_60".to_string(),
            Self::HasTm { .. } => "has_TM".to_string(),
            Self::TopologySummary => "topology_summary".to_string(),
        }
    }

    pub fn cell(&self, record: &ProteinRecord) -> String {
        let metrics = &record.metrics;
        match self {
            Self::ProteinId { .. } => record.protein_id.clone(),
            Self::MetaId => record
                .source
                .as_ref()
                .map(|s| s.meta_id.clone())
                .unwrap_or_default(),
            Self::TaxId => record
                .source
                .as_ref()
                .map(|s| s.tax_id.clone())
                .unwrap_or_default(),
            Self::ProteinName => record.protein_name.clone().unwrap_or_default(),
            Self::TopologyLength => metrics.length.to_string(),
            Self::ClassCount(key) => metrics.count(key).unwrap_or(0).to_string(),
            Self::ClassProp(key) => decimal(metrics.proportion(key).unwrap_or(0.0)),
            Self::MembraneResidues => metrics.membrane_residues.to_string(),
            Self::MembraneProp => decimal(metrics.membrane_prop),
            Self::TmSegments => metrics.tm_segments.to_string(),
            Self::BetaStrands => metrics.strands.to_string(),
            Self::IsBetaBarrel => flag(metrics.is_classified),
            Self::PredHel => record.helices.unwrap_or_default().pred_hel.to_string(),
            Self::Tm60 => record.helices.unwrap_or_default().tm_60.to_string(),
            Self::HasTm { threshold } => flag(record.has_tm(*threshold)),
            Self::TopologySummary => metrics.summary.clone(),
            Self::Annotation { .. } => record.annotation.clone(),
        }
    }
}

/// Ordered column list for one output table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    columns: Vec<Column>,
}

impl TableSchema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    fn leading(id_header: &'static str, with_source: bool) -> Vec<Column> {
        let mut columns = vec![Column::ProteinId { header: id_header }];
        if with_source {
            columns.extend([Column::MetaId, Column::TaxId]);
        }
        columns.extend([Column::ProteinName, Column::TopologyLength]);
        columns
    }

    fn per_class(alphabet: &AlphabetConfig) -> impl Iterator<Item = Column> + '_ {
        let classes = alphabet.classes();
        classes
            .iter()
            .map(|c| Column::ClassCount(c.key.clone()))
            .chain(classes.iter().map(|c| Column::ClassProp(c.key.clone())))
    }

    pub fn boctopus2(alphabet: &AlphabetConfig, with_source: bool) -> Self {
        let mut columns = Self::leading("protein_id", with_source);
        columns.extend(Self::per_class(alphabet));
        columns.extend([
            Column::MembraneResidues,
            Column::MembraneProp,
            Column::TmSegments,
            Column::BetaStrands,
            Column::IsBetaBarrel,
            Column::TopologySummary,
            Column::Annotation {
                header: "protein_topology",
            },
        ]);
        Self { columns }
    }

    /// An alphabet with a class keyed `membrane` already yields
    /// `membrane_count` and `membrane_prop`, so the aggregate membrane columns
    /// are only added for alphabets that split the membrane into several classes.
    pub fn tmhmm(alphabet: &AlphabetConfig, with_source: bool, membrane_prop_threshold: f64) -> Self {
        let mut columns = Self::leading("protein_ID", with_source);
        columns.extend(Self::per_class(alphabet));
        if !alphabet.classes().iter().any(|c| c.key == "membrane") {
            columns.extend([Column::MembraneResidues, Column::MembraneProp]);
        }
        columns.extend([
            Column::TmSegments,
            Column::PredHel,
            Column::Tm60,
            Column::HasTm {
                threshold: membrane_prop_threshold,
            },
            Column::TopologySummary,
            Column::Annotation {
                header: "annotation",
            },
        ]);
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(Column::header).collect()
    }

    pub fn row(&self, record: &ProteinRecord) -> Vec<String> {
        self.columns.iter().map(|c| c.cell(record)).collect()
    }
}

/// Writes `table` as tab-delimited text with a header row.
pub fn write_table(
    table: &MergedTable,
    schema: &TableSchema,
    writer: impl Write,
) -> Result<(), FormatError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    csv_writer.write_record(schema.headers())?;
    for record in table.records() {
        csv_writer.write_record(schema.row(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// One protein identifier per line, in table order.
pub fn write_ids(table: &MergedTable, mut writer: impl Write) -> Result<(), FormatError> {
    for id in table.ids() {
        writeln!(writer, "{id}")?;
    }
    writer.flush()?;
    Ok(())
}
