use super::error::FormatError;
use csv::StringRecord;
use std::marker::PhantomData;

/// A logical field of a source format, mapped to a physical column once the
/// header has been read.
pub trait LogicalField: Copy + Eq + 'static {
    /// Every field of the format, in declaration order.
    const ALL: &'static [Self];

    /// The header name of the column holding this field.
    fn column(self) -> &'static str;

    fn required(self) -> bool {
        true
    }
}

/// Resolved mapping from logical fields to column indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout<F: LogicalField> {
    indices: Vec<Option<usize>>,
    _field: PhantomData<F>,
}

impl<F: LogicalField> FieldLayout<F> {
    /// Resolves fields against a header row. Missing required columns fail
    /// here, never at lookup time.
    pub fn resolve<'h, I>(headers: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = &'h str>,
    {
        let headers: Vec<&str> = headers.into_iter().map(str::trim).collect();
        let mut indices = Vec::with_capacity(F::ALL.len());
        for &field in F::ALL {
            let index = headers.iter().position(|h| *h == field.column());
            if index.is_none() && field.required() {
                return Err(FormatError::MissingColumn {
                    column: field.column().to_string(),
                });
            }
            indices.push(index);
        }
        Ok(Self {
            indices,
            _field: PhantomData,
        })
    }

    /// Layout for headerless formats: fields map to columns in declaration order.
    pub fn positional() -> Self {
        Self {
            indices: (0..F::ALL.len()).map(Some).collect(),
            _field: PhantomData,
        }
    }

    pub fn index(&self, field: F) -> Option<usize> {
        F::ALL
            .iter()
            .position(|f| *f == field)
            .and_then(|slot| self.indices[slot])
    }

    /// The trimmed value of `field`, or `None` when the column is absent,
    /// the row is short, or the cell is blank.
    pub fn get<'r>(&self, record: &'r StringRecord, field: F) -> Option<&'r str> {
        self.index(field)
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum DemoField {
        Id,
        Score,
        Note,
    }

    impl LogicalField for DemoField {
        const ALL: &'static [Self] = &[Self::Id, Self::Score, Self::Note];

        fn column(self) -> &'static str {
            match self {
                Self::Id => "id",
                Self::Score => "score",
                Self::Note => "note",
            }
        }

        fn required(self) -> bool {
            !matches!(self, Self::Note)
        }
    }

    #[test]
    fn resolves_columns_regardless_of_order() {
        let layout = FieldLayout::<DemoField>::resolve(["score", "extra", "id"]).unwrap();
        assert_eq!(layout.index(DemoField::Id), Some(2));
        assert_eq!(layout.index(DemoField::Score), Some(0));
        assert_eq!(layout.index(DemoField::Note), None);
    }

    #[test]
    fn missing_required_column_fails_at_resolution() {
        let result = FieldLayout::<DemoField>::resolve(["id", "note"]);
        assert!(matches!(
            result,
            Err(FormatError::MissingColumn { column }) if column == "score"
        ));
    }

    #[test]
    fn get_trims_and_hides_blank_cells() {
        let layout = FieldLayout::<DemoField>::resolve(["id", "score", "note"]).unwrap();
        let record = StringRecord::from(vec![" P1 ", "0.5", "  "]);
        assert_eq!(layout.get(&record, DemoField::Id), Some("P1"));
        assert_eq!(layout.get(&record, DemoField::Note), None);

        let short = StringRecord::from(vec!["P2"]);
        assert_eq!(layout.get(&short, DemoField::Score), None);
    }

    #[test]
    fn positional_layout_follows_declaration_order() {
        let layout = FieldLayout::<DemoField>::positional();
        assert_eq!(layout.index(DemoField::Note), Some(2));
    }
}
