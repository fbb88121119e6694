use std::path::PathBuf;

/// Which fixed column schema a collection is converted with.
///
/// Chosen once per run from the first file in processing order; every row of
/// the run uses the same variant, even if later files look different.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    GenericItem,
    NewspaperIssue,
}

impl SchemaVariant {
    /// Returns a human-readable name for the schema variant.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::GenericItem => "Generic Item",
            Self::NewspaperIssue => "Newspaper Issue",
        }
    }
}

/// One output row: column name to optional value, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(&'static str, Option<String>)>,
}

impl Row {
    /// Creates a row with every listed column absent.
    pub fn with_columns(columns: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            cells: columns.into_iter().map(|c| (c, None)).collect(),
        }
    }

    /// Sets a column's value. Empty values keep the cell absent; unknown columns are ignored.
    pub fn set(&mut self, column: &str, value: String) {
        if value.is_empty() {
            return;
        }
        if let Some((_, cell)) = self.cells.iter_mut().find(|(c, _)| *c == column) {
            *cell = Some(value);
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| *c == column)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|(c, _)| *c)
    }

    pub fn cells(&self) -> impl Iterator<Item = Option<&str>> {
        self.cells.iter().map(|(_, v)| v.as_deref())
    }
}

/// Outcome of one successful `convert` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub output_path: PathBuf,
    pub variant: SchemaVariant,
    pub rows_written: usize,
}
