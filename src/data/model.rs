use std::fmt;

// ---------------------------------------------------------------------------
// WineKind – which of the two sample tables a value belongs to
// ---------------------------------------------------------------------------

/// The two independent sample populations. They are loaded separately and
/// never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WineKind {
    Red,
    White,
}

impl WineKind {
    /// Human-readable label used in chart legends and titles.
    pub const fn label(self) -> &'static str {
        match self {
            WineKind::Red => "Red wine",
            WineKind::White => "White wine",
        }
    }

    /// Stem used in output file names (`red_wine_correlation.png`).
    pub const fn file_stem(self) -> &'static str {
        match self {
            WineKind::Red => "red_wine",
            WineKind::White => "white_wine",
        }
    }
}

impl fmt::Display for WineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// WineTable – one fully parsed data file
// ---------------------------------------------------------------------------

/// A numeric table stored column-major. All columns hold the same number of
/// rows; one column (the last, in the real dataset) is the quality label.
#[derive(Debug, Clone, PartialEq)]
pub struct WineTable {
    pub kind: WineKind,
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl WineTable {
    /// Build a table from column names and column-major data.
    ///
    /// Returns `None` when the number of names and columns differ or the
    /// columns are ragged.
    pub fn new(kind: WineKind, columns: Vec<String>, values: Vec<Vec<f64>>) -> Option<Self> {
        if columns.len() != values.len() {
            return None;
        }
        let rows = values.first().map_or(0, Vec::len);
        if values.iter().any(|c| c.len() != rows) {
            return None;
        }
        Some(Self {
            kind,
            columns,
            values,
        })
    }

    /// Column names in source order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Every column except `label`, in source order.
    pub fn feature_names(&self, label: &str) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|c| *c != label)
            .collect()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of the named column.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.column_index(name).map(|i| self.values[i].as_slice())
    }

    /// Iterate `(name, values)` pairs in source order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .zip(self.values.iter())
            .map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}
