use std::cmp::Ordering;

use statrs::statistics::Statistics;

use crate::data::WineTable;

// ---------------------------------------------------------------------------
// Pearson coefficient
// ---------------------------------------------------------------------------

/// Pearson linear correlation of two equally long series.
///
/// Rows where either side is NaN are dropped first. Fewer than two remaining
/// rows, or a zero-variance side, yields NaN.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| !a.is_nan() && !b.is_nan())
        .map(|(a, b)| (*a, *b))
        .unzip();

    if xs.len() < 2 {
        return f64::NAN;
    }

    let sx = xs.iter().std_dev();
    let sy = ys.iter().std_dev();
    if sx == 0.0 || sy == 0.0 {
        return f64::NAN;
    }

    let r = xs.iter().covariance(ys.iter()) / (sx * sy);
    r.clamp(-1.0, 1.0)
}

// ---------------------------------------------------------------------------
// CorrelationMatrix
// ---------------------------------------------------------------------------

/// Square matrix of pairwise Pearson coefficients between every column of a
/// table. The diagonal is exactly 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    /// Row-major, `labels.len()²` entries.
    values: Vec<f64>,
}

impl CorrelationMatrix {
    pub fn compute(table: &WineTable) -> Self {
        let labels: Vec<String> = table.column_names().to_vec();
        let n = labels.len();
        let columns: Vec<&[f64]> = table.columns().map(|(_, v)| v).collect();
        let mut values = vec![f64::NAN; n * n];

        for i in 0..n {
            values[i * n + i] = 1.0;
            for j in (i + 1)..n {
                let r = pearson(columns[i], columns[j]);
                values[i * n + j] = r;
                values[j * n + i] = r;
            }
        }

        Self { labels, values }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let n = self.size();
        (row < n && col < n).then(|| self.values[row * n + col])
    }

    /// Coefficient between two named columns.
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        self.get(i, j)
    }

    /// Coefficients of every column against `target`, in column order.
    pub fn column(&self, target: &str) -> Option<Vec<(String, f64)>> {
        let j = self.index_of(target)?;
        let n = self.size();
        Some(
            self.labels
                .iter()
                .enumerate()
                .map(|(i, label)| (label.clone(), self.values[i * n + j]))
                .collect(),
        )
    }

    /// Correlations with `target`, strongest positive first, NaN last, with
    /// the `target` entry itself removed.
    pub fn ranking(&self, target: &str) -> Option<Vec<(String, f64)>> {
        let mut entries: Vec<(String, f64)> = self
            .column(target)?
            .into_iter()
            .filter(|(label, _)| label != target)
            .collect();
        entries.sort_by(|a, b| descending_nan_last(a.1, b.1));
        Some(entries)
    }

    fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}
