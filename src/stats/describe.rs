use std::fmt;

use statrs::statistics::Statistics;

use crate::data::WineTable;

/// Descriptive statistics of one column, the same eight figures `describe`
/// reports in dataframe libraries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Summary {
    /// Inter-quartile range.
    pub fn iqr(&self) -> f64 {
        self.q75 - self.q25
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count={} mean={:.4} std={:.4} min={:.4} 25%={:.4} 50%={:.4} 75%={:.4} max={:.4}",
            self.count, self.mean, self.std, self.min, self.q25, self.median, self.q75, self.max
        )
    }
}

/// Summarise a column. NaN cells are ignored; an empty column yields a count
/// of zero and NaN everywhere else.
pub fn describe(values: &[f64]) -> Summary {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);

    Summary {
        count: sorted.len(),
        mean: sorted.iter().mean(),
        std: sorted.iter().std_dev(),
        min: sorted.first().copied().unwrap_or(f64::NAN),
        q25: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q75: quantile_sorted(&sorted, 0.75),
        max: sorted.last().copied().unwrap_or(f64::NAN),
    }
}

/// Summaries of every column in source order.
pub fn describe_table(table: &WineTable) -> Vec<(String, Summary)> {
    table
        .columns()
        .map(|(name, values)| (name.to_string(), describe(values)))
        .collect()
}

/// Quantile of already sorted data, interpolating linearly between the two
/// closest ranks at position `(n - 1) * q`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let q = q.clamp(0.0, 1.0);
    let pos = (sorted.len() - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Box-and-whisker figures of one column.
///
/// Whiskers end at the most extreme data point within 1.5 × IQR of the box,
/// never at the fence itself; every point beyond the fences is an outlier.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    /// Ascending.
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Lowest and highest value the glyph reaches, outliers included.
    pub fn extent(&self) -> (f64, f64) {
        let lo = self.outliers.first().map_or(self.lower_whisker, |o| o.min(self.lower_whisker));
        let hi = self.outliers.last().map_or(self.upper_whisker, |o| o.max(self.upper_whisker));
        (lo, hi)
    }
}

/// Tukey box statistics of the finite values in `values`; `None` when there
/// are none.
pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile_sorted(&sorted, 0.25);
    let median = quantile_sorted(&sorted, 0.5);
    let q3 = quantile_sorted(&sorted, 0.75);
    let reach = 1.5 * (q3 - q1);
    let (low_fence, high_fence) = (q1 - reach, q3 + reach);

    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|&v| v >= low_fence)
        .map_or(q1, |v| v.min(q1));
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= high_fence)
        .map_or(q3, |v| v.max(q3));
    let outliers = sorted
        .iter()
        .copied()
        .filter(|&v| v < low_fence || v > high_fence)
        .collect();

    Some(BoxStats {
        q1,
        median,
        q3,
        lower_whisker,
        upper_whisker,
        outliers,
    })
}
