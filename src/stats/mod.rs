//! Statistics computed by the analysis passes: per-column summaries,
//! Pearson correlation matrices and equal-width histograms.

pub mod correlation;
pub mod describe;
pub mod histogram;

pub use correlation::{pearson, CorrelationMatrix};
pub use describe::{box_stats, describe, describe_table, BoxStats, Summary};
pub use histogram::{histogram, HistogramBin};
