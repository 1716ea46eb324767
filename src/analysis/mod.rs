//! The four analysis passes, run in order over the two loaded tables.
//!
//! ```text
//!   (red, white)
//!        │
//!        ├─▶ basic_stats   describe + boxplot_<feature>.png (one per feature)
//!        ├─▶ quality       quality_distribution.png
//!        ├─▶ correlation   red_wine_correlation.png, white_wine_correlation.png
//!        └─▶ importance    quality_correlations.png
//! ```
//!
//! Each pass runs to completion before the next starts. Files are
//! overwritten on every run, so repeated runs leave the same set of names.

pub mod basic_stats;
pub mod correlation;
pub mod importance;
pub mod quality;

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::data::{WineKind, WineTable};
use crate::error::Result;

pub use basic_stats::{analyze_basic_stats, BasicStatsReport, FeatureStats};
pub use correlation::{analyze_correlations, CorrelationReport};
pub use importance::{analyze_feature_importance, quality_ranking, ImportanceReport};
pub use quality::analyze_quality_distribution;

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub basic_stats: BasicStatsReport,
    pub quality_distribution: PathBuf,
    pub correlations: CorrelationReport,
    pub importance: ImportanceReport,
}

impl PipelineReport {
    /// Every written image, in the order the passes wrote them.
    pub fn images(&self) -> Vec<&Path> {
        self.basic_stats
            .images
            .iter()
            .map(PathBuf::as_path)
            .chain(std::iter::once(self.quality_distribution.as_path()))
            .chain(self.correlations.images.iter().map(PathBuf::as_path))
            .chain(std::iter::once(self.importance.image.as_path()))
            .collect()
    }
}

/// File names a run over `red` will write, in write order, without
/// rendering anything.
pub fn planned_artifacts(red: &WineTable, quality_column: &str) -> Vec<String> {
    let mut names = basic_stats::planned_boxplots(red, quality_column);
    names.push(quality::QUALITY_DISTRIBUTION_FILE.to_string());
    names.push(correlation::heatmap_file_name(WineKind::Red));
    names.push(correlation::heatmap_file_name(WineKind::White));
    names.push(importance::QUALITY_CORRELATIONS_FILE.to_string());
    names
}

/// Create the results directory (and parents) if needed.
pub fn ensure_results_dir(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    Ok(dir.to_path_buf())
}

/// Run all four passes into `config.results_dir`.
pub fn run_all(red: &WineTable, white: &WineTable, config: &Config) -> Result<PipelineReport> {
    let results_dir = ensure_results_dir(&config.results_dir)?;
    log::info!("Writing figures to {}", results_dir.display());

    let basic_stats = analyze_basic_stats(red, white, &config.quality_column, &results_dir)?;
    let quality_distribution = analyze_quality_distribution(
        red,
        white,
        &config.quality_column,
        config.histogram_bins,
        &results_dir,
    )?;
    let correlations = analyze_correlations(red, white, &results_dir)?;
    let importance =
        analyze_feature_importance(red, white, &config.quality_column, &results_dir)?;

    Ok(PipelineReport {
        basic_stats,
        quality_distribution,
        correlations,
        importance,
    })
}
