use std::path::{Path, PathBuf};

use crate::data::WineTable;
use crate::error::{EdaError, Result};
use crate::plot::draw_quality_distribution;
use crate::stats::histogram;

pub const QUALITY_DISTRIBUTION_FILE: &str = "quality_distribution.png";

/// Histogram the quality score of both wines into one two-panel image.
pub fn analyze_quality_distribution(
    red: &WineTable,
    white: &WineTable,
    quality_column: &str,
    bins: usize,
    results_dir: &Path,
) -> Result<PathBuf> {
    let red_bins = histogram(quality_values(red, quality_column)?, bins);
    let white_bins = histogram(quality_values(white, quality_column)?, bins);

    let path = results_dir.join(QUALITY_DISTRIBUTION_FILE);
    draw_quality_distribution(&path, &red_bins, &white_bins, quality_column)?;
    log::info!("Quality distribution written to {}", path.display());
    Ok(path)
}

pub(crate) fn quality_values<'a>(table: &'a WineTable, quality_column: &str) -> Result<&'a [f64]> {
    table
        .column(quality_column)
        .ok_or_else(|| EdaError::MissingColumn {
            kind: table.kind,
            column: quality_column.to_string(),
        })
}
