use std::path::{Path, PathBuf};

use crate::data::{WineKind, WineTable};
use crate::error::Result;
use crate::plot::draw_correlation_heatmap;
use crate::stats::CorrelationMatrix;

#[derive(Debug, Clone)]
pub struct CorrelationReport {
    pub red: CorrelationMatrix,
    pub white: CorrelationMatrix,
    /// Red heatmap, then white.
    pub images: Vec<PathBuf>,
}

/// `red_wine_correlation.png` / `white_wine_correlation.png`
pub fn heatmap_file_name(kind: WineKind) -> String {
    format!("{}_correlation.png", kind.file_stem())
}

/// Compute the full correlation matrix of each table and render each as an
/// annotated heatmap.
pub fn analyze_correlations(
    red: &WineTable,
    white: &WineTable,
    results_dir: &Path,
) -> Result<CorrelationReport> {
    let (red_matrix, red_image) = render_matrix(red, results_dir)?;
    let (white_matrix, white_image) = render_matrix(white, results_dir)?;
    Ok(CorrelationReport {
        red: red_matrix,
        white: white_matrix,
        images: vec![red_image, white_image],
    })
}

fn render_matrix(table: &WineTable, results_dir: &Path) -> Result<(CorrelationMatrix, PathBuf)> {
    let matrix = CorrelationMatrix::compute(table);
    let path = results_dir.join(heatmap_file_name(table.kind));
    let title = format!("{} correlation matrix", table.kind.label());
    draw_correlation_heatmap(&path, &matrix, &title)?;
    log::info!(
        "{n}x{n} correlation heatmap for {} written to {}",
        table.kind,
        path.display(),
        n = matrix.size()
    );
    Ok((matrix, path))
}
