use std::path::{Path, PathBuf};

use crate::data::WineTable;
use crate::error::{EdaError, Result};
use crate::plot::draw_feature_boxplot;
use crate::stats::{describe, describe_table, Summary};

/// Summaries of one feature for both wines.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStats {
    pub feature: String,
    pub red: Summary,
    pub white: Summary,
}

#[derive(Debug, Clone)]
pub struct BasicStatsReport {
    pub features: Vec<FeatureStats>,
    /// One box plot per feature, in feature order.
    pub images: Vec<PathBuf>,
}

pub fn boxplot_file_name(feature: &str) -> String {
    format!("boxplot_{feature}.png")
}

/// Box-plot file names in the order the pass writes them: every column of
/// `red` except `quality_column`.
pub fn planned_boxplots(red: &WineTable, quality_column: &str) -> Vec<String> {
    red.feature_names(quality_column)
        .into_iter()
        .map(boxplot_file_name)
        .collect()
}

/// Summarise each feature of both tables and write one red-vs-white box
/// plot per feature.
///
/// Features are taken from the red table's column order, skipping
/// `quality_column`. Either table lacking the quality column, or a feature
/// absent from the white table, aborts the pass before anything is drawn.
pub fn analyze_basic_stats(
    red: &WineTable,
    white: &WineTable,
    quality_column: &str,
    results_dir: &Path,
) -> Result<BasicStatsReport> {
    for table in [red, white] {
        if table.column_index(quality_column).is_none() {
            return Err(missing(table, quality_column));
        }
    }
    let feature_names = red.feature_names(quality_column);
    for feature in &feature_names {
        if white.column_index(feature).is_none() {
            return Err(missing(white, feature));
        }
    }

    for (kind, table) in [(red.kind, red), (white.kind, white)] {
        for (column, summary) in describe_table(table) {
            log::info!("{kind} | {column}: {summary}");
        }
    }

    let mut features = Vec::with_capacity(feature_names.len());
    let mut images = Vec::with_capacity(feature_names.len());

    for feature in feature_names {
        let red_values = red.column(feature).ok_or_else(|| missing(red, feature))?;
        let white_values = white.column(feature).ok_or_else(|| missing(white, feature))?;

        let path = results_dir.join(boxplot_file_name(feature));
        draw_feature_boxplot(&path, feature, red_values, white_values)?;
        log::debug!("Wrote {}", path.display());

        features.push(FeatureStats {
            feature: feature.to_string(),
            red: describe(red_values),
            white: describe(white_values),
        });
        images.push(path);
    }

    log::info!("Basic statistics: {} box plots written", images.len());
    Ok(BasicStatsReport { features, images })
}

fn missing(table: &WineTable, column: &str) -> EdaError {
    EdaError::MissingColumn {
        kind: table.kind,
        column: column.to_string(),
    }
}
