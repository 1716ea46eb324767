use std::path::{Path, PathBuf};

use crate::data::WineTable;
use crate::error::{EdaError, Result};
use crate::plot::draw_quality_correlations;
use crate::stats::CorrelationMatrix;

pub const QUALITY_CORRELATIONS_FILE: &str = "quality_correlations.png";

#[derive(Debug, Clone)]
pub struct ImportanceReport {
    /// Red features by correlation with quality, strongest positive first.
    pub red: Vec<(String, f64)>,
    pub white: Vec<(String, f64)>,
    pub image: PathBuf,
}

/// Correlation of every feature with `quality_column`, sorted descending with
/// the quality column itself removed.
pub fn quality_ranking(table: &WineTable, quality_column: &str) -> Result<Vec<(String, f64)>> {
    CorrelationMatrix::compute(table)
        .ranking(quality_column)
        .ok_or_else(|| EdaError::MissingColumn {
            kind: table.kind,
            column: quality_column.to_string(),
        })
}

/// Rank features by their correlation with quality and draw both rankings
/// side by side.
pub fn analyze_feature_importance(
    red: &WineTable,
    white: &WineTable,
    quality_column: &str,
    results_dir: &Path,
) -> Result<ImportanceReport> {
    let red_ranking = quality_ranking(red, quality_column)?;
    let white_ranking = quality_ranking(white, quality_column)?;

    for (kind, ranking) in [(red.kind, &red_ranking), (white.kind, &white_ranking)] {
        if let Some((feature, r)) = ranking.first() {
            log::info!("{kind}: strongest positive correlate of {quality_column} is {feature} ({r:.3})");
        }
    }

    let image = results_dir.join(QUALITY_CORRELATIONS_FILE);
    draw_quality_correlations(&image, &red_ranking, &white_ranking)?;
    log::info!("Feature importance written to {}", image.display());

    Ok(ImportanceReport {
        red: red_ranking,
        white: white_ranking,
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::WineKind;

    fn table() -> WineTable {
        WineTable::new(
            WineKind::Red,
            vec!["alcohol".into(), "volatile acidity".into(), "quality".into()],
            vec![
                vec![9.0, 10.0, 11.0, 12.0],
                vec![0.9, 0.6, 0.7, 0.3],
                vec![4.0, 5.0, 6.0, 7.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn ranking_never_contains_quality() {
        let ranking = quality_ranking(&table(), "quality").unwrap();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].0, "alcohol");
        assert_eq!(ranking[1].0, "volatile acidity");
        assert!(ranking.iter().all(|(name, _)| name != "quality"));
    }

    #[test]
    fn unknown_quality_column() {
        let err = quality_ranking(&table(), "score").unwrap_err();
        assert!(matches!(err, EdaError::MissingColumn { .. }));
    }
}
