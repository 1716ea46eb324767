use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::color::series_palette;
use crate::data::WineKind;

use super::{
    column_label_styles, padded, render_png, value_range, PlotError, Result, FONT, PANEL_SIZE,
};

/// Two-panel bar chart of each feature's correlation with quality.
///
/// `red` and `white` are drawn in the order given; NaN coefficients keep
/// their slot on the axis but get no bar.
pub fn draw_quality_correlations(
    path: &Path,
    red: &[(String, f64)],
    white: &[(String, f64)],
) -> Result<()> {
    if red.is_empty() || white.is_empty() {
        return Err(PlotError::InvalidData(
            "no feature correlations to plot".to_string(),
        ));
    }
    let colors = series_palette(2);

    render_png(path, PANEL_SIZE, |root| {
        let panels = root.split_evenly((1, 2));
        let series = [(WineKind::Red, red), (WineKind::White, white)];
        for ((panel, (kind, ranking)), color) in panels.iter().zip(series).zip(colors.iter()) {
            let title = format!("{}: correlation with quality", kind.label());
            draw_ranking_panel(panel, &title, ranking, color)?;
        }
        Ok(())
    })
}

fn draw_ranking_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    ranking: &[(String, f64)],
    color: &RGBColor,
) -> Result<()> {
    let labels: Vec<&str> = ranking.iter().map(|(name, _)| name.as_str()).collect();
    let coefficients: Vec<f64> = ranking.iter().map(|(_, r)| *r).collect();

    // keep the zero line inside the chart even when every bar has one sign
    let (lo, hi) = value_range([coefficients.as_slice(), &[0.0][..]])
        .map(|(lo, hi)| padded(lo, hi, 0.1))
        .unwrap_or((-1.0, 1.0));

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 26))
        .margin(15)
        .x_label_area_size(170)
        .y_label_area_size(70)
        .build_cartesian_2d(labels[..].into_segmented(), lo..hi)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let label_styles = column_label_styles(15.0);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(label) => label.to_string(),
            _ => String::new(),
        })
        .x_label_style(label_styles.x)
        .y_label_style(label_styles.y)
        .y_desc("Correlation coefficient")
        .y_label_formatter(&|v| format!("{v:.2}"))
        .axis_desc_style((FONT, 18))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(color.filled())
                .margin(6)
                .data(
                    labels
                        .iter()
                        .zip(coefficients.iter())
                        .filter(|(_, r)| !r.is_nan())
                        .map(|(label, r)| (label, *r)),
                ),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rankings_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quality_correlations.png");
        let red = vec![("alcohol".to_string(), 0.48)];
        let err = draw_quality_correlations(&path, &red, &[]).unwrap_err();
        assert!(matches!(err, PlotError::InvalidData(_)));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quality_correlations.png");
        let red = vec![
            ("alcohol".to_string(), 0.48),
            ("sulphates".to_string(), 0.25),
            ("volatile acidity".to_string(), -0.39),
        ];
        let white = vec![
            ("alcohol".to_string(), 0.44),
            ("pH".to_string(), 0.10),
            ("density".to_string(), -0.31),
        ];
        draw_quality_correlations(&path, &red, &white).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), PANEL_SIZE);
    }
}
