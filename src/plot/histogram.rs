use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::color::series_palette;
use crate::data::WineKind;
use crate::stats::HistogramBin;

use super::{render_png, PlotError, Result, FONT, PANEL_SIZE};

/// Two-panel histogram of the quality score: red on the left, white on the
/// right. Bins are computed by the caller.
pub fn draw_quality_distribution(
    path: &Path,
    red: &[HistogramBin],
    white: &[HistogramBin],
    x_label: &str,
) -> Result<()> {
    if red.is_empty() || white.is_empty() {
        return Err(PlotError::InvalidData(
            "quality histogram needs at least one bin per wine".to_string(),
        ));
    }
    let colors = series_palette(2);

    render_png(path, PANEL_SIZE, |root| {
        let panels = root.split_evenly((1, 2));
        let series = [(WineKind::Red, red), (WineKind::White, white)];
        for ((panel, (kind, bins)), color) in panels.iter().zip(series).zip(colors.iter()) {
            let title = format!("{}: quality distribution", kind.label());
            draw_histogram_panel(panel, &title, x_label, bins, color)?;
        }
        Ok(())
    })
}

fn draw_histogram_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    x_label: &str,
    bins: &[HistogramBin],
    color: &RGBColor,
) -> Result<()> {
    let (x_lo, x_hi) = match (bins.first(), bins.last()) {
        (Some(first), Some(last)) => (first.start, last.end),
        _ => return Err(PlotError::InvalidData("no bins".to_string())),
    };
    let peak = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 26))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_lo..x_hi, 0.0..peak * 1.1)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_label)
        .y_desc("Frequency")
        .y_label_formatter(&|v| format!("{v:.0}"))
        .label_style((FONT, 16))
        .axis_desc_style((FONT, 18))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(bins.iter().map(|b| {
            Rectangle::new([(b.start, 0.0), (b.end, b.count as f64)], color.filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // outline so adjacent bars stay distinguishable
    chart
        .draw_series(bins.iter().filter(|b| b.count > 0).map(|b| {
            Rectangle::new(
                [(b.start, 0.0), (b.end, b.count as f64)],
                WHITE.stroke_width(1),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::histogram;

    #[test]
    fn empty_bins_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quality_distribution.png");
        let bins = histogram(&[5.0, 6.0], 10);
        let err = draw_quality_distribution(&path, &bins, &[], "quality").unwrap_err();
        assert!(matches!(err, PlotError::InvalidData(_)));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn writes_two_panel_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quality_distribution.png");
        let red = histogram(&[5.0, 5.0, 6.0, 7.0, 4.0], 10);
        let white = histogram(&[6.0, 6.0, 5.0, 7.0, 8.0, 3.0], 10);
        draw_quality_distribution(&path, &red, &white, "quality").unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), PANEL_SIZE);
    }
}
