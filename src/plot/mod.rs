//! Chart rendering.
//!
//! Every chart is drawn with [`plotters`] into an in-memory RGB buffer and
//! then encoded as PNG by the [`image`] crate. Text is rasterised through the
//! `ttf` backend, so a usable system font is required at run time.

pub mod bars;
pub mod boxplot;
pub mod heatmap;
pub mod histogram;

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use thiserror::Error;

pub use bars::draw_quality_correlations;
pub use boxplot::draw_feature_boxplot;
pub use heatmap::draw_correlation_heatmap;
pub use histogram::draw_quality_distribution;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = core::result::Result<T, PlotError>;

/// Single box plot comparing the two wines.
pub const BOXPLOT_SIZE: (u32, u32) = (1000, 600);
/// Two side-by-side panels (histograms, bar charts).
pub const PANEL_SIZE: (u32, u32) = (1200, 600);
/// Annotated correlation heatmap with colour bar.
pub const HEATMAP_SIZE: (u32, u32) = (1200, 1000);

pub(crate) const FONT: &str = "sans-serif";

/// Tick label styles for charts whose x axis carries column names.
///
/// Apply them with `x_label_style` and `y_label_style`. `label_style`
/// replaces both, so a later call to it undoes the rotation.
#[derive(Clone)]
pub(crate) struct AxisLabelStyles {
    /// Rotated a quarter turn and anchored at its start, so each name runs
    /// down from the axis into the label area.
    pub x: TextStyle<'static>,
    pub y: TextStyle<'static>,
}

pub(crate) fn column_label_styles(size: f64) -> AxisLabelStyles {
    AxisLabelStyles {
        x: TextStyle::from((FONT, size).into_font().transform(FontTransform::Rotate90))
            .pos(Pos::new(HPos::Left, VPos::Center)),
        y: TextStyle::from((FONT, size).into_font()),
    }
}

/// Render onto a white canvas of `size` pixels and write it to `path` as PNG.
pub fn render_png<F>(path: &Path, size: (u32, u32), draw: F) -> Result<()>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>,
{
    let (width, height) = size;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
        draw(&root)?;
        root.present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    let image = image::RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
        PlotError::InvalidData(format!("pixel buffer does not fit {width}x{height}"))
    })?;
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Smallest and largest non-NaN value over several series.
pub(crate) fn value_range<'a>(series: impl IntoIterator<Item = &'a [f64]>) -> Option<(f64, f64)> {
    series
        .into_iter()
        .flat_map(|s| s.iter().copied())
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Widen `[lo, hi]` by `fraction` of its span on both sides; a zero-width
/// range becomes one unit wide.
pub(crate) fn padded(lo: f64, hi: f64, fraction: f64) -> (f64, f64) {
    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 0.5, hi + 0.5);
    }
    (lo - span * fraction, hi + span * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_range_skips_nan() {
        let a = [1.0, f64::NAN, 4.0];
        let b = [-2.0, 3.0];
        assert_eq!(value_range([&a[..], &b[..]]), Some((-2.0, 4.0)));
        assert_eq!(value_range([&[f64::NAN][..]]), None);
    }

    #[test]
    fn padding() {
        assert_eq!(padded(0.0, 10.0, 0.1), (-1.0, 11.0));
        assert_eq!(padded(3.0, 3.0, 0.1), (2.5, 3.5));
    }

    #[test]
    fn column_labels_are_rotated_and_anchored_at_the_axis() {
        let styles = column_label_styles(15.0);
        assert!(matches!(styles.x.font.get_transform(), FontTransform::Rotate90));
        assert!(matches!(styles.x.pos.h_pos, HPos::Left));
        assert!(matches!(styles.x.pos.v_pos, VPos::Center));
        assert!(matches!(styles.y.font.get_transform(), FontTransform::None));
    }

    #[test]
    fn blank_canvas_encodes_to_png() {
        // Filling the background needs no fonts.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.png");
        render_png(&path, (40, 30), |_| Ok(())).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (40, 30));
        assert!(decoded.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn draw_errors_propagate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.png");
        let err = render_png(&path, (10, 10), |_| {
            Err(PlotError::InvalidData("nothing to draw".into()))
        })
        .unwrap_err();
        assert!(matches!(err, PlotError::InvalidData(_)));
        assert!(!path.exists());
    }
}
