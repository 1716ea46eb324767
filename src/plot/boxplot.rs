use std::path::Path;

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::combinators::WithKeyPoints;
use plotters::prelude::*;

use crate::color::series_palette;
use crate::data::WineKind;
use crate::stats::{box_stats, BoxStats};

use super::{padded, render_png, PlotError, Result, BOXPLOT_SIZE, FONT};

const WINES: [WineKind; 2] = [WineKind::Red, WineKind::White];
const BOX_HALF_WIDTH: f64 = 0.2;
const CAP_HALF_WIDTH: f64 = 0.1;
const OUTLIER_RADIUS: u32 = 3;

/// Horizontal centre of the `slot`-th box; the x axis spans `[0, WINES.len()]`.
fn slot_center(slot: usize) -> f64 {
    slot as f64 + 0.5
}

/// Wine label for an x key point, empty between slots.
fn slot_label(x: &f64) -> String {
    WINES
        .iter()
        .enumerate()
        .find(|(slot, _)| (slot_center(*slot) - x).abs() < 1e-6)
        .map(|(_, kind)| kind.label().to_string())
        .unwrap_or_default()
}

/// Key-pointed x axis; wraps `WithKeyPoints` so the mesh accepts it (plotters
/// gives `RangedCoordf64` no default formatter to forward). Labels come from
/// `x_label_formatter`.
struct SlotAxis(WithKeyPoints<RangedCoordf64>);

impl Ranged for SlotAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.0.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        self.0.key_points(hint)
    }

    fn range(&self) -> std::ops::Range<f64> {
        self.0.range()
    }

    fn axis_pixel_range(&self, limit: (i32, i32)) -> std::ops::Range<i32> {
        self.0.axis_pixel_range(limit)
    }
}

/// Y range covering every whisker and outlier of `boxes`, with a margin.
fn value_axis(boxes: &[BoxStats]) -> (f64, f64) {
    let (lo, hi) = boxes
        .iter()
        .map(BoxStats::extent)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
            (lo.min(a), hi.max(b))
        });
    padded(lo, hi, 0.05)
}

/// Box, median and whisker strokes of one box at `center`.
fn box_lines(center: f64, b: &BoxStats) -> Vec<Vec<(f64, f64)>> {
    let (left, right) = (center - BOX_HALF_WIDTH, center + BOX_HALF_WIDTH);
    let (cap_left, cap_right) = (center - CAP_HALF_WIDTH, center + CAP_HALF_WIDTH);
    vec![
        vec![(left, b.median), (right, b.median)],
        vec![(center, b.q1), (center, b.lower_whisker)],
        vec![(center, b.q3), (center, b.upper_whisker)],
        vec![(cap_left, b.lower_whisker), (cap_right, b.lower_whisker)],
        vec![(cap_left, b.upper_whisker), (cap_right, b.upper_whisker)],
    ]
}

/// Side-by-side box plot of one feature for red and white samples.
///
/// Whiskers end at the furthest sample within 1.5 × IQR of the box and the
/// samples beyond them are drawn as circles. NaN values are ignored. Either
/// series being empty is an error.
pub fn draw_feature_boxplot(path: &Path, feature: &str, red: &[f64], white: &[f64]) -> Result<()> {
    let no_values = || PlotError::InvalidData(format!("feature '{feature}' has no values to plot"));
    let boxes = [
        box_stats(red).ok_or_else(no_values)?,
        box_stats(white).ok_or_else(no_values)?,
    ];
    let (lo, hi) = value_axis(&boxes);
    let colors = series_palette(WINES.len());
    let key_points: Vec<f64> = (0..WINES.len()).map(slot_center).collect();

    render_png(path, BOXPLOT_SIZE, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(format!("Distribution of {feature}: red vs white"), (FONT, 32))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(
                SlotAxis((0.0..WINES.len() as f64).with_key_points(key_points)),
                lo..hi,
            )
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&slot_label)
            .y_desc(feature)
            .label_style((FONT, 20))
            .axis_desc_style((FONT, 22))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        for (slot, (b, color)) in boxes.iter().zip(colors.iter()).enumerate() {
            let center = slot_center(slot);
            let corners = [
                (center - BOX_HALF_WIDTH, b.q1),
                (center + BOX_HALF_WIDTH, b.q3),
            ];

            chart
                .draw_series([
                    Rectangle::new(corners, color.mix(0.35).filled()),
                    Rectangle::new(corners, color.stroke_width(2)),
                ])
                .map_err(|e| PlotError::Drawing(e.to_string()))?;

            chart
                .draw_series(
                    box_lines(center, b)
                        .into_iter()
                        .map(|line| PathElement::new(line, BLACK.stroke_width(2))),
                )
                .map_err(|e| PlotError::Drawing(e.to_string()))?;

            chart
                .draw_series(
                    b.outliers
                        .iter()
                        .map(|&v| Circle::new((center, v), OUTLIER_RADIUS, color.stroke_width(1))),
                )
                .map_err(|e| PlotError::Drawing(e.to_string()))?;
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_is_rejected_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boxplot_x.png");
        let err = draw_feature_boxplot(&path, "x", &[], &[1.0]).unwrap_err();
        assert!(matches!(err, PlotError::InvalidData(_)));

        let err = draw_feature_boxplot(&path, "x", &[1.0], &[f64::NAN]).unwrap_err();
        assert!(matches!(err, PlotError::InvalidData(_)));
        assert!(!path.exists());
    }

    #[test]
    fn axis_covers_whiskers_and_outliers() {
        let sugar = [0.6, 0.8, 1.0, 1.2, 1.4, 1.6, 2.0, 6.0, 9.0, 23.1];
        let acidity = [6.0, 6.4, 6.8, 7.0, 7.2];
        let boxes = [box_stats(&sugar).unwrap(), box_stats(&acidity).unwrap()];
        let (lo, hi) = value_axis(&boxes);
        for b in &boxes {
            assert!(lo < b.lower_whisker && b.upper_whisker < hi);
            assert!(b.outliers.iter().all(|&o| lo < o && o < hi));
        }
        // the axis is set by the data, not by the 1.5 IQR fences
        let low_fence = boxes[0].q1 - 1.5 * (boxes[0].q3 - boxes[0].q1);
        assert!(lo > low_fence, "{lo} <= {low_fence}");
    }

    #[test]
    fn strokes_end_at_the_whiskers() {
        let b = box_stats(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let lines = box_lines(0.5, &b);
        let lowest = lines.iter().flatten().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let highest = lines.iter().flatten().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        assert_eq!((lowest, highest), (1.0, 5.0));
        assert!(lines.iter().flatten().all(|p| (p.0 - 0.5).abs() <= BOX_HALF_WIDTH + 1e-12));
    }

    #[test]
    fn slots_are_labelled_at_their_centres() {
        assert_eq!(slot_label(&slot_center(0)), "Red wine");
        assert_eq!(slot_label(&slot_center(1)), "White wine");
        assert_eq!(slot_label(&1.0), "");
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boxplot_alcohol.png");
        draw_feature_boxplot(&path, "alcohol", &[9.4, 9.8, 10.0, 12.1], &[8.8, 9.5, 10.1, 11.0])
            .unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), BOXPLOT_SIZE);
    }
}
