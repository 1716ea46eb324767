use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::color::{annotation_color, scaled};
use crate::stats::CorrelationMatrix;

use super::{column_label_styles, render_png, PlotError, Result, FONT, HEATMAP_SIZE};

const COLORBAR_WIDTH: u32 = 150;
const NAN_FILL: RGBColor = RGBColor(210, 210, 210);

/// Annotated heatmap of a correlation matrix on the viridis scale over
/// `[-1, 1]`, with a colour bar on the right.
pub fn draw_correlation_heatmap(path: &Path, matrix: &CorrelationMatrix, title: &str) -> Result<()> {
    if matrix.size() == 0 {
        return Err(PlotError::InvalidData(
            "correlation matrix is empty".to_string(),
        ));
    }

    render_png(path, HEATMAP_SIZE, |root| {
        let (main, bar) = root.split_horizontally(HEATMAP_SIZE.0 - COLORBAR_WIDTH);
        draw_cells(&main, matrix, title)?;
        draw_colorbar(&bar)
    })
}

fn cell_fill(value: f64) -> RGBColor {
    if value.is_nan() {
        NAN_FILL
    } else {
        scaled(value, -1.0, 1.0)
    }
}

fn draw_cells<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    matrix: &CorrelationMatrix,
    title: &str,
) -> Result<()> {
    let n = matrix.size() as i32;
    let labels = matrix.labels();

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 32))
        .margin(20)
        .x_label_area_size(190)
        .y_label_area_size(190)
        .build_cartesian_2d(0i32..n, n..0i32)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let (plot_w, plot_h) = chart.plotting_area().dim_in_pixel();
    let cell_w = plot_w as i32 / n;
    let cell_h = plot_h as i32 / n;
    let font_px = f64::from((cell_h / 3).clamp(9, 22));

    let label_for = |v: &i32| {
        usize::try_from(*v)
            .ok()
            .and_then(|i| labels.get(i))
            .cloned()
            .unwrap_or_default()
    };

    let label_styles = column_label_styles(16.0);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n as usize + 1)
        .y_labels(n as usize + 1)
        .x_label_offset(cell_w / 2)
        .y_label_offset(cell_h / 2)
        .x_label_formatter(&label_for)
        .y_label_formatter(&label_for)
        .x_label_style(label_styles.x)
        .y_label_style(label_styles.y)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let cells = || (0..n).flat_map(move |row| (0..n).map(move |col| (row, col)));
    let value_at = |row: i32, col: i32| {
        matrix
            .get(row as usize, col as usize)
            .unwrap_or(f64::NAN)
    };

    chart
        .draw_series(cells().map(|(row, col)| {
            Rectangle::new(
                [(col, row), (col + 1, row + 1)],
                cell_fill(value_at(row, col)).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(cells().map(|(row, col)| {
            let value = value_at(row, col);
            let text = if value.is_nan() {
                "nan".to_string()
            } else {
                format!("{value:.2}")
            };
            let ink = annotation_color(&cell_fill(value));
            let style = (FONT, font_px)
                .into_font()
                .color(&ink)
                .pos(Pos::new(HPos::Center, VPos::Center));
            EmptyElement::at((col, row)) + Text::new(text, (cell_w / 2, cell_h / 2), style)
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

fn draw_colorbar<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> Result<()> {
    const STEPS: usize = 100;

    let mut chart = ChartBuilder::on(area)
        .margin_top(90)
        .margin_bottom(210)
        .margin_right(20)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, -1.0..1.0)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(9)
        .y_label_formatter(&|v| format!("{v:.2}"))
        .label_style((FONT, 14))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let step = 2.0 / STEPS as f64;
    chart
        .draw_series((0..STEPS).map(|i| {
            let lo = -1.0 + step * i as f64;
            Rectangle::new([(0.0, lo), (1.0, lo + step)], scaled(lo + step / 2.0, -1.0, 1.0).filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{WineKind, WineTable};

    #[test]
    fn empty_matrix_is_rejected() {
        let table = WineTable::new(WineKind::Red, vec![], vec![]).unwrap();
        let matrix = CorrelationMatrix::compute(&table);
        let dir = tempfile::tempdir().unwrap();
        let err = draw_correlation_heatmap(&dir.path().join("h.png"), &matrix, "t").unwrap_err();
        assert!(matches!(err, PlotError::InvalidData(_)));
    }

    #[test]
    fn nan_cells_use_neutral_fill() {
        let fill = cell_fill(f64::NAN);
        assert_eq!((fill.0, fill.1, fill.2), (210, 210, 210));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn writes_png() {
        let table = WineTable::new(
            WineKind::White,
            vec!["a".into(), "b".into(), "quality".into()],
            vec![vec![1.0, 2.0, 3.0], vec![3.0, 1.0, 2.0], vec![5.0, 6.0, 7.0]],
        )
        .unwrap();
        let matrix = CorrelationMatrix::compute(&table);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("white_wine_correlation.png");
        draw_correlation_heatmap(&path, &matrix, "White wine correlation matrix").unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), HEATMAP_SIZE);
    }
}
