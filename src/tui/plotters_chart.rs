//! Plotters-powered canvas chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + mesh rendering
//! - less manual work for ticks/labels
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::ModelKind;

/// Overlay colors match the canvas this reproduces: red Lagrange, magenta
/// Gaussian, green least squares, blue ridge.
pub fn model_rgb(model: ModelKind) -> RGBColor {
    match model {
        ModelKind::Lagrange => RGBColor(200, 10, 10),
        ModelKind::Gaussian => RGBColor(200, 10, 200),
        ModelKind::LeastSquares => RGBColor(50, 200, 50),
        ModelKind::Ridge => RGBColor(50, 50, 200),
    }
}

/// Ratatui-side color for legend text, matching `model_rgb`.
pub fn model_color(model: ModelKind) -> Color {
    match model {
        ModelKind::Lagrange => Color::Red,
        ModelKind::Gaussian => Color::Magenta,
        ModelKind::LeastSquares => Color::Green,
        ModelKind::Ridge => Color::Blue,
    }
}

/// A lightweight, render-only chart description.
///
/// The widget is intentionally data-driven: all series and bounds are
/// computed outside the render call. This keeps `render()` focused on
/// drawing and makes it easy to test/benchmark the data prep separately.
pub struct CanvasChart<'a> {
    /// Query x-grid shared by every overlay series.
    pub query: &'a [f64],
    /// One y-series per drawable overlay.
    pub curves: Vec<(ModelKind, &'a [f64])>,
    /// Scatter series for the committed points.
    pub points: Vec<(f64, f64)>,
    /// X bounds (canvas units).
    pub x_bounds: [f64; 2],
    /// Y bounds (canvas units).
    pub y_bounds: [f64; 2],
}

impl<'a> Widget for CanvasChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Canvas area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite())
            || x1 <= x0
            || y1 <= y0
        {
            return;
        }

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                // Small margins keep the chart readable without wasting space.
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Axes + tick labels. Mesh lines are disabled to reduce clutter
            // in low-resolution terminal rendering.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| format!("{v:.0}"))
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            // 1) Overlay polylines, one per drawable model. Non-finite
            //    samples (degenerate fits) are dropped so the line shows a
            //    gap instead of confusing the backend.
            for (model, ys) in &self.curves {
                let color = model_rgb(*model);
                let segment: Vec<(f64, f64)> = self
                    .query
                    .iter()
                    .zip(ys.iter())
                    .filter(|(_, y)| y.is_finite())
                    .map(|(&x, &y)| (x, y))
                    .collect();
                chart.draw_series(LineSeries::new(segment, &color))?;
            }

            // 2) Committed points on top, so they stay visible through the
            //    overlays. `Pixel` markers render cleanly in terminals where
            //    circle radii do not.
            chart.draw_series(
                self.points
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), RGBColor(255, 255, 0))),
            )?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
