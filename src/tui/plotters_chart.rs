//! Plotters-powered fit chart widget for Ratatui.
//!
//! Plotters handles axes, tick labels, and line interpolation for us, which
//! Ratatui's built-in `Chart` widget would make manual work. Output lands in
//! the Ratatui buffer via `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A render-only chart description.
///
/// Series and bounds are computed by the caller (`chart_series`), so `render()`
/// only draws and the data prep stays testable without a terminal.
pub struct FitChart<'a> {
    /// Step outline of the histogram bars.
    pub histogram: &'a [(f64, f64)],
    /// Line series for the learner's density curve.
    pub curve: &'a [(f64, f64)],
    /// X bounds (sample values).
    pub x_bounds: [f64; 2],
    /// Y bounds (density).
    pub y_bounds: [f64; 2],
    /// Axis labels (kept simple for terminal rendering).
    pub x_label: &'a str,
    pub y_label: &'a str,
    /// Formatting of tick labels.
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl<'a> Widget for FitChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
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

        // The crate-provided widget helper keeps us decoupled from the
        // backend's internal types.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                // Small margins keep the chart readable without wasting space.
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Axes + tick labels.
            //
            // We disable the mesh lines to reduce visual clutter in low-resolution
            // terminal rendering; the axes + labels are enough to judge the fit.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| (self.fmt_x)(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            // Series styling: keep the palette high-contrast for terminal readability.
            let histogram_color = RGBColor(0, 255, 0); // green
            let curve_color = RGBColor(255, 0, 0); // red

            // 1) Histogram outline (the data).
            chart.draw_series(LineSeries::new(
                self.histogram.iter().copied(),
                &histogram_color,
            ))?;

            // 2) The learner's curve on top.
            chart.draw_series(LineSeries::new(self.curve.iter().copied(), &curve_color))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
