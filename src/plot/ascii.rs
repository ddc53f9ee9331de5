//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size char grid), optimized for:
//! - quick visual sanity checks after `bell check`
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - histogram bars: `#` columns
//! - model density curve: `-` line drawn over the bars

use crate::domain::{CurveGrid, RoundFile};
use crate::math::Histogram;

/// Render histogram + model curve for an in-memory round.
pub fn render_ascii_plot(
    histogram: &Histogram,
    curve: &CurveGrid,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    // The window is where the data is; the curve is clipped to it.
    let (x_min, x_max) = histogram.x_range();

    let curve_max = curve
        .points()
        .filter(|&(x, _)| x >= x_min && x <= x_max)
        .map(|(_, d)| d)
        .fold(0.0, f64::max);
    let y_max = (histogram.max_density().max(curve_max) * 1.05).max(1e-9);

    let mut grid = vec![vec![' '; width]; height];

    draw_bars(&mut grid, histogram, x_min, x_max, y_max);
    draw_curve(&mut grid, curve, x_min, x_max, y_max);

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{x_min:.3}, {x_max:.3}] | density=[0.00, {y_max:.2}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

/// Render a previously exported round JSON.
pub fn render_ascii_plot_from_round_file(round: &RoundFile, width: usize, height: usize) -> String {
    render_ascii_plot(&round.histogram, &round.curve, width, height)
}

/// Fill one `#` column per char column, up to the bin's density.
fn draw_bars(grid: &mut [Vec<char>], histogram: &Histogram, x_min: f64, x_max: f64, y_max: f64) {
    let height = grid.len();
    let width = grid[0].len();
    let bins = histogram.densities.len();
    let bin_width = histogram.bin_width();

    for col in 0..width {
        // Sample the bin at the column's center to avoid edge aliasing.
        let x = x_min + (col as f64 + 0.5) / width as f64 * (x_max - x_min);
        let idx = (((x - histogram.edges[0]) / bin_width).floor() as usize).min(bins - 1);
        let d = histogram.densities[idx];
        if d <= 0.0 {
            continue;
        }
        let top = map_y(d, y_max, height);
        for row in grid.iter_mut().take(height).skip(top) {
            row[col] = '#';
        }
    }
}

fn draw_curve(grid: &mut [Vec<char>], curve: &CurveGrid, x_min: f64, x_max: f64, y_max: f64) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev: Option<(usize, usize)> = None;
    for (x, d) in curve.points() {
        if x < x_min || x > x_max {
            prev = None;
            continue;
        }
        let cx = map_x(x, x_min, x_max, width);
        let cy = map_y(d, y_max, height);
        if let Some((px, py)) = prev {
            draw_line(grid, px, py, cx, cy, '-');
        } else {
            grid[cy][cx] = '-';
        }
        prev = Some((cx, cy));
    }
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(d: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = (d / y_max).clamp(0.0, 1.0);
    // density=y_max -> row 0 (top)
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish). Writes unconditionally so the curve
/// stays visible on top of the bars.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0 && (y0 as usize) < grid.len() && x0 >= 0 && (x0 as usize) < grid[0].len() {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
