//! Ratatui-based terminal UI.
//!
//! The TUI shows a histogram of the current dataset with the learner's bell
//! curve drawn on top. Arrow keys act as the two sliders; `c` checks the fit,
//! `r` regenerates the data, and a failed check is narrated when the
//! text-generation credential is configured.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Terminal,
};

use crate::app::pipeline::{evaluate_round, RoundOutput};
use crate::cli::RoundArgs;
use crate::data::generate_dataset;
use crate::domain::{FitScore, SessionConfig, UserEstimate};
use crate::error::AppError;
use crate::narrator::NarratorClient;

mod plotters_chart;

use plotters_chart::FitChart;

/// Start the TUI.
pub fn run(args: RoundArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    config: SessionConfig,
    estimate: UserEstimate,
    selected_field: usize,
    /// Recomputed on every interaction; owns the current dataset.
    round: RoundOutput,
    /// Result of the last explicit check; cleared by slider moves and
    /// regeneration so stale verdicts never linger.
    checked: Option<FitScore>,
    /// Feedback text for the last check (canned or narrated).
    feedback: Option<String>,
    /// Present only when the credential was found at startup; its absence is
    /// a status-line notice, never a crash.
    narrator: Option<NarratorClient>,
    status: String,
}

impl App {
    fn new(args: RoundArgs) -> Result<Self, AppError> {
        let config = crate::app::session_config_from_args(&args);
        let estimate = UserEstimate::new(args.center, args.spread);

        let (narrator, status) = match NarratorClient::from_env(config.narrator.clone()) {
            Ok(client) => (Some(client), "Match the curve to the histogram.".to_string()),
            Err(err) => (None, format!("{err} Narration disabled.")),
        };

        let dataset = generate_dataset(&config)?;
        let round = evaluate_round(dataset, estimate, &config)?;

        Ok(Self {
            config,
            estimate,
            selected_field: 0,
            round,
            checked: None,
            feedback: None,
            narrator,
            status,
        })
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < 1 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1)?,
            KeyCode::Right => self.adjust_field(1)?,
            KeyCode::Char('c') | KeyCode::Enter => self.check(),
            KeyCode::Char('r') => {
                self.config.seed = self.config.seed.wrapping_add(1);
                self.regenerate()?;
                self.status = format!("Regenerated data (seed {}).", self.config.seed);
            }
            KeyCode::Char('d') => match crate::debug::write_debug_bundle(&self.round, &self.config)
            {
                Ok(path) => {
                    self.status = format!("Wrote debug bundle: {}", path.display());
                }
                Err(err) => {
                    self.status = format!("Debug write failed: {err}");
                }
            },
            _ => {}
        }

        Ok(false)
    }

    fn adjust_field(&mut self, delta: i32) -> Result<(), AppError> {
        self.estimate = match self.selected_field {
            0 => self.estimate.nudge_center(delta),
            _ => self.estimate.nudge_spread(delta),
        };
        self.reevaluate()?;
        self.checked = None;
        self.feedback = None;
        self.status = format!(
            "center: {:.2} | spread: {:.2}",
            self.estimate.center, self.estimate.spread
        );
        Ok(())
    }

    /// Recompute the curve/score for the current estimate, keeping the dataset.
    fn reevaluate(&mut self) -> Result<(), AppError> {
        self.round = evaluate_round(self.round.dataset.clone(), self.estimate, &self.config)?;
        Ok(())
    }

    /// Replace the dataset wholesale and clear any check state.
    fn regenerate(&mut self) -> Result<(), AppError> {
        let dataset = generate_dataset(&self.config)?;
        self.round = evaluate_round(dataset, self.estimate, &self.config)?;
        self.checked = None;
        self.feedback = None;
        Ok(())
    }

    /// Score the current estimate and route the result: canned message on a
    /// pass, narrator on a failure (canned fallback when it is unavailable).
    fn check(&mut self) {
        let score = self.round.score;
        self.checked = Some(score);

        if score.verdict.is_pass() {
            self.feedback = Some(crate::report::canned_message(&score));
            self.status = "Checked: great fit!".to_string();
            return;
        }

        match &self.narrator {
            Some(client) => {
                self.status = "Asking the narrator...".to_string();
                match client.narrate(self.round.estimate, self.round.empirical, &score) {
                    Ok(text) => {
                        self.feedback = Some(text);
                        self.status = format!("Checked: {}.", score.verdict.display_name());
                    }
                    Err(err) => {
                        self.feedback = Some(crate::report::canned_message(&score));
                        self.status = format!("Narrator unavailable: {err}");
                    }
                }
            }
            None => {
                self.feedback = Some(crate::report::canned_message(&score));
                self.status = format!("Checked: {}.", score.verdict.display_name());
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("bell", Style::default().fg(Color::Cyan)),
            Span::raw(" — fit the curve to the histogram"),
        ]));

        lines.push(Line::from(Span::styled(
            format!(
                "seed: {} | n: {} | center: {:.2} | spread: {:.2} | tolerance: {:.0}%",
                self.round.dataset.seed,
                self.round.dataset.stats.n_samples,
                self.estimate.center,
                self.estimate.spread,
                self.config.threshold_pct,
            ),
            Style::default().fg(Color::Gray),
        )));

        // Only percentage errors appear here; the empirical parameters stay
        // hidden so the exercise keeps its point.
        if let Some(score) = &self.checked {
            lines.push(Line::from(Span::styled(
                format!(
                    "center err: {:.1}% | spread err: {:.1}% | {}",
                    score.errors.center_pct,
                    score.errors.spread_pct,
                    score.verdict.display_name(),
                ),
                Style::default().fg(verdict_color(score)),
            )));
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(6),
                Constraint::Length(4),
            ])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_feedback(frame, chunks[1]);
        self.draw_sliders(frame, chunks[2]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Fit").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let (histogram, curve, x_bounds, y_bounds) = chart_series(&self.round);

        let widget = FitChart {
            histogram: &histogram,
            curve: &curve,
            x_bounds,
            y_bounds,
            x_label: "value",
            y_label: "density",
            fmt_x: fmt_axis_x,
            fmt_y: fmt_axis_y,
        };

        frame.render_widget(widget, inner);
    }

    fn draw_feedback(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let text = self
            .feedback
            .as_deref()
            .unwrap_or("Press c to check your parameters.");
        let p = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Feedback").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_sliders(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items = vec![
            ListItem::new(format!("Center: {:.2}", self.estimate.center)),
            ListItem::new(format!("Spread: {:.2}", self.estimate.spread)),
        ];

        let list = List::new(items)
            .block(Block::default().title("Sliders").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  c check  r regenerate  d debug  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn verdict_color(score: &FitScore) -> Color {
    if score.verdict.is_pass() {
        Color::Green
    } else {
        Color::Red
    }
}

/// Build chart series for Plotters.
///
/// The x-window is the union of the histogram extent and the curve's central
/// mass (center ± 4 spreads) so a badly placed curve stays visible next to
/// the data instead of vanishing off-screen.
fn chart_series(
    round: &RoundOutput,
) -> (Vec<(f64, f64)>, Vec<(f64, f64)>, [f64; 2], [f64; 2]) {
    let (hist_lo, hist_hi) = round.histogram.x_range();
    let mass_lo = round.estimate.center - 4.0 * round.estimate.spread;
    let mass_hi = round.estimate.center + 4.0 * round.estimate.spread;

    let mut x0 = hist_lo.min(mass_lo);
    let mut x1 = hist_hi.max(mass_hi);
    if !x0.is_finite() || !x1.is_finite() || x1 <= x0 {
        x0 = -10.0;
        x1 = 10.0;
    }
    let x_bounds = [x0, x1];

    let histogram = round.histogram.outline();
    let curve: Vec<(f64, f64)> = round
        .curve
        .points()
        .filter(|&(x, _)| x >= x0 && x <= x1)
        .collect();

    let mut y_max = round.histogram.max_density();
    for &(_, d) in &curve {
        y_max = y_max.max(d);
    }
    if !y_max.is_finite() || y_max <= 0.0 {
        y_max = 1.0;
    }

    let pad = (y_max * 0.05).max(1e-12);
    let y_bounds = [0.0, y_max + pad];

    (histogram, curve, x_bounds, y_bounds)
}

fn fmt_axis_x(v: f64) -> String {
    format!("{v:.1}")
}

fn fmt_axis_y(v: f64) -> String {
    format!("{v:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_round;

    #[test]
    fn chart_series_windows_cover_data_and_curve() {
        let config = SessionConfig::with_seed(42);
        // Park the curve far from the data to force the window union.
        let round = run_round(&config, UserEstimate::new(5.0, 0.5)).unwrap();
        let (histogram, curve, x_bounds, y_bounds) = chart_series(&round);

        let (hist_lo, hist_hi) = round.histogram.x_range();
        assert!(x_bounds[0] <= hist_lo);
        assert!(x_bounds[1] >= hist_hi.max(5.0 + 4.0 * 0.5 - 1e-9));

        assert!(!histogram.is_empty());
        assert!(!curve.is_empty());
        assert!(y_bounds[0] == 0.0);
        assert!(y_bounds[1] > round.histogram.max_density());
    }
}
