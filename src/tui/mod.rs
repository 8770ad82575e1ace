//! Ratatui-based interactive canvas.
//!
//! The TUI renders the scatter and the enabled overlays, and turns left
//! mouse clicks inside the chart into committed points. Overlays are
//! recomputed through the shared pipeline once per commit (click, undo,
//! clear, demo generation) — never per frame.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Terminal,
};

use crate::app::pipeline::{recompute_overlays, OverlaySet};
use crate::cli::TuiArgs;
use crate::domain::{CanvasConfig, ModelKind, ModelParams, Point, PointSet, SampleShape};
use crate::error::AppError;
use crate::fit::uniform_grid;

mod plotters_chart;

use plotters_chart::{model_color, CanvasChart};

/// Start the interactive canvas.
pub fn run(args: TuiArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen, mouse
/// capture) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    }
}

/// Demo-scatter settings carried from the CLI flags.
#[derive(Debug, Clone, Copy)]
struct DemoSettings {
    shape: SampleShape,
    count: usize,
    seed: u64,
    noise: f64,
}

struct App {
    config: CanvasConfig,
    demo: DemoSettings,
    points: PointSet,
    query: Vec<f64>,
    overlays: OverlaySet,
    status: String,
    /// Inner chart rect from the last draw, used to map clicks to canvas
    /// coordinates.
    chart_area: Option<Rect>,
}

impl App {
    fn new(args: TuiArgs) -> Result<Self, AppError> {
        let config = CanvasConfig {
            params: ModelParams::clamped(args.degree, args.lambda),
            ..CanvasConfig::default()
        };
        let query = uniform_grid(config.viewport.x_min, config.viewport.x_max, config.step);

        let mut app = Self {
            config,
            demo: DemoSettings {
                shape: args.shape,
                count: args.count,
                seed: args.seed,
                noise: args.noise,
            },
            points: PointSet::new(),
            query,
            overlays: OverlaySet::empty(),
            status: "Click to add points.".to_string(),
            chart_area: None,
        };

        if args.demo {
            app.regenerate_demo()?;
        }
        Ok(app)
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
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Mouse(mouse) => {
                    if self.handle_mouse(mouse) {
                        needs_redraw = true;
                    }
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
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('1') => self.toggle_model(ModelKind::Lagrange),
            KeyCode::Char('2') => self.toggle_model(ModelKind::Gaussian),
            KeyCode::Char('3') => self.toggle_model(ModelKind::LeastSquares),
            KeyCode::Char('4') => self.toggle_model(ModelKind::Ridge),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.config.params.bump_degree(1);
                self.recompute();
                self.status = format!("degree: {}", self.config.params.highest_degree);
            }
            KeyCode::Char('-') => {
                self.config.params.bump_degree(-1);
                self.recompute();
                self.status = format!("degree: {}", self.config.params.highest_degree);
            }
            KeyCode::Char(']') => {
                self.config.params.bump_lambda(5.0);
                self.recompute();
                self.status = format!("lambda: {:.1}", self.config.params.ridge_lambda);
            }
            KeyCode::Char('[') => {
                self.config.params.bump_lambda(-5.0);
                self.recompute();
                self.status = format!("lambda: {:.1}", self.config.params.ridge_lambda);
            }
            KeyCode::Char('u') => {
                match self.points.truncate_last() {
                    Some(p) => {
                        self.recompute();
                        self.status = format!("Removed point ({:.0}, {:.0}).", p.x, p.y);
                    }
                    None => self.status = "No points to remove.".to_string(),
                }
            }
            KeyCode::Char('c') => {
                self.points.clear();
                self.recompute();
                self.status = "Cleared all points.".to_string();
            }
            KeyCode::Char('g') => {
                self.regenerate_demo()?;
            }
            KeyCode::Char('r') => {
                self.demo.seed = self.demo.seed.wrapping_add(1);
                self.regenerate_demo()?;
            }
            _ => {}
        }

        Ok(false)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return false;
        }
        let Some(point) = self.map_click(mouse.column, mouse.row) else {
            return false;
        };

        self.points.push(point);
        self.recompute();
        self.status = format!(
            "Added point ({:.0}, {:.0}) — n={}.",
            point.x,
            point.y,
            self.points.len()
        );
        true
    }

    /// Map a terminal cell inside the plot area to canvas coordinates.
    fn map_click(&self, column: u16, row: u16) -> Option<Point> {
        let area = plot_rect(self.chart_area?)?;
        if column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
            || area.width < 2
            || area.height < 2
        {
            return None;
        }

        let vp = self.config.viewport;
        let u = (column - area.x) as f64 / (area.width - 1) as f64;
        let v = (row - area.y) as f64 / (area.height - 1) as f64;

        // Terminal rows grow downward; canvas y grows upward.
        let x = vp.x_min + u * vp.width();
        let y = vp.y_max - v * vp.height();
        Some(Point::new(x, y))
    }

    fn toggle_model(&mut self, model: ModelKind) {
        self.config.toggles.toggle(model);
        self.recompute();
        let state = if self.config.toggles.get(model) { "on" } else { "off" };
        self.status = format!("{}: {state}", model.display_name());
    }

    /// One recompute per commit, shared with the CLI path.
    fn recompute(&mut self) {
        self.overlays = recompute_overlays(
            self.points.as_slice(),
            &self.query,
            &self.config.params,
            &self.config.toggles,
        );
    }

    fn regenerate_demo(&mut self) -> Result<(), AppError> {
        let points = crate::data::generate_scatter(
            self.demo.shape,
            self.demo.count,
            self.demo.seed,
            self.demo.noise,
            &self.config.viewport,
        )?;
        self.points = PointSet::from_points(points);
        self.recompute();
        self.status = format!(
            "Generated {} {} points (seed {}).",
            self.points.len(),
            self.demo.shape.display_name(),
            self.demo.seed
        );
        Ok(())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_canvas(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("scatter", Style::default().fg(Color::Cyan)),
            Span::raw(" — click-to-fit curve overlays"),
        ]));

        let mut model_spans: Vec<Span> = Vec::new();
        for (i, model) in ModelKind::ALL.into_iter().enumerate() {
            let on = self.config.toggles.get(model);
            let marker = if on { "■" } else { "□" };
            let style = if on {
                Style::default().fg(model_color(model))
            } else {
                Style::default().fg(Color::DarkGray)
            };
            model_spans.push(Span::styled(
                format!("[{}] {marker} {}", i + 1, model.display_name()),
                style,
            ));
            model_spans.push(Span::raw("   "));
        }
        lines.push(Line::from(model_spans));

        lines.push(Line::from(Span::styled(
            format!(
                "points: {} | degree: {} | lambda: {:.1} | seed: {}",
                self.points.len(),
                self.config.params.highest_degree,
                self.config.params.ridge_lambda,
                self.demo.seed,
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_canvas(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Canvas").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);
        self.chart_area = Some(inner);

        let vp = self.config.viewport;
        let curves = self.overlays.drawable(self.query.len());
        let points: Vec<(f64, f64)> = self
            .points
            .as_slice()
            .iter()
            .map(|p| (p.x, p.y))
            .collect();

        let widget = CanvasChart {
            query: &self.query,
            curves,
            points,
            x_bounds: [vp.x_min, vp.x_max],
            y_bounds: [vp.y_min, vp.y_max],
        };
        frame.render_widget(widget, inner);
    }
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

/// Plot area inside the chart widget, mirroring the margin and label-area
/// sizes the widget hands to Plotters. Clicks outside it (on axes/labels)
/// are ignored.
fn plot_rect(inner: Rect) -> Option<Rect> {
    let insets = AxisInsets {
        left: 7,
        right: 1,
        top: 1,
        bottom: 4,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return None;
    }

    Some(Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    })
}

impl App {
    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help =
            "click add  u undo  c clear  1-4 toggle  +/- degree  [/] lambda  g demo  r reseed  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(
                &self.status,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}
