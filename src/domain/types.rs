//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while the canvas is being edited
//! - exported to CSV/JSON for downstream plotting or comparisons

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Lowest polynomial degree the sliders/flags accept.
pub const DEGREE_MIN: usize = 1;
/// Highest polynomial degree the sliders/flags accept.
pub const DEGREE_MAX: usize = 10;
/// Ridge regularization range accepted from sliders/flags.
pub const LAMBDA_MIN: f64 = 0.0;
pub const LAMBDA_MAX: f64 = 100.0;

/// A single scatter point in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The ordered scatter the curves are fit through.
///
/// The canvas only ever appends a committed click or removes from the end
/// (undo / remove-all). Points are never reordered or edited in place, so the
/// fitting core can take a plain slice snapshot.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Commit a new point (a completed click).
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Remove the most recently committed point, if any.
    pub fn truncate_last(&mut self) -> Option<Point> {
        self.points.pop()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only snapshot handed to the fitting core.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

/// The four curve overlays the canvas can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    /// Lagrange interpolation through every point.
    Lagrange,
    /// Gaussian-kernel regression (fixed bandwidth).
    Gaussian,
    /// Least-squares polynomial fit.
    LeastSquares,
    /// Ridge-regularized polynomial fit.
    Ridge,
}

impl ModelKind {
    pub const ALL: [ModelKind; 4] = [
        ModelKind::Lagrange,
        ModelKind::Gaussian,
        ModelKind::LeastSquares,
        ModelKind::Ridge,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Lagrange => "Lagrange",
            ModelKind::Gaussian => "Gaussian kernel",
            ModelKind::LeastSquares => "Least squares",
            ModelKind::Ridge => "Ridge regression",
        }
    }

    /// Smallest point count for which the model produces output.
    pub fn min_points(self) -> usize {
        match self {
            ModelKind::Lagrange | ModelKind::Gaussian => 2,
            ModelKind::LeastSquares | ModelKind::Ridge => 3,
        }
    }
}

/// Per-model configuration shared by the CLI and the TUI.
///
/// `highest_degree` is shared by both polynomial models; `ridge_lambda` is
/// used only by ridge regression. Both are clamped to the slider ranges of
/// the canvas rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    pub highest_degree: usize,
    pub ridge_lambda: f64,
}

impl ModelParams {
    /// Build params with both values clamped into range.
    pub fn clamped(highest_degree: usize, ridge_lambda: f64) -> Self {
        Self {
            highest_degree: highest_degree.clamp(DEGREE_MIN, DEGREE_MAX),
            ridge_lambda: ridge_lambda.clamp(LAMBDA_MIN, LAMBDA_MAX),
        }
    }

    /// Step the degree up or down, staying in range.
    pub fn bump_degree(&mut self, delta: i64) {
        let next = self.highest_degree as i64 + delta;
        self.highest_degree = next.clamp(DEGREE_MIN as i64, DEGREE_MAX as i64) as usize;
    }

    /// Step lambda by `delta`, staying in range.
    pub fn bump_lambda(&mut self, delta: f64) {
        self.ridge_lambda = (self.ridge_lambda + delta).clamp(LAMBDA_MIN, LAMBDA_MAX);
    }
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            highest_degree: 1,
            ridge_lambda: 1.0,
        }
    }
}

/// Which overlays are currently enabled. All four start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelToggles {
    pub lagrange: bool,
    pub gaussian: bool,
    pub least_squares: bool,
    pub ridge: bool,
}

impl ModelToggles {
    pub fn all_on() -> Self {
        Self {
            lagrange: true,
            gaussian: true,
            least_squares: true,
            ridge: true,
        }
    }

    pub fn none() -> Self {
        Self {
            lagrange: false,
            gaussian: false,
            least_squares: false,
            ridge: false,
        }
    }

    /// Enable exactly the listed models. An empty list means "all".
    pub fn from_models(models: &[ModelKind]) -> Self {
        if models.is_empty() {
            return Self::all_on();
        }
        let mut toggles = Self::none();
        for model in models {
            toggles.set(*model, true);
        }
        toggles
    }

    pub fn get(&self, model: ModelKind) -> bool {
        match model {
            ModelKind::Lagrange => self.lagrange,
            ModelKind::Gaussian => self.gaussian,
            ModelKind::LeastSquares => self.least_squares,
            ModelKind::Ridge => self.ridge,
        }
    }

    pub fn set(&mut self, model: ModelKind, on: bool) {
        match model {
            ModelKind::Lagrange => self.lagrange = on,
            ModelKind::Gaussian => self.gaussian = on,
            ModelKind::LeastSquares => self.least_squares = on,
            ModelKind::Ridge => self.ridge = on,
        }
    }

    pub fn toggle(&mut self, model: ModelKind) {
        self.set(model, !self.get(model));
    }
}

impl Default for ModelToggles {
    fn default() -> Self {
        Self::all_on()
    }
}

/// The visible canvas extent in canvas units.
///
/// Canvas units are pixel-like: the default viewport is 800x400, which keeps
/// the fixed Gaussian bandwidth (100 units) meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn is_valid(&self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
            && self.x_max > self.x_min
            && self.y_max > self.y_min
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 800.0,
            y_min: 0.0,
            y_max: 400.0,
        }
    }
}

/// Base shape for synthetic demo scatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SampleShape {
    Line,
    Parabola,
    Sine,
}

impl SampleShape {
    pub fn display_name(self) -> &'static str {
        match self {
            SampleShape::Line => "line",
            SampleShape::Parabola => "parabola",
            SampleShape::Sine => "sine",
        }
    }
}

/// Everything the recompute path needs besides the points themselves.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    pub params: ModelParams,
    pub toggles: ModelToggles,
    pub viewport: Viewport,
    /// Query sampling step in canvas units.
    pub step: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            params: ModelParams::default(),
            toggles: ModelToggles::all_on(),
            viewport: Viewport::default(),
            step: crate::fit::DEFAULT_STEP,
        }
    }
}

/// One exported overlay series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlaySeries {
    pub model: ModelKind,
    pub y: Vec<f64>,
}

/// A saved overlay file (JSON).
///
/// The "portable" representation of one recompute: parameters, the query
/// grid, and one y-series per model that produced output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayFile {
    pub tool: String,
    pub params: ModelParams,
    pub query: Vec<f64>,
    pub series: Vec<OverlaySeries>,
}
