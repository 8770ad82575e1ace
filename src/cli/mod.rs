//! Command-line parsing for the scatter canvas.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the fitting/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{ModelKind, SampleShape};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "scatter",
    version,
    about = "Interactive scatter-point curve fitting (Lagrange, Gaussian kernel, polynomial LS/ridge)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit the enabled models over a query grid, print a summary, and
    /// optionally export the overlays.
    Fit(FitArgs),
    /// Launch the interactive canvas TUI.
    ///
    /// Click to add points; the enabled overlays are recomputed on every
    /// point commit using the same pipeline as `scatter fit`.
    Tui(TuiArgs),
}

/// Options for a one-shot fit.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// CSV file of scatter points (one `x,y` row per point).
    #[arg(long, value_name = "CSV")]
    pub points: Option<PathBuf>,

    /// Generate a synthetic scatter instead of reading a file.
    #[arg(long)]
    pub demo: bool,

    /// Base shape for the synthetic scatter.
    #[arg(long, value_enum, default_value_t = SampleShape::Sine)]
    pub shape: SampleShape,

    /// Number of synthetic points.
    #[arg(short = 'n', long, default_value_t = 12)]
    pub count: usize,

    /// Random seed for synthetic scatter generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Noise standard deviation for synthetic points (canvas units).
    #[arg(long, default_value_t = 12.0)]
    pub noise: f64,

    /// Highest polynomial degree (clamped to 1..=10).
    #[arg(short = 'd', long, default_value_t = 1)]
    pub degree: usize,

    /// Ridge regularization strength (clamped to 0..=100).
    #[arg(short = 'l', long, default_value_t = 1.0)]
    pub lambda: f64,

    /// Models to evaluate (repeatable). Defaults to all four.
    #[arg(short = 'm', long = "model", value_enum)]
    pub models: Vec<ModelKind>,

    /// Left edge of the sampled extent (canvas units).
    #[arg(long, default_value_t = 0.0)]
    pub x_min: f64,

    /// Right edge of the sampled extent (canvas units).
    #[arg(long, default_value_t = 800.0)]
    pub x_max: f64,

    /// Query sampling step (canvas units).
    #[arg(long, default_value_t = 1.0)]
    pub step: f64,

    /// Export the overlays to CSV (one row per query x).
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the overlays to JSON.
    #[arg(long = "export-overlay", value_name = "JSON")]
    pub export_overlay: Option<PathBuf>,
}

/// Options for the interactive canvas.
#[derive(Debug, Parser, Clone)]
pub struct TuiArgs {
    /// Start with a synthetic scatter already on the canvas.
    #[arg(long)]
    pub demo: bool,

    /// Base shape for generated scatters (`g`/`r` keys).
    #[arg(long, value_enum, default_value_t = SampleShape::Sine)]
    pub shape: SampleShape,

    /// Number of points per generated scatter.
    #[arg(short = 'n', long, default_value_t = 12)]
    pub count: usize,

    /// Random seed for generated scatters.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Noise standard deviation for generated scatters (canvas units).
    #[arg(long, default_value_t = 12.0)]
    pub noise: f64,

    /// Initial highest polynomial degree (clamped to 1..=10).
    #[arg(short = 'd', long, default_value_t = 1)]
    pub degree: usize,

    /// Initial ridge regularization strength (clamped to 0..=100).
    #[arg(short = 'l', long, default_value_t = 1.0)]
    pub lambda: f64,
}
