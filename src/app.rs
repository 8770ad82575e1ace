//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads or generates scatter points
//! - runs the overlay recompute pipeline
//! - prints reports and writes optional exports
//! - launches the interactive TUI

use clap::Parser;

use crate::cli::{Command, FitArgs};
use crate::domain::{CanvasConfig, ModelParams, ModelToggles, Point, Viewport};
use crate::error::AppError;
use crate::fit::uniform_grid;

pub mod pipeline;

/// Entry point for the `scatter` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `scatter` (and `scatter --demo`) to behave like
    // `scatter tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while keeping the canvas one keystroke away.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Tui(args) => crate::tui::run(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = canvas_config_from_args(&args);
    if !config.viewport.is_valid() {
        return Err(AppError::new(
            2,
            format!(
                "Invalid extent: x_min={}, x_max={} (must be finite and x_max > x_min).",
                args.x_min, args.x_max
            ),
        ));
    }

    let points = load_points(&args, &config.viewport)?;
    let query = uniform_grid(config.viewport.x_min, config.viewport.x_max, config.step);
    if query.is_empty() {
        return Err(AppError::new(
            2,
            format!("Query grid is empty for step {} over the given extent.", args.step),
        ));
    }

    let overlays = pipeline::recompute_overlays(&points, &query, &config.params, &config.toggles);

    println!(
        "{}",
        crate::report::format_fit_summary(&points, &query, &config.params, &config.toggles, &overlays)
    );

    if let Some(path) = &args.export {
        crate::io::overlay::write_overlay_csv(path, &query, &overlays)?;
    }
    if let Some(path) = &args.export_overlay {
        let file = pipeline::overlay_file(&query, &config.params, &overlays);
        crate::io::overlay::write_overlay_json(path, &file)?;
    }

    Ok(())
}

fn load_points(args: &FitArgs, viewport: &Viewport) -> Result<Vec<Point>, AppError> {
    match (&args.points, args.demo) {
        (Some(path), false) => crate::io::points::read_points_csv(path),
        (None, true) => crate::data::generate_scatter(
            args.shape,
            args.count,
            args.seed,
            args.noise,
            viewport,
        ),
        (Some(_), true) => Err(AppError::new(
            2,
            "Pass either --points or --demo, not both.",
        )),
        (None, false) => Err(AppError::new(
            2,
            "No input: pass --points <CSV> or --demo (or run `scatter tui` and click).",
        )),
    }
}

pub fn canvas_config_from_args(args: &FitArgs) -> CanvasConfig {
    CanvasConfig {
        params: ModelParams::clamped(args.degree, args.lambda),
        toggles: ModelToggles::from_models(&args.models),
        viewport: Viewport {
            x_min: args.x_min,
            x_max: args.x_max,
            ..Viewport::default()
        },
        step: args.step,
    }
}

/// Rewrite argv so `scatter` defaults to `scatter tui`.
///
/// Rules:
/// - `scatter`                     -> `scatter tui`
/// - `scatter --demo ...`          -> `scatter tui --demo ...`
/// - `scatter --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
