//! Formatted terminal output for `scatter fit`.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized
//!
//! The summary is descriptive only: point/query stats and per-model sample
//! ranges. There are deliberately no fit-quality metrics here.

use crate::app::pipeline::OverlaySet;
use crate::domain::{ModelKind, ModelParams, ModelToggles, Point};
use crate::math::effective_degree;

/// Format the full run summary.
pub fn format_fit_summary(
    points: &[Point],
    query: &[f64],
    params: &ModelParams,
    toggles: &ModelToggles,
    overlays: &OverlaySet,
) -> String {
    let mut out = String::new();

    out.push_str("=== scatter — curve overlays ===\n");
    out.push_str(&format!("Points: n={}", points.len()));
    if let Some((x_range, y_range)) = point_ranges(points) {
        out.push_str(&format!(
            " | x=[{:.1}, {:.1}] | y=[{:.1}, {:.1}]",
            x_range.0, x_range.1, y_range.0, y_range.1
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "Query: n={} | x=[{:.1}, {:.1}]\n",
        query.len(),
        query.first().copied().unwrap_or(f64::NAN),
        query.last().copied().unwrap_or(f64::NAN),
    ));
    out.push_str(&format!(
        "Params: degree={} (effective {}) | lambda={:.2}\n",
        params.highest_degree,
        effective_degree(params.highest_degree, points.len()),
        params.ridge_lambda,
    ));

    out.push_str("\nOverlays:\n");
    for model in ModelKind::ALL {
        out.push_str(&format_model_line(model, points.len(), toggles, overlays, query.len()));
        out.push('\n');
    }

    out
}

fn format_model_line(
    model: ModelKind,
    n_points: usize,
    toggles: &ModelToggles,
    overlays: &OverlaySet,
    query_len: usize,
) -> String {
    let name = model.display_name();
    if !toggles.get(model) {
        return format!("  {name:<16} disabled");
    }

    match overlays.get(model) {
        Some(ys) if ys.len() == query_len => {
            let finite: Vec<f64> = ys.iter().copied().filter(|v| v.is_finite()).collect();
            if finite.is_empty() {
                return format!("  {name:<16} {} samples (all non-finite)", ys.len());
            }
            let y_min = finite.iter().cloned().fold(f64::INFINITY, f64::min);
            let y_max = finite.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let degenerate = ys.len() - finite.len();
            let mut line = format!("  {name:<16} {} samples | y=[{y_min:.1}, {y_max:.1}]", ys.len());
            if degenerate > 0 {
                line.push_str(&format!(" | {degenerate} non-finite"));
            }
            line
        }
        _ => format!(
            "  {name:<16} skipped (needs at least {} points, have {n_points})",
            model.min_points()
        ),
    }
}

fn point_ranges(points: &[Point]) -> Option<((f64, f64), (f64, f64))> {
    if points.is_empty() {
        return None;
    }
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in points {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }
    Some(((x_min, x_max), (y_min, y_max)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::recompute_overlays;

    #[test]
    fn summary_marks_skipped_and_disabled_models() {
        let points = vec![Point::new(0.0, 0.0), Point::new(100.0, 50.0)];
        let query = vec![10.0, 20.0];
        let params = ModelParams::default();
        let mut toggles = ModelToggles::all_on();
        toggles.ridge = false;

        let overlays = recompute_overlays(&points, &query, &params, &toggles);
        let summary = format_fit_summary(&points, &query, &params, &toggles, &overlays);

        assert!(summary.contains("Points: n=2"));
        assert!(summary.contains("Lagrange"));
        // Two points: polynomial LS is enabled but below its precondition.
        assert!(summary.contains("skipped (needs at least 3 points, have 2)"));
        assert!(summary.contains("disabled"));
    }
}
