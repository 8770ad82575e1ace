//! Shared recompute pipeline used by both the CLI and the TUI.
//!
//! Keeping this in one place pins down the trigger policy: overlays are
//! recomputed once per point commit (add, undo, clear) or query-grid change,
//! never per rendered frame. Both front-ends call `recompute_overlays` and
//! decide for themselves when a commit happened.

use crate::domain::{ModelKind, ModelParams, ModelToggles, OverlayFile, OverlaySeries, Point};
use crate::fit::{fit_gaussian_kernel, fit_lagrange, fit_polynomial_ls, fit_polynomial_ridge};

/// One y-series per model, `None` while the model is disabled.
///
/// A held series becomes logically stale as soon as the point set mutates;
/// the owner is expected to recompute before rendering after a commit.
#[derive(Debug, Clone, Default)]
pub struct OverlaySet {
    pub lagrange: Option<Vec<f64>>,
    pub gaussian: Option<Vec<f64>>,
    pub least_squares: Option<Vec<f64>>,
    pub ridge: Option<Vec<f64>>,
}

impl OverlaySet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, model: ModelKind) -> Option<&[f64]> {
        match model {
            ModelKind::Lagrange => self.lagrange.as_deref(),
            ModelKind::Gaussian => self.gaussian.as_deref(),
            ModelKind::LeastSquares => self.least_squares.as_deref(),
            ModelKind::Ridge => self.ridge.as_deref(),
        }
    }

    /// The series that were computed and met their model's precondition,
    /// i.e. those with one y-value per query sample.
    pub fn drawable(&self, query_len: usize) -> Vec<(ModelKind, &[f64])> {
        ModelKind::ALL
            .into_iter()
            .filter_map(|model| {
                self.get(model)
                    .filter(|ys| ys.len() == query_len)
                    .map(|ys| (model, ys))
            })
            .collect()
    }
}

/// Evaluate every enabled model against one point-set snapshot.
///
/// The four fits are independent pure computations, so the enabled ones run
/// in parallel. Disabled models come back as `None` and any previously held
/// series for them is simply dropped.
pub fn recompute_overlays(
    points: &[Point],
    query: &[f64],
    params: &ModelParams,
    toggles: &ModelToggles,
) -> OverlaySet {
    let ((lagrange, gaussian), (least_squares, ridge)) = rayon::join(
        || {
            rayon::join(
                || toggles.lagrange.then(|| fit_lagrange(points, query)),
                || toggles.gaussian.then(|| fit_gaussian_kernel(points, query)),
            )
        },
        || {
            rayon::join(
                || {
                    toggles
                        .least_squares
                        .then(|| fit_polynomial_ls(points, params.highest_degree, query))
                },
                || {
                    toggles.ridge.then(|| {
                        fit_polynomial_ridge(
                            points,
                            params.highest_degree,
                            params.ridge_lambda,
                            query,
                        )
                    })
                },
            )
        },
    );

    OverlaySet {
        lagrange,
        gaussian,
        least_squares,
        ridge,
    }
}

/// Assemble the JSON-exportable view of one recompute.
pub fn overlay_file(query: &[f64], params: &ModelParams, overlays: &OverlaySet) -> OverlayFile {
    let series = overlays
        .drawable(query.len())
        .into_iter()
        .map(|(model, ys)| OverlaySeries {
            model,
            y: ys.to_vec(),
        })
        .collect();

    OverlayFile {
        tool: "scatter".to_string(),
        params: *params,
        query: query.to_vec(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn disabled_models_are_not_computed() {
        let points = pts(&[(0.0, 0.0), (100.0, 50.0), (200.0, 20.0)]);
        let query = [10.0, 20.0, 30.0];
        let params = ModelParams::default();
        let mut toggles = ModelToggles::none();
        toggles.lagrange = true;

        let overlays = recompute_overlays(&points, &query, &params, &toggles);
        assert!(overlays.lagrange.is_some());
        assert!(overlays.gaussian.is_none());
        assert!(overlays.least_squares.is_none());
        assert!(overlays.ridge.is_none());
    }

    #[test]
    fn every_computed_series_matches_query_length() {
        let points = pts(&[(0.0, 5.0), (150.0, 30.0), (320.0, 10.0), (500.0, 45.0)]);
        let query: Vec<f64> = (0..200).map(|i| i as f64 * 2.5).collect();
        let params = ModelParams::clamped(4, 2.0);
        let toggles = ModelToggles::all_on();

        let overlays = recompute_overlays(&points, &query, &params, &toggles);
        for model in ModelKind::ALL {
            let ys = overlays.get(model).unwrap();
            assert_eq!(ys.len(), query.len(), "{}", model.display_name());
        }
        assert_eq!(overlays.drawable(query.len()).len(), 4);
    }

    #[test]
    fn two_points_feed_interpolators_but_not_polynomials() {
        let points = pts(&[(0.0, 0.0), (250.0, 80.0)]);
        let query = [50.0, 100.0];
        let overlays = recompute_overlays(
            &points,
            &query,
            &ModelParams::default(),
            &ModelToggles::all_on(),
        );

        assert_eq!(overlays.lagrange.as_deref().map(<[f64]>::len), Some(2));
        assert_eq!(overlays.gaussian.as_deref().map(<[f64]>::len), Some(2));
        // Enabled but below the precondition: computed as empty, not drawable.
        assert_eq!(overlays.least_squares.as_deref().map(<[f64]>::len), Some(0));
        assert_eq!(overlays.ridge.as_deref().map(<[f64]>::len), Some(0));
        assert_eq!(overlays.drawable(query.len()).len(), 2);
    }

    #[test]
    fn empty_point_set_yields_no_drawable_series() {
        let query = [1.0, 2.0];
        let overlays =
            recompute_overlays(&[], &query, &ModelParams::default(), &ModelToggles::all_on());
        assert!(overlays.drawable(query.len()).is_empty());
    }

    #[test]
    fn overlay_file_skips_empty_series() {
        let points = pts(&[(0.0, 0.0), (250.0, 80.0)]);
        let query = vec![50.0, 100.0];
        let params = ModelParams::default();
        let overlays = recompute_overlays(&points, &query, &params, &ModelToggles::all_on());

        let file = overlay_file(&query, &params, &overlays);
        assert_eq!(file.tool, "scatter");
        assert_eq!(file.query.len(), 2);
        let models: Vec<ModelKind> = file.series.iter().map(|s| s.model).collect();
        assert_eq!(models, vec![ModelKind::Lagrange, ModelKind::Gaussian]);
    }
}
