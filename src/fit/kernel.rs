//! Gaussian-kernel regression.
//!
//! A Gaussian-process-style smoother with a fixed bandwidth:
//!
//! - build the n×n kernel matrix `K` with `K[i][i] = 1` and
//!   `K[i][j] = exp(-0.5 (xⱼ - xᵢ)² / σ²)` for `i ≠ j`
//! - solve `K w = y` for the weights
//! - evaluate `y(x) = Σᵢ wᵢ exp(-0.5 (x - xᵢ)² / σ²)`
//!
//! `K` is not guaranteed symmetric positive definite once points crowd
//! together, so the solve goes through the SVD path, which tolerates
//! near-singular systems instead of crashing.

use nalgebra::{DMatrix, DVector};

use crate::domain::Point;
use crate::math::solve_dense;

/// Fixed kernel bandwidth in canvas units.
///
/// Sized for a pixel-like canvas (hundreds of units across); preserved
/// exactly for compatibility with the canvas behavior this reproduces.
pub const KERNEL_SIGMA: f64 = 100.0;

/// Fit kernel weights through the points and evaluate at each query x.
///
/// Needs at least 2 points. Returns empty if the precondition fails or the
/// kernel system is so degenerate that no finite weights exist.
pub fn fit_gaussian_kernel(points: &[Point], query: &[f64]) -> Vec<f64> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let inv_sigma_sq = 1.0 / (KERNEL_SIGMA * KERNEL_SIGMA);

    let mut k = DMatrix::<f64>::zeros(n, n);
    let mut y = DVector::<f64>::zeros(n);
    for i in 0..n {
        for j in 0..n {
            k[(i, j)] = if i == j {
                1.0
            } else {
                let d = points[j].x - points[i].x;
                (-0.5 * d * d * inv_sigma_sq).exp()
            };
        }
        y[i] = points[i].y;
    }

    let Some(w) = solve_dense(&k, &y) else {
        return Vec::new();
    };

    query
        .iter()
        .map(|&x| {
            points
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let d = x - p.x;
                    w[i] * (-0.5 * d * d * inv_sigma_sq).exp()
                })
                .sum::<f64>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn reproduces_training_values_for_well_separated_points() {
        // Spacing of 300 units against sigma=100 keeps K well conditioned,
        // so the smoother interpolates the training data almost exactly.
        let points = pts(&[(0.0, 10.0), (300.0, -5.0), (600.0, 25.0)]);
        let query: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys = fit_gaussian_kernel(&points, &query);
        assert_eq!(ys.len(), 3);
        for (y, p) in ys.iter().zip(points.iter()) {
            assert!((y - p.y).abs() < 1e-6, "expected {} got {y}", p.y);
        }
    }

    #[test]
    fn fewer_than_two_points_yields_empty() {
        assert!(fit_gaussian_kernel(&[], &[0.0]).is_empty());
        assert!(fit_gaussian_kernel(&pts(&[(1.0, 1.0)]), &[0.0]).is_empty());
    }

    #[test]
    fn two_points_produce_output() {
        let points = pts(&[(0.0, 0.0), (200.0, 10.0)]);
        let ys = fit_gaussian_kernel(&points, &[0.0, 100.0, 200.0]);
        assert_eq!(ys.len(), 3);
        assert!(ys.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn coincident_points_do_not_panic() {
        // Duplicate x-coordinates make K singular; the SVD solve still
        // returns something (or the fit returns empty), never a crash.
        let points = pts(&[(50.0, 1.0), (50.0, 2.0), (400.0, 3.0)]);
        let ys = fit_gaussian_kernel(&points, &[0.0, 50.0, 400.0]);
        assert!(ys.is_empty() || ys.len() == 3);
    }

    #[test]
    fn result_length_matches_query_length() {
        let points = pts(&[(0.0, 1.0), (150.0, 4.0), (340.0, 2.0)]);
        let query: Vec<f64> = (0..100).map(|i| i as f64 * 4.0).collect();
        assert_eq!(fit_gaussian_kernel(&points, &query).len(), query.len());
    }
}
