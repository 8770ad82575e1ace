//! Polynomial fits: ordinary least squares and ridge regression.
//!
//! Both share one structure:
//!
//! - clamp the requested degree to `min(degree_hint, n - 2)`
//! - build the monomial design matrix `A`
//! - solve the normal equations `(AᵗA + λI) w = Aᵗy` (λ = 0 for the
//!   unregularized fit)
//! - evaluate the polynomial at each query x with Horner's rule
//!
//! Near-singular `AᵗA` (stacked x-coordinates, collinear points) is an
//! accepted limitation: the SVD path keeps the solve from crashing, but
//! result quality degrades and is drawn as-is.

use nalgebra::DVector;

use crate::domain::Point;
use crate::math::{design_matrix, effective_degree, horner, solve_dense};

/// Least-squares polynomial fit evaluated at each query x.
///
/// Needs more than 2 points; otherwise the result is empty.
pub fn fit_polynomial_ls(points: &[Point], degree_hint: usize, query: &[f64]) -> Vec<f64> {
    evaluate(points, degree_hint, 0.0, query)
}

/// Ridge-regularized polynomial fit evaluated at each query x.
///
/// Same structure and degree clamp as the least-squares fit; `lambda`
/// biases toward flatter polynomials, and `lambda = 0` reduces to the
/// unregularized fit up to solver tolerance.
pub fn fit_polynomial_ridge(
    points: &[Point],
    degree_hint: usize,
    lambda: f64,
    query: &[f64],
) -> Vec<f64> {
    evaluate(points, degree_hint, lambda, query)
}

fn evaluate(points: &[Point], degree_hint: usize, lambda: f64, query: &[f64]) -> Vec<f64> {
    match coefficients(points, degree_hint, lambda) {
        Some(coeffs) => query.iter().map(|&x| horner(&coeffs, x)).collect(),
        None => Vec::new(),
    }
}

/// Solve the (optionally ridge-augmented) normal equations for the
/// polynomial coefficients, ascending power order.
fn coefficients(points: &[Point], degree_hint: usize, lambda: f64) -> Option<Vec<f64>> {
    let n = points.len();
    if n <= 2 {
        return None;
    }

    let degree = effective_degree(degree_hint, n);
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let a = design_matrix(&xs, degree);
    let y = DVector::from_iterator(n, points.iter().map(|p| p.y));

    let mut ata = a.transpose() * &a;
    let atb = a.transpose() * y;
    if lambda != 0.0 {
        for i in 0..ata.nrows() {
            ata[(i, i)] += lambda;
        }
    }

    let w = solve_dense(&ata, &atb)?;
    Some(w.iter().copied().collect())
}
