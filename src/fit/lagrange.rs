//! Lagrange interpolation.
//!
//! The classic basis form, evaluated directly:
//!
//! ```text
//! y(x) = Σᵢ yᵢ · Lᵢ(x),   Lᵢ(x) = Πⱼ≠ᵢ (x − xⱼ) / (xᵢ − xⱼ)
//! ```
//!
//! O(n²) per query sample. Fine for a hand-clicked scatter; a barycentric
//! rewrite would be the first step if point counts ever grow.

use crate::domain::Point;

/// Interpolate the full point set and evaluate at each query x.
///
/// Needs at least 2 points; otherwise the result is empty. Two points
/// sharing an x-coordinate make a basis denominator zero, so the output can
/// contain non-finite values. That is accepted behavior: the renderer draws
/// whatever comes out, gaps included.
pub fn fit_lagrange(points: &[Point], query: &[f64]) -> Vec<f64> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut ys = Vec::with_capacity(query.len());
    for &x in query {
        let mut y = 0.0;
        for (i, pi) in points.iter().enumerate() {
            let mut term = pi.y;
            for (j, pj) in points.iter().enumerate() {
                if i != j {
                    term *= (x - pj.x) / (pi.x - pj.x);
                }
            }
            y += term;
        }
        ys.push(y);
    }
    ys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn exact_quadratic_through_three_points() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
        let ys = fit_lagrange(&points, &[0.0, 1.0, 2.0]);
        assert_eq!(ys.len(), 3);
        assert!((ys[0] - 0.0).abs() < 1e-10);
        assert!((ys[1] - 1.0).abs() < 1e-10);
        assert!((ys[2] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn reproduces_every_node_value() {
        let points = pts(&[(10.0, 3.0), (42.0, -7.5), (100.0, 12.0), (250.0, 0.25)]);
        let query: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys = fit_lagrange(&points, &query);
        for (y, p) in ys.iter().zip(points.iter()) {
            assert!((y - p.y).abs() < 1e-8, "expected {} got {y}", p.y);
        }
    }

    #[test]
    fn fewer_than_two_points_yields_empty() {
        assert!(fit_lagrange(&[], &[0.0, 1.0]).is_empty());
        assert!(fit_lagrange(&pts(&[(1.0, 1.0)]), &[0.0, 1.0]).is_empty());
    }

    #[test]
    fn two_points_interpolate_a_line() {
        let points = pts(&[(0.0, 0.0), (2.0, 4.0)]);
        let ys = fit_lagrange(&points, &[1.0]);
        assert_eq!(ys.len(), 1);
        assert!((ys[0] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn duplicate_x_coordinates_produce_non_finite_output() {
        let points = pts(&[(1.0, 0.0), (1.0, 5.0), (2.0, 1.0)]);
        let ys = fit_lagrange(&points, &[1.5]);
        assert_eq!(ys.len(), 1);
        assert!(!ys[0].is_finite());
    }

    #[test]
    fn result_length_matches_query_length() {
        let points = pts(&[(0.0, 1.0), (5.0, 2.0), (9.0, -1.0)]);
        let query: Vec<f64> = (0..50).map(|i| i as f64 * 0.2).collect();
        assert_eq!(fit_lagrange(&points, &query).len(), query.len());
    }
}
