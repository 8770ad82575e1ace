//! Polynomial primitives: the monomial design matrix, Horner evaluation,
//! and the degree clamp.

use nalgebra::DMatrix;

/// Degree actually used for a polynomial fit over `n_points` points.
///
/// The fit is deliberately under-constrained relative to the point count
/// (`degree <= n - 2`) so the normal equations stay non-singular as points
/// are clicked one at a time. This clamp is required behavior, not an
/// optimization.
pub fn effective_degree(degree_hint: usize, n_points: usize) -> usize {
    degree_hint.min(n_points.saturating_sub(2))
}

/// Monomial design matrix: row `i` is `[1, x_i, x_i^2, ..., x_i^degree]`.
pub fn design_matrix(xs: &[f64], degree: usize) -> DMatrix<f64> {
    let n = xs.len();
    let mut a = DMatrix::<f64>::zeros(n, degree + 1);
    for (i, &x) in xs.iter().enumerate() {
        let mut power = 1.0;
        for j in 0..=degree {
            a[(i, j)] = power;
            power *= x;
        }
    }
    a
}

/// Evaluate a polynomial with coefficients in ascending power order.
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_clamps_to_point_count_minus_two() {
        assert_eq!(effective_degree(10, 4), 2);
        assert_eq!(effective_degree(2, 10), 2);
        assert_eq!(effective_degree(5, 7), 5);
        // Degenerate point counts saturate instead of underflowing.
        assert_eq!(effective_degree(3, 1), 0);
        assert_eq!(effective_degree(3, 0), 0);
    }

    #[test]
    fn design_matrix_rows_are_monomials() {
        let a = design_matrix(&[2.0, 3.0], 2);
        assert_eq!(a.nrows(), 2);
        assert_eq!(a.ncols(), 3);
        assert_eq!(a[(0, 0)], 1.0);
        assert_eq!(a[(0, 1)], 2.0);
        assert_eq!(a[(0, 2)], 4.0);
        assert_eq!(a[(1, 2)], 9.0);
    }

    #[test]
    fn horner_matches_direct_evaluation() {
        // 1 + 2x + 3x^2 at x = 2 -> 17
        let y = horner(&[1.0, 2.0, 3.0], 2.0);
        assert!((y - 17.0).abs() < 1e-12);

        // Empty coefficients evaluate to zero.
        assert_eq!(horner(&[], 5.0), 0.0);
    }
}
