//! Dense linear solver.
//!
//! Every model here reduces to one small dense solve per recompute:
//!
//! - Gaussian-kernel regression: the square kernel system `K w = y`
//! - both polynomial fits: the normal equations `(AᵗA [+ λI]) w = Aᵗy`
//!
//! Implementation choices:
//! - We use SVD rather than an explicit inverse. Clicked points can easily
//!   produce near-singular systems (stacked x-coordinates, degree close to
//!   the point count), and SVD degrades gracefully where an inverse blows up.
//! - The systems are tiny (at most points x points), so SVD cost is
//!   irrelevant next to the per-frame render work.

use nalgebra::{DMatrix, DVector};

/// Solve a square or tall dense system in the least-squares sense.
///
/// Returns `None` if no tolerance yields finite coefficients, i.e. the
/// system is too ill-conditioned to produce usable output.
pub fn solve_dense(a: &DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = a.clone().svd(true, true);

    // Try progressively looser tolerances if the strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(x) = svd.solve(b, tol) {
            if x.iter().all(|v| v.is_finite()) {
                return Some(x);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_simple_square_system() {
        // 2x + y = 5, x + 3y = 10
        let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let b = DVector::from_row_slice(&[5.0, 10.0]);

        let x = solve_dense(&a, &b).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-10);
        assert!((x[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn solves_tall_least_squares_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let a = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let b = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let x = solve_dense(&a, &b).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-10);
        assert!((x[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn singular_system_still_returns_finite_output() {
        // Rank-deficient: second row is a multiple of the first. SVD picks a
        // minimum-norm solution instead of failing.
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 2.0, 2.0]);
        let b = DVector::from_row_slice(&[2.0, 4.0]);

        let x = solve_dense(&a, &b).unwrap();
        assert!(x.iter().all(|v| v.is_finite()));
    }
}
