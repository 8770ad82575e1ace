//! The curve-fitting core.
//!
//! Four independent operations, each a pure function of
//! `(points, query x-samples, model-specific parameters)` returning one
//! y-value per query sample, or an empty vector when the model's minimum
//! point count is not met. No operation raises errors or mutates its
//! inputs, so the caller is free to evaluate the enabled models in
//! parallel against one point-set snapshot.

mod grid;
mod kernel;
mod lagrange;
mod polynomial;

pub use grid::{uniform_grid, DEFAULT_STEP, EDGE_MARGIN};
pub use kernel::{fit_gaussian_kernel, KERNEL_SIGMA};
pub use lagrange::fit_lagrange;
pub use polynomial::{fit_polynomial_ls, fit_polynomial_ridge};
