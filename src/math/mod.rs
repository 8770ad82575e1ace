//! Numerical primitives shared by the fitting operations.

mod poly;
mod solve;

pub use poly::{design_matrix, effective_degree, horner};
pub use solve::solve_dense;
