//! Shared domain types for the canvas and the fitting core.

mod types;

pub use types::*;
