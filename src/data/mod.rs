//! Synthetic scatter generation for demos and quick CLI runs.

mod sample;

pub use sample::generate_scatter;
