//! File input/output: points CSV ingest and overlay exports.

pub mod overlay;
pub mod points;
