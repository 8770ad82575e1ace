//! `scatter-curves` library crate.
//!
//! The binary (`scatter`) is a thin wrapper around this library so that:
//!
//! - the fitting core is testable without spawning processes
//! - modules are reusable (e.g., future GUI front-ends, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod report;
pub mod tui;
