//! CLI command implementations.

mod display;
mod snapshot;

pub mod clusters;
pub mod path;
pub mod stats;
