//! CLI module
//!
//! Command-line interface for the annual import: one positional `year`
//! argument plus configuration flags.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
