//! Command-line interface
//!
//! Argument parsing and the per-table export loop.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
