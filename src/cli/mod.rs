//! Command-line interface: dataset reports and the browser entry point
pub mod commands;
mod report;

pub use commands::{Cli, Commands, run};
