//! CLI layer for linkchain.
//!
//! Provides the command-line interface using clap, with commands for
//! driving the chain engine and the standalone routines.

pub mod commands;
pub mod logging;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use logging::init_logging;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
