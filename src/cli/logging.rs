//! Tracing subscriber setup for the binary.

use crate::error::{Error, Result};
use std::io;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Maps the `-v` count to a filter directive.
#[must_use]
pub const fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes priority over the verbosity flag. Logs go to stderr so
/// command output on stdout stays machine-readable.
///
/// # Errors
///
/// Returns [`Error::Config`] if a global subscriber is already installed.
pub fn init_logging(verbose: u8) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(verbosity_directive(verbose))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()
        .map_err(|e| Error::Config {
            message: format!("failed to initialize logging: {e}"),
        })
}
