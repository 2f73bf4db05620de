//! Logging bootstrap for the CLI.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Initializes logging. Call once at startup.
///
/// - Level: INFO by default, or overridden by the RUST_LOG env var.
/// - Colored only when stderr is attached to a terminal.
/// - Events go to stderr so the report or JSON on stdout stays clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .try_init();
}
