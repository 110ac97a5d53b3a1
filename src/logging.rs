//! Diagnostic logging on stderr. Prompts and reports never go through here.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count. `RUST_LOG` takes precedence.
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: u8) {
    let filter = level_for(verbose);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
