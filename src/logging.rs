#![cfg(feature = "std")]

use tracing_subscriber::EnvFilter;

/// Initialize logging with a filter taken from the `BATTLESHIP_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid. Output goes to stderr so it
/// never mixes with CSV written to stdout.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("BATTLESHIP_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
