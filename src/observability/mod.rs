//! Observability and telemetry.
//!
//! Structured logging via `tracing`, written to stderr so it never mixes
//! with rendered tables or exported documents on stdout.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// The filter comes from `PRIO_LOG` (falling back to `RUST_LOG`); with
/// neither set, `--verbose` selects `debug`, otherwise `warn`. Repeated
/// initialization is a no-op, which keeps tests safe.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    let filter = std::env::var("PRIO_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(|_| EnvFilter::new(default_level), EnvFilter::new);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(false);
        init(true);
    }
}
