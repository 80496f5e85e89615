//! Logging init: stderr only, so stdout stays clean for command output.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides the default level;
/// `verbose` raises the crate's own logs to debug.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "warn,lil_core=debug,lil=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
