//! Logging initialization
//!
//! Logs go to stderr so program output on stdout stays clean.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Default filter directive
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "finch=debug"
    } else {
        "finch=info"
    }
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins over `verbose` when set. Later calls are no-ops.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
