//! Diagnostic logging setup.
//!
//! User-facing progress goes to stdout through [`crate::output`]. Diagnostics
//! (missing category folders, skipped files, load failures) go through
//! `tracing` to stderr, so piping the progress output stays clean.
//!
//! `RUST_LOG` wins when set; otherwise `-v` selects `debug` and the default
//! is `warn`.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is not set.
pub fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbose: bool) {
    let level = default_level(verbose);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gallery_manifest={level}")));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}
