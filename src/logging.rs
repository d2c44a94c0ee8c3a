//! Diagnostic output.
//!
//! Everything goes to stderr so that stdout stays free for the usage text.
//! `RUST_LOG` overrides the level chosen from the command line.

use tracing_subscriber::EnvFilter;

/// Filter directives used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "info,urlsync=debug"
    } else {
        "info"
    }
}

/// Initialize logging to stderr. `verbose` enables the debug trail.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
