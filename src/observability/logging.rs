//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the binary
//! - Resolve the log filter from `RUST_LOG` or a CLI-supplied directive
//!
//! # Design Decisions
//! - Library code only emits `tracing` events; installing a subscriber is
//!   the binary's call
//! - Logs go to stderr so stdout stays machine-readable

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_DIRECTIVE: &str = "browser_router=info";

/// Build the filter: an explicit directive wins, then `RUST_LOG`, then the default.
pub fn env_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("Invalid log directive '{}': {}. Using default.", directive, e);
            EnvFilter::new(DEFAULT_DIRECTIVE)
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

/// Install the global subscriber. Safe to call once per process; later
/// calls are ignored.
pub fn init_logging(directive: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
