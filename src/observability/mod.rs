//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config + routing produce:
//!     → tracing events (rule matched, pattern disabled, config loaded)
//!
//! Consumers:
//!     → logging.rs (fmt subscriber on stderr, filtered by RUST_LOG)
//! ```
//!
//! # Design Decisions
//! - Structured fields (rule id, target, path) instead of formatted strings
//! - Per-URL decisions log at debug/trace; authoring problems at warn

pub mod logging;

pub use logging::init_logging;
