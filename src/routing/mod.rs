//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming URL event (url, optional source app)
//!     → engine.rs (walk rules in priority order)
//!     → matcher.rs (evaluate source and domain conditions)
//!     → Return: LaunchOptions of the first matching rule, or the default target
//!
//! Rule Compilation (per config version):
//!     RoutingConfig.rules
//!     → Stable sort by priority (descending)
//!     → Compile matchers (pattern.rs: wildcard → anchored regex)
//!     → Freeze as immutable RuleEngine
//!     → handle.rs swaps it in atomically
//! ```
//!
//! # Design Decisions
//! - Rules compiled once, immutable at runtime
//! - Deterministic: same input always matches same rule
//! - First match wins (ordered by priority, then authoring order)
//! - No error path: anything malformed simply does not match

pub mod engine;
pub mod handle;
pub mod matcher;
pub mod pattern;

pub use engine::{LaunchOptions, Resolution, RuleEngine, SourceApp};
pub use handle::EngineHandle;
pub use matcher::{DomainCondition, Matcher, RouteRequest, SourceCondition};
