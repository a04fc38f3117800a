//! URL routing core: decides which browser opens a URL, and how.
//!
//! ```text
//! RoutingConfig (loaded by config::loader)
//!     → RuleEngine::new (sorted, compiled snapshot)
//!     → resolve(url, source app) → LaunchOptions
//! ```

pub mod config;
pub mod observability;
pub mod routing;

pub use config::schema::{DomainMatcher, Rule, RoutingConfig, SourceMatcher};
pub use routing::{EngineHandle, LaunchOptions, Resolution, RuleEngine, SourceApp};
