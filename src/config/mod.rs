//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON/TOML)
//!     → loader.rs (parse & deserialize)
//!     → migration.rs (normalize schema version)
//!     → validation.rs (authoring diagnostics, logged)
//!     → RoutingConfig (immutable value)
//!     → handed to routing::RuleEngine
//!
//! On edit:
//!     new RoutingConfig
//!     → new RuleEngine
//!     → atomic swap in routing::EngineHandle
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; an edit produces a new value
//! - Optional fields default at the serde boundary (version = 1, flags = false)
//! - Validation never rejects rules; only unreadable documents fail to load

pub mod loader;
pub mod migration;
pub mod schema;
pub mod validation;

pub use loader::{default_config_path, load_config, load_or_default, save_config, ConfigError};
pub use migration::{migrate, MigrationError, CURRENT_VERSION};
pub use schema::{DomainMatcher, Rule, RoutingConfig, SourceMatcher, DEFAULT_TARGET};
pub use validation::{validate_config, ValidationWarning};
