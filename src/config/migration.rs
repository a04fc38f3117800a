//! Schema versioning.
//!
//! Documents written before the `version` key existed decode as version 1
//! (see `schema.rs`). An explicit `0` marks a legacy pre-versioned export and
//! is upgraded in place; the rule shape did not change between them.

use thiserror::Error;

use crate::config::schema::RoutingConfig;

/// Newest document version this build understands.
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MigrationError {
    #[error("config version {found} is newer than supported version {supported}")]
    Unsupported { found: u32, supported: u32 },
}

/// Bring a decoded document up to [`CURRENT_VERSION`].
pub fn migrate(mut config: RoutingConfig) -> Result<RoutingConfig, MigrationError> {
    match config.version {
        0 => {
            tracing::info!(from = 0, to = CURRENT_VERSION, "Migrating legacy config");
            config.version = CURRENT_VERSION;
            Ok(config)
        }
        CURRENT_VERSION => Ok(config),
        found => Err(MigrationError::Unsupported {
            found,
            supported: CURRENT_VERSION,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_version_passes_through() {
        let config = RoutingConfig::new("safari");
        assert_eq!(migrate(config.clone()).unwrap(), config);
    }

    #[test]
    fn test_legacy_version_upgraded() {
        let mut config = RoutingConfig::new("safari");
        config.version = 0;
        assert_eq!(migrate(config).unwrap().version, CURRENT_VERSION);
    }

    #[test]
    fn test_future_version_rejected() {
        let mut config = RoutingConfig::new("safari");
        config.version = 7;
        assert_eq!(
            migrate(config),
            Err(MigrationError::Unsupported { found: 7, supported: 1 })
        );
    }
}
