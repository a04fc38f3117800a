//! Shared access to the current rule engine.
//!
//! Reconfiguration builds a complete new [`RuleEngine`] and swaps it in
//! atomically. Callers holding the previous `Arc` finish against the old
//! rules; nothing is mutated in place.

use std::sync::Arc;

use arc_swap::ArcSwap;
use url::Url;

use crate::config::schema::RoutingConfig;
use crate::routing::engine::{LaunchOptions, RuleEngine, SourceApp};

#[derive(Debug)]
pub struct EngineHandle {
    current: ArcSwap<RuleEngine>,
}

impl EngineHandle {
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(RuleEngine::new(config)),
        }
    }

    /// Engine in effect right now.
    pub fn current(&self) -> Arc<RuleEngine> {
        self.current.load_full()
    }

    /// Replace the engine with one built from `config`.
    pub fn reload(&self, config: &RoutingConfig) {
        let engine = RuleEngine::new(config);
        self.current.store(Arc::new(engine));
        tracing::info!(rules = config.rules.len(), "Routing rules reloaded");
    }

    pub fn resolve(&self, url: &Url, source: Option<&SourceApp>) -> LaunchOptions {
        self.current.load().resolve(url, source)
    }
}
