//! Rule evaluation.
//!
//! # Responsibilities
//! - Snapshot and priority-sort rules once, at construction
//! - Precompile every pattern
//! - Resolve `(url, source app)` to [`LaunchOptions`]
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Stable sort: equal priorities keep authoring order
//! - First match wins
//! - Never fails: bad patterns, hostless URLs and unknown callers degrade to
//!   "rule does not match", and the default target is always available

use serde::Serialize;
use url::Url;

use crate::config::schema::{Rule, RoutingConfig};
use crate::routing::matcher::{DomainCondition, Matcher, RouteRequest, SourceCondition};

/// The application that asked to open the URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceApp {
    /// Display name, e.g. `Slack`.
    pub name: String,
    /// Stable identifier, e.g. `com.tinyspeck.slackmacgap`.
    pub identifier: String,
}

impl SourceApp {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
        }
    }
}

/// What to launch, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchOptions {
    #[serde(rename = "browser")]
    pub target: String,
    #[serde(rename = "private")]
    pub is_private: bool,
    #[serde(rename = "newWindow")]
    pub new_window: bool,
}

impl LaunchOptions {
    pub fn from_rule(rule: &Rule) -> Self {
        Self {
            target: rule.target.clone(),
            is_private: rule.launch_private(),
            new_window: rule.launch_new_window(),
        }
    }

    /// Options for the default target: no modifiers.
    pub fn fallback(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_private: false,
            new_window: false,
        }
    }
}

/// A decision together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    #[serde(flatten)]
    pub options: LaunchOptions,
    /// `None` when the default target was used.
    pub rule: Option<String>,
}

#[derive(Debug)]
struct CompiledRule {
    rule: Rule,
    source: Option<SourceCondition>,
    domain: Option<DomainCondition>,
}

impl CompiledRule {
    fn compile(rule: Rule) -> Self {
        let source = rule.source.as_ref().map(SourceCondition::compile);
        let domain = rule.domain.as_ref().map(DomainCondition::compile);

        if let Some(reason) = source.as_ref().and_then(|s| s.pattern_error()) {
            tracing::warn!(rule = %rule.id, "Source pattern disabled: {}", reason);
        }
        if let Some(reason) = domain.as_ref().and_then(|d| d.pattern_error()) {
            tracing::warn!(rule = %rule.id, "Domain pattern disabled: {}", reason);
        }

        Self { rule, source, domain }
    }

    fn matches(&self, request: &RouteRequest<'_>) -> bool {
        if self.source.is_none() && self.domain.is_none() {
            return false;
        }
        if let Some(source) = &self.source {
            if !source.matches(request) {
                return false;
            }
        }
        if let Some(domain) = &self.domain {
            if !domain.matches(request) {
                return false;
            }
        }
        true
    }
}

/// Decision function built once per config version.
#[derive(Debug)]
pub struct RuleEngine {
    default_target: String,
    rules: Vec<CompiledRule>,
}

impl RuleEngine {
    /// Snapshot the config's rules, sorted by descending priority.
    pub fn new(config: &RoutingConfig) -> Self {
        let mut rules = config.rules.clone();
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));

        let rules: Vec<CompiledRule> = rules.into_iter().map(CompiledRule::compile).collect();

        tracing::debug!(
            rules = rules.len(),
            default_target = %config.default_target,
            "Rule engine built"
        );

        Self {
            default_target: config.default_target.clone(),
            rules,
        }
    }

    /// Pick the target for `url`, opened by `source` (if known).
    pub fn resolve(&self, url: &Url, source: Option<&SourceApp>) -> LaunchOptions {
        self.explain(url, source).options
    }

    /// Like [`resolve`](Self::resolve) for raw input. An unparseable URL
    /// goes to the default target.
    pub fn resolve_str(&self, url: &str, source: Option<&SourceApp>) -> LaunchOptions {
        match Url::parse(url) {
            Ok(url) => self.resolve(&url, source),
            Err(e) => {
                tracing::debug!(url, "Unparseable URL ({}), using default target", e);
                LaunchOptions::fallback(&self.default_target)
            }
        }
    }

    /// Resolve and report which rule, if any, decided.
    pub fn explain(&self, url: &Url, source: Option<&SourceApp>) -> Resolution {
        let request = RouteRequest::new(url, source);

        for compiled in &self.rules {
            if compiled.matches(&request) {
                tracing::debug!(rule = %compiled.rule.id, target = %compiled.rule.target, "Rule matched");
                return Resolution {
                    options: LaunchOptions::from_rule(&compiled.rule),
                    rule: Some(compiled.rule.id.clone()),
                };
            }
        }

        tracing::trace!(url = %url, target = %self.default_target, "No rule matched");
        Resolution {
            options: LaunchOptions::fallback(&self.default_target),
            rule: None,
        }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }

    pub fn default_target(&self) -> &str {
        &self.default_target
    }
}
