//! Configuration schema definitions.
//!
//! This module defines the persisted routing document. All types derive Serde
//! traits; key names follow the on-disk contract (`defaultBrowser`, `browser`,
//! `bundle_id`, `new_window`), with aliases accepted on read.
//!
//! Scalar fields are declared before nested tables so the same types serialize
//! cleanly to TOML as well as JSON.

use serde::{Deserialize, Serialize};

use crate::config::migration::CURRENT_VERSION;

/// Target used when no document exists yet.
pub const DEFAULT_TARGET: &str = "com.apple.Safari";

fn default_version() -> u32 {
    1
}

/// Root routing document: a default target plus prioritized rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoutingConfig {
    /// Schema version. Absent on read means `1`.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Target used when no rule matches.
    #[serde(rename = "defaultBrowser", alias = "defaultTarget")]
    pub default_target: String,

    /// Rules in authoring order. Evaluation order is decided by priority.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RoutingConfig {
    /// Create a config with no rules at the current schema version.
    pub fn new(default_target: impl Into<String>) -> Self {
        Self {
            version: CURRENT_VERSION,
            default_target: default_target.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule, returning the updated config.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

/// A prioritized mapping from (source, domain) conditions to a target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rule {
    /// Rule identifier for logging and diagnostics.
    pub id: String,

    /// Rule priority (higher = checked first).
    #[serde(default)]
    pub priority: i64,

    /// Target to launch when the rule applies.
    #[serde(rename = "browser", alias = "target")]
    pub target: String,

    /// Open in private/incognito mode. Absent means `false`.
    #[serde(rename = "private", default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,

    /// Open in a new window. Absent means `false`.
    #[serde(default, alias = "newWindow", skip_serializing_if = "Option::is_none")]
    pub new_window: Option<bool>,

    /// Condition on the application that asked to open the URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMatcher>,

    /// Condition on the URL host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainMatcher>,
}

impl Rule {
    /// Create a rule with no conditions. It stays ineligible until a source
    /// or domain matcher is attached.
    pub fn new(id: impl Into<String>, priority: i64, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            priority,
            target: target.into(),
            is_private: None,
            new_window: None,
            source: None,
            domain: None,
        }
    }

    pub fn with_source(mut self, source: SourceMatcher) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_domain(mut self, domain: DomainMatcher) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn private(mut self, enabled: bool) -> Self {
        self.is_private = Some(enabled);
        self
    }

    pub fn new_window(mut self, enabled: bool) -> Self {
        self.new_window = Some(enabled);
        self
    }

    /// A rule without any condition can never apply.
    pub fn is_eligible(&self) -> bool {
        self.source.is_some() || self.domain.is_some()
    }

    pub fn launch_private(&self) -> bool {
        self.is_private.unwrap_or(false)
    }

    pub fn launch_new_window(&self) -> bool {
        self.new_window.unwrap_or(false)
    }
}

/// Matches the source application. Fields are consulted in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceMatcher {
    /// Case-sensitive display name.
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub exact_name: Option<String>,

    /// Stable application identifier (bundle id).
    #[serde(
        rename = "bundle_id",
        alias = "bundleId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub exact_identifier: Option<String>,

    /// Regular expression searched in the display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl SourceMatcher {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            exact_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn identifier(identifier: impl Into<String>) -> Self {
        Self {
            exact_identifier: Some(identifier.into()),
            ..Self::default()
        }
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exact_name.is_none() && self.exact_identifier.is_none() && self.pattern.is_none()
    }
}

/// Matches the URL host. Fields are consulted in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DomainMatcher {
    /// Case-insensitive host equality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<String>,

    /// Glob host pattern (`*` = any run of characters), or a raw regex when
    /// it starts with `^`.
    #[serde(
        rename = "pattern",
        alias = "wildcard",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub wildcard: Option<String>,

    /// Case-insensitive substring of the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
}

impl DomainMatcher {
    pub fn exact(host: impl Into<String>) -> Self {
        Self {
            exact: Some(host.into()),
            ..Self::default()
        }
    }

    pub fn wildcard(pattern: impl Into<String>) -> Self {
        Self {
            wildcard: Some(pattern.into()),
            ..Self::default()
        }
    }

    pub fn contains(fragment: impl Into<String>) -> Self {
        Self {
            contains: Some(fragment.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_none() && self.wildcard.is_none() && self.contains.is_none()
    }
}
