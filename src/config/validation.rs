//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic checks serde cannot express
//! - Flag rules that can never apply (no conditions, empty matchers, bad patterns)
//! - Detect duplicate ids and priority ties
//!
//! # Design Decisions
//! - Returns all findings, not just the first
//! - Findings are warnings: the engine tolerates every one of them, so a
//!   flawed document still loads and still routes to the default target

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::config::schema::RoutingConfig;
use crate::routing::pattern::{compile_host_pattern, compile_name_pattern};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationWarning {
    #[error("rule '{id}' has neither a source nor a domain condition and never applies")]
    EmptyRule { id: String },

    #[error("rule '{id}' has a source matcher with no fields set")]
    EmptySourceMatcher { id: String },

    #[error("rule '{id}' has a domain matcher with no fields set")]
    EmptyDomainMatcher { id: String },

    #[error("rule '{id}' source pattern does not compile: {reason}")]
    InvalidSourcePattern { id: String, reason: String },

    #[error("rule '{id}' domain pattern does not compile: {reason}")]
    InvalidDomainPattern { id: String, reason: String },

    #[error("rule id '{id}' is used more than once")]
    DuplicateId { id: String },

    #[error("rule '{id}' has an empty target")]
    EmptyTarget { id: String },

    #[error("rules {ids:?} share priority {priority}; authoring order decides between them")]
    SharedPriority { priority: i64, ids: Vec<String> },
}

/// Collect every authoring issue in the document.
pub fn validate_config(config: &RoutingConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();
    let mut by_priority: BTreeMap<i64, Vec<String>> = BTreeMap::new();

    for rule in &config.rules {
        let id = rule.id.clone();

        if !seen.insert(rule.id.as_str()) {
            warnings.push(ValidationWarning::DuplicateId { id: id.clone() });
        }
        if rule.target.trim().is_empty() {
            warnings.push(ValidationWarning::EmptyTarget { id: id.clone() });
        }
        if !rule.is_eligible() {
            warnings.push(ValidationWarning::EmptyRule { id: id.clone() });
        }

        if let Some(source) = &rule.source {
            if source.is_empty() {
                warnings.push(ValidationWarning::EmptySourceMatcher { id: id.clone() });
            }
            if let Some(pattern) = &source.pattern {
                if let Err(e) = compile_name_pattern(pattern) {
                    warnings.push(ValidationWarning::InvalidSourcePattern {
                        id: id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if let Some(domain) = &rule.domain {
            if domain.is_empty() {
                warnings.push(ValidationWarning::EmptyDomainMatcher { id: id.clone() });
            }
            if let Some(pattern) = &domain.wildcard {
                if let Err(e) = compile_host_pattern(pattern) {
                    warnings.push(ValidationWarning::InvalidDomainPattern {
                        id: id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        by_priority.entry(rule.priority).or_default().push(id);
    }

    for (priority, ids) in by_priority.into_iter().rev() {
        if ids.len() > 1 {
            warnings.push(ValidationWarning::SharedPriority { priority, ids });
        }
    }

    warnings
}
