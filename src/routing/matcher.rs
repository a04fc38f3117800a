//! Route matching logic.
//!
//! # Responsibilities
//! - Match the source application (exact name, exact identifier, name regex)
//! - Match the URL host (exact, wildcard/regex, substring)
//! - Compile patterns once, ahead of evaluation
//!
//! # Design Decisions
//! - Host matching is case-insensitive; source names are case-sensitive
//! - Port, path and query never take part in host matching
//! - An empty matcher never matches
//! - A pattern that fails to compile never matches; it is not an error

use std::borrow::Cow;

use fancy_regex::Regex;
use url::{Host, Url};

use crate::config::schema::{DomainMatcher, SourceMatcher};
use crate::routing::engine::SourceApp;
use crate::routing::pattern::{compile_host_pattern, compile_name_pattern, is_match};

/// Inputs a rule condition is evaluated against.
#[derive(Debug, Clone)]
pub struct RouteRequest<'a> {
    pub host: Option<Cow<'a, str>>,
    pub source: Option<&'a SourceApp>,
}

impl<'a> RouteRequest<'a> {
    pub fn new(url: &'a Url, source: Option<&'a SourceApp>) -> Self {
        Self {
            host: url_host(url),
            source,
        }
    }
}

/// Host subcomponent of a URL. IPv6 literals come without their brackets.
pub fn url_host(url: &Url) -> Option<Cow<'_, str>> {
    match url.host()? {
        Host::Ipv6(addr) => Some(Cow::Owned(addr.to_string())),
        _ => url.host_str().map(Cow::Borrowed),
    }
}

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, request: &RouteRequest<'_>) -> bool;
}

#[derive(Debug)]
enum CompiledPattern {
    Absent,
    Valid(Regex),
    Invalid(String),
}

impl CompiledPattern {
    fn error(&self) -> Option<&str> {
        match self {
            CompiledPattern::Invalid(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Compiled form of a [`SourceMatcher`].
#[derive(Debug)]
pub struct SourceCondition {
    exact_name: Option<String>,
    exact_identifier: Option<String>,
    pattern: CompiledPattern,
}

impl SourceCondition {
    pub fn compile(matcher: &SourceMatcher) -> Self {
        let pattern = match &matcher.pattern {
            None => CompiledPattern::Absent,
            Some(p) => match compile_name_pattern(p) {
                Ok(regex) => CompiledPattern::Valid(regex),
                Err(e) => CompiledPattern::Invalid(e.to_string()),
            },
        };

        Self {
            exact_name: matcher.exact_name.clone(),
            exact_identifier: matcher.exact_identifier.clone(),
            pattern,
        }
    }

    /// A name or identifier hit decides immediately; otherwise the pattern,
    /// if any, decides.
    pub fn evaluate(&self, app_name: &str, app_identifier: &str) -> bool {
        if self.exact_name.as_deref() == Some(app_name) {
            return true;
        }
        if self.exact_identifier.as_deref() == Some(app_identifier) {
            return true;
        }
        match &self.pattern {
            CompiledPattern::Valid(regex) => is_match(regex, app_name),
            _ => false,
        }
    }

    /// Compile error of the name pattern, if it failed.
    pub fn pattern_error(&self) -> Option<&str> {
        self.pattern.error()
    }
}

impl Matcher for SourceCondition {
    fn matches(&self, request: &RouteRequest<'_>) -> bool {
        request
            .source
            .map(|app| self.evaluate(&app.name, &app.identifier))
            .unwrap_or(false)
    }
}

/// Compiled form of a [`DomainMatcher`]. Literals are stored lowercased.
#[derive(Debug)]
pub struct DomainCondition {
    exact: Option<String>,
    wildcard: CompiledPattern,
    contains: Option<String>,
}

impl DomainCondition {
    pub fn compile(matcher: &DomainMatcher) -> Self {
        let wildcard = match &matcher.wildcard {
            None => CompiledPattern::Absent,
            Some(p) => match compile_host_pattern(p) {
                Ok(regex) => CompiledPattern::Valid(regex),
                Err(e) => CompiledPattern::Invalid(e.to_string()),
            },
        };

        Self {
            exact: matcher.exact.as_ref().map(|h| h.to_lowercase()),
            wildcard,
            contains: matcher.contains.as_ref().map(|c| c.to_lowercase()),
        }
    }

    /// The first populated field decides.
    pub fn matches_host(&self, host: &str) -> bool {
        let host = host.to_lowercase();

        if let Some(exact) = &self.exact {
            return *exact == host;
        }
        match &self.wildcard {
            CompiledPattern::Valid(regex) => return is_match(regex, &host),
            CompiledPattern::Invalid(_) => return false,
            CompiledPattern::Absent => {}
        }
        if let Some(fragment) = &self.contains {
            return host.contains(fragment.as_str());
        }
        false
    }

    /// Compile error of the wildcard pattern, if it failed.
    pub fn pattern_error(&self) -> Option<&str> {
        self.wildcard.error()
    }
}

impl Matcher for DomainCondition {
    fn matches(&self, request: &RouteRequest<'_>) -> bool {
        request
            .host
            .as_deref()
            .map(|host| self.matches_host(host))
            .unwrap_or(false)
    }
}

impl SourceMatcher {
    /// Evaluate against a source application, compiling the pattern on demand.
    /// The engine uses precompiled [`SourceCondition`]s instead.
    pub fn evaluate(&self, app_name: &str, app_identifier: &str) -> bool {
        SourceCondition::compile(self).evaluate(app_name, app_identifier)
    }
}

impl DomainMatcher {
    /// Evaluate against a URL's host. A URL without a host never matches.
    pub fn evaluate(&self, url: &Url) -> bool {
        url_host(url)
            .map(|host| DomainCondition::compile(self).matches_host(&host))
            .unwrap_or(false)
    }
}
