//! Shared fixtures for integration and property testing.

#![allow(dead_code)]

use browser_router::{DomainMatcher, Rule, RoutingConfig, RuleEngine, SourceApp, SourceMatcher};
use url::Url;

pub const SAFARI: &str = "safari";
pub const CHROME: &str = "chrome";
pub const FIREFOX: &str = "firefox";

pub fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

pub fn slack() -> SourceApp {
    SourceApp::new("Slack", "com.slack")
}

pub fn engine_for(rules: Vec<Rule>) -> RuleEngine {
    let mut config = RoutingConfig::new(SAFARI);
    config.rules = rules;
    RuleEngine::new(&config)
}

/// A mixed document exercising every matcher kind and both modifiers.
pub fn representative_config() -> RoutingConfig {
    RoutingConfig::new(SAFARI)
        .with_rule(
            Rule::new("slack-github", 300, CHROME)
                .with_source(SourceMatcher::name("Slack"))
                .with_domain(DomainMatcher::exact("github.com"))
                .new_window(true),
        )
        .with_rule(Rule::new("mail-apps", 200, FIREFOX).with_source(SourceMatcher::pattern("(?i).*mail.*")))
        .with_rule(
            Rule::new("bank", 150, FIREFOX)
                .with_domain(DomainMatcher::wildcard("*.bank.example"))
                .private(true),
        )
        .with_rule(Rule::new("google-not-mail", 100, CHROME).with_domain(DomainMatcher::wildcard("^(?!.*mail).*google.*")))
        .with_rule(Rule::new("broken", 90, "brave").with_domain(DomainMatcher::wildcard("^[broken")))
        .with_rule(Rule::new("news", 50, "edge").with_domain(DomainMatcher::contains("NEWS")))
        .with_rule(Rule::new("discord", 10, "arc").with_source(SourceMatcher::identifier("com.hnc.Discord")))
}

/// Probe inputs covering every rule in [`representative_config`].
pub fn probes() -> Vec<(Url, Option<SourceApp>)> {
    let hosts = [
        "https://github.com/rust-lang",
        "https://gist.github.com",
        "https://www.bank.example/login",
        "https://bank.example",
        "https://docs.google.com",
        "https://mail.google.com",
        "https://news.ycombinator.com",
        "http://localhost:8080",
        "file:///tmp/page.html",
    ];
    let sources = [
        None,
        Some(slack()),
        Some(SourceApp::new("Apple Mail", "com.apple.mail")),
        Some(SourceApp::new("Discord", "com.hnc.Discord")),
    ];

    hosts
        .iter()
        .flat_map(|host| sources.iter().map(move |source| (url(host), source.clone())))
        .collect()
}
