//! End-to-end routing behavior: documents in, launch decisions out.

use browser_router::config::loader::parse_config;
use browser_router::{DomainMatcher, EngineHandle, LaunchOptions, Rule, RoutingConfig, RuleEngine, SourceApp, SourceMatcher};
use std::path::Path;

mod common;
use common::{engine_for, probes, representative_config, slack, url, CHROME, FIREFOX, SAFARI};

#[test]
fn test_slack_source_scenario() {
    let config = RoutingConfig::new("safari")
        .with_rule(Rule::new("r1", 100, "chrome").with_source(SourceMatcher::name("Slack")));
    let engine = RuleEngine::new(&config);
    let github = url("https://github.com");

    assert_eq!(
        engine.resolve(&github, Some(&SourceApp::new("Slack", "com.slack"))),
        LaunchOptions {
            target: "chrome".into(),
            is_private: false,
            new_window: false,
        }
    );
    assert_eq!(engine.resolve(&github, None), LaunchOptions::fallback("safari"));
}

#[test]
fn test_priority_independent_of_list_order() {
    let low = Rule::new("low", 10, FIREFOX).with_domain(DomainMatcher::exact("github.com"));
    let high = Rule::new("high", 100, CHROME).with_domain(DomainMatcher::exact("github.com"));
    let github = url("https://github.com/user/repo");

    for rules in [vec![low.clone(), high.clone()], vec![high, low]] {
        assert_eq!(engine_for(rules).resolve(&github, None).target, CHROME);
    }
}

#[test]
fn test_representative_document() {
    let engine = RuleEngine::new(&representative_config());

    let decide = |u: &str, source: Option<SourceApp>| engine.explain(&url(u), source.as_ref());

    let r = decide("https://github.com/x", Some(slack()));
    assert_eq!(r.rule.as_deref(), Some("slack-github"));
    assert!(r.options.new_window);

    let r = decide("https://github.com/x", None);
    assert_eq!(r.rule, None);
    assert_eq!(r.options.target, SAFARI);

    let r = decide("https://example.com", Some(SourceApp::new("Airmail", "it.bloop.airmail2")));
    assert_eq!(r.rule.as_deref(), Some("mail-apps"));

    let r = decide("https://login.bank.example", None);
    assert_eq!(r.rule.as_deref(), Some("bank"));
    assert!(r.options.is_private);
    assert_eq!(decide("https://bank.example", None).rule, None);

    assert_eq!(decide("https://docs.google.com", None).rule.as_deref(), Some("google-not-mail"));
    // The broken pattern is skipped; evaluation continues to lower priorities.
    assert_eq!(decide("https://mail.google.com", None).rule, None);
    assert_eq!(decide("https://news.example.org", None).rule.as_deref(), Some("news"));

    let r = decide("https://example.com", Some(SourceApp::new("Discord", "com.hnc.Discord")));
    assert_eq!(r.options.target, "arc");
}

#[test]
fn test_json_round_trip_preserves_decisions() {
    let original = representative_config();
    let json = serde_json::to_string_pretty(&original).unwrap();
    let decoded = parse_config(Path::new("config.json"), &json).unwrap();

    let before = RuleEngine::new(&original);
    let after = RuleEngine::new(&decoded);
    for (target, source) in probes() {
        assert_eq!(
            before.resolve(&target, source.as_ref()),
            after.resolve(&target, source.as_ref()),
            "decision changed for {} from {:?}",
            target,
            source
        );
    }
}

#[test]
fn test_omitted_optionals_decode_to_defaults() {
    let json = r#"{
        "defaultBrowser": "safari",
        "rules": [
            { "id": "gh", "priority": 5, "browser": "chrome", "domain": { "exact": "github.com" } }
        ]
    }"#;
    let config = parse_config(Path::new("config.json"), json).unwrap();
    assert_eq!(config.version, 1);

    let options = RuleEngine::new(&config).resolve(&url("https://github.com"), None);
    assert_eq!(options, LaunchOptions { target: "chrome".into(), is_private: false, new_window: false });

    let reencoded = serde_json::to_string(&config).unwrap();
    let again = parse_config(Path::new("config.json"), &reencoded).unwrap();
    assert_eq!(again, config);
}

#[test]
fn test_toml_document_routes_like_json() {
    let toml_doc = toml::to_string_pretty(&representative_config()).unwrap();
    let from_toml = parse_config(Path::new("config.toml"), &toml_doc).unwrap();
    assert_eq!(from_toml, representative_config());
}

#[test]
fn test_handle_reload_replaces_rules() {
    let handle = EngineHandle::new(&RoutingConfig::new(SAFARI));
    let github = url("https://github.com");
    assert_eq!(handle.resolve(&github, None).target, SAFARI);

    handle.reload(&representative_config());
    assert_eq!(handle.resolve(&github, Some(&slack())).target, CHROME);
    assert_eq!(handle.current().rules().count(), representative_config().rules.len());
}

#[test]
fn test_large_priorities_keep_rules_active() {
    let json = r#"{
        "defaultBrowser": "safari",
        "rules": [
            { "id": "low", "priority": 1, "browser": "firefox", "domain": { "contains": "github" } },
            { "id": "high", "priority": 3000000000, "browser": "chrome", "domain": { "exact": "github.com" } }
        ]
    }"#;
    let config = parse_config(Path::new("config.json"), json).unwrap();
    let resolution = RuleEngine::new(&config).explain(&url("https://github.com"), None);
    assert_eq!(resolution.rule.as_deref(), Some("high"));
    assert_eq!(resolution.options.target, CHROME);
}
