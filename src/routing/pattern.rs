//! Pattern compilation for source and domain matchers.
//!
//! Host wildcards are translated to anchored regexes:
//! `*.github.com` → `^.*\.github\.com$`. A pattern that already starts with
//! `^` is taken as a raw regex, so power users can write things like
//! `^(?!.*mail).*google.*` in the same field. `fancy_regex` is used for its
//! look-around support.

use fancy_regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid pattern '{pattern}': {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: Box<fancy_regex::Error>,
}

/// Translate a host wildcard into regex source.
pub fn wildcard_to_regex(pattern: &str) -> String {
    if pattern.starts_with('^') {
        return pattern.to_string();
    }

    let body = pattern
        .split('*')
        .map(|literal| fancy_regex::escape(literal).into_owned())
        .collect::<Vec<_>>()
        .join(".*");
    format!("^{}$", body)
}

/// Compile a host wildcard (or raw `^` regex), case-insensitive.
pub fn compile_host_pattern(pattern: &str) -> Result<Regex, PatternError> {
    compile(pattern, format!("(?i){}", wildcard_to_regex(pattern)))
}

/// Compile a display-name regex. Case-sensitive, unanchored search.
pub fn compile_name_pattern(pattern: &str) -> Result<Regex, PatternError> {
    compile(pattern, pattern.to_string())
}

fn compile(pattern: &str, source: String) -> Result<Regex, PatternError> {
    Regex::new(&source).map_err(|e| PatternError {
        pattern: pattern.to_string(),
        source: Box::new(e),
    })
}

/// Match errors (e.g. backtrack limit exceeded) count as no match.
pub fn is_match(regex: &Regex, text: &str) -> bool {
    regex.is_match(text).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_translation() {
        assert_eq!(wildcard_to_regex("*.github.com"), r"^.*\.github\.com$");
        assert_eq!(wildcard_to_regex("local*"), "^local.*$");
        assert_eq!(wildcard_to_regex(""), "^$");
    }

    #[test]
    fn test_metacharacters_escaped() {
        let regex = compile_host_pattern("a+b(c)?.com").unwrap();
        assert!(is_match(&regex, "a+b(c)?.com"));
        assert!(!is_match(&regex, "aab.com"));
    }

    #[test]
    fn test_raw_regex_passes_through() {
        assert_eq!(wildcard_to_regex(r"^(www\.)?github\.com$"), r"^(www\.)?github\.com$");
        let regex = compile_host_pattern(r"^(www\.)?github\.com$").unwrap();
        assert!(is_match(&regex, "www.github.com"));
        assert!(!is_match(&regex, "gist.github.com"));
    }

    #[test]
    fn test_host_pattern_case_insensitive() {
        let regex = compile_host_pattern("*.GITHUB.com").unwrap();
        assert!(is_match(&regex, "gist.github.com"));
    }

    #[test]
    fn test_name_pattern_case_sensitive() {
        let regex = compile_name_pattern(".*Mail.*").unwrap();
        assert!(is_match(&regex, "Apple Mail"));
        assert!(!is_match(&regex, "Airmail"));
    }

    #[test]
    fn test_invalid_patterns_report_error() {
        assert!(compile_name_pattern("[invalid").is_err());
        let err = compile_host_pattern("^[invalid(").unwrap_err();
        assert_eq!(err.pattern, "^[invalid(");
    }
}
