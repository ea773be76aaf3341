//! Regex classification helpers.

use std::sync::LazyLock;

use regex::Regex;

/// Compile a static pattern. A pattern that fails to compile is logged and
/// disables the check that uses it instead of panicking inside a rule.
pub fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!(pattern, error = %e, "static pattern failed to compile");
            None
        }
    }
}

/// Whether a lazily compiled pattern matches; an uncompiled pattern never does.
pub fn matches(pattern: &LazyLock<Option<Regex>>, haystack: &str) -> bool {
    pattern
        .as_ref()
        .is_some_and(|re| re.is_match(haystack))
}

#[cfg(test)]
mod tests {
    use super::*;

    static DIGITS: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^\d+$"));
    static BROKEN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(unclosed"));

    #[test]
    fn compiled_pattern_matches() {
        assert!(matches(&DIGITS, "123"));
        assert!(!matches(&DIGITS, "12a"));
    }

    #[test]
    fn broken_pattern_fails_open() {
        assert!(BROKEN.is_none());
        assert!(!matches(&BROKEN, "anything"));
    }
}
