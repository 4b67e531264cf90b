//! Greeting detection using anchored regex patterns.

use once_cell::sync::Lazy;
use regex::Regex;

/// Greeting openers in English and Swahili, matched at the start of the text.
const GREETING_PATTERNS: &[&str] = &[
    r"(?i)^(hi|hello|hey|jambo|habari|karibu|hola)",
    r"(?i)^(good morning|good afternoon|good evening)",
    r"(?i)^(how are you|what's up|sup)",
];

static GREETING_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    GREETING_PATTERNS
        .iter()
        .filter_map(|p| match Regex::new(p) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!("Invalid greeting pattern {}: {}", p, e);
                None
            }
        })
        .collect()
});

/// Whether the trimmed text opens with a greeting.
///
/// Anchored prefix match only, so "history" counts as opening with "hi".
pub fn is_greeting(text: &str) -> bool {
    let trimmed = text.trim();
    GREETING_REGEXES.iter().any(|re| re.is_match(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert_eq!(GREETING_REGEXES.len(), GREETING_PATTERNS.len());
    }

    #[test]
    fn test_greetings() {
        assert!(is_greeting("Hello there"));
        assert!(is_greeting("Jambo rafiki"));
        assert!(is_greeting("good morning"));
        assert!(is_greeting("  HEY, anyone here?"));
        assert!(is_greeting("What's up"));
        assert!(is_greeting("Good Evening team"));
    }

    #[test]
    fn test_not_greetings() {
        assert!(!is_greeting("What is pricing?"));
        assert!(!is_greeting("I said hello"));
        assert!(!is_greeting(""));
    }

    #[test]
    fn test_prefix_only() {
        assert!(is_greeting("history of my shop"));
        assert!(is_greeting("support please"));
    }
}
