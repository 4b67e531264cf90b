//! Swahili/English language detection by lexicon hit count.

use serde::{Deserialize, Serialize};

/// Supported reply languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Sw,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Sw => "sw",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Common Swahili words, greetings, business terms and short connectives.
pub const SWAHILI_LEXICON: &[&str] = &[
    "habari", "jambo", "karibu", "asante", "tafadhali", "ndiyo", "hapana", "sawa",
    "biashara", "fedha", "bei", "bajeti", "ukuaji", "mtiririko", "nina", "nataka",
    "naweza", "nini", "vipi", "gani", "kuhusu", "kwa", "na", "ya", "wa", "la",
];

/// Minimum number of distinct lexicon entries for a Swahili verdict.
pub const SWAHILI_THRESHOLD: usize = 2;

/// Number of lexicon entries occurring anywhere in `text`.
///
/// Matching is by substring, not by word: "na" counts inside "banana".
pub fn swahili_hits(text: &str) -> usize {
    let lower = text.to_lowercase();
    SWAHILI_LEXICON
        .iter()
        .filter(|word| lower.contains(*word))
        .count()
}

/// Classify `text` as Swahili when at least two lexicon entries occur in it.
pub fn detect_language(text: &str) -> Language {
    if swahili_hits(text) >= SWAHILI_THRESHOLD {
        Language::Sw
    } else {
        Language::En
    }
}
