//! Ordered product-keyword detection.

use regex::Regex;

/// Product keyword phrases, scanned in order.
///
/// Order is load-bearing: some phrases overlap ("air cooler" vs "cooler",
/// "air conditioner" vs "ac") and the first match wins, so reordering this
/// list changes detection outcomes.
pub const PRODUCT_KEYWORDS: &[&str] = &[
    "air cooler",
    "cooler",
    "fan",
    "air conditioner",
    "ac",
    "laptop",
    "mobile",
    "smartphone",
    "headphone",
    "earphone",
    "bluetooth",
    "speaker",
    "washing machine",
    "refrigerator",
    "fridge",
    "television",
    "tv",
];

/// Scans review text for the first matching product keyword.
///
/// Matching is case-insensitive and whole-word: "ac" matches "this ac is
/// loud" but not "black". Patterns are compiled once at construction.
#[derive(Debug, Clone)]
pub struct KeywordDetector {
    patterns: Vec<(&'static str, Regex)>,
}

impl Default for KeywordDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordDetector {
    #[must_use]
    pub fn new() -> Self {
        let patterns = PRODUCT_KEYWORDS
            .iter()
            .map(|keyword| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
                let re = Regex::new(&pattern).expect("valid keyword regex");
                (*keyword, re)
            })
            .collect();
        Self { patterns }
    }

    /// Return the earliest-listed keyword with a word-boundary match, if any.
    #[must_use]
    pub fn detect(&self, text: &str) -> Option<&'static str> {
        self.patterns
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(keyword, _)| *keyword)
    }
}
