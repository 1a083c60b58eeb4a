//! Text normalization ahead of tagging and vectorization

use regex::Regex;

pub struct Normalizer {
    non_word_regex: Regex,
    whitespace_regex: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        // ASCII-only so the output alphabet is exactly [a-z0-9_ ]
        let non_word_regex = Regex::new(r"[^A-Za-z0-9_]+").expect("Invalid non-word regex");
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            non_word_regex,
            whitespace_regex,
        }
    }

    /// Lowercase, strip non-word characters and collapse whitespace.
    ///
    /// Non-word replacement runs first so punctuation next to a space cannot
    /// leave a double space behind. Applying this twice gives the same result
    /// as applying it once.
    pub fn normalize(&self, text: &str) -> String {
        let stripped = self.non_word_regex.replace_all(text, " ");
        let collapsed = self.whitespace_regex.replace_all(&stripped, " ");
        collapsed.to_ascii_lowercase().trim().to_string()
    }
}
