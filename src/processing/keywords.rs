//! Keyword extraction by part-of-speech filtering

use crate::processing::tagger::{PartOfSpeech, Tagger};
use std::collections::BTreeSet;

/// Lowercase lemmas, ordered alphabetically
pub type KeywordSet = BTreeSet<String>;

/// Tokens must be strictly longer than this to count as keywords
pub const MIN_SURFACE_LEN: usize = 2;

pub struct KeywordExtractor<T: Tagger> {
    tagger: T,
}

impl<T: Tagger> KeywordExtractor<T> {
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    /// Collect lemmas of nouns, proper nouns and adjectives longer than two characters
    pub fn extract(&self, normalized_text: &str) -> KeywordSet {
        self.tagger
            .tag(normalized_text)
            .into_iter()
            .filter(|token| Self::is_keyword_pos(token.pos) && token.surface_len > MIN_SURFACE_LEN)
            .map(|token| token.lemma.to_lowercase())
            .collect()
    }

    fn is_keyword_pos(pos: PartOfSpeech) -> bool {
        matches!(
            pos,
            PartOfSpeech::Noun | PartOfSpeech::ProperNoun | PartOfSpeech::Adjective
        )
    }
}
