//! ATS score: TF-IDF cosine similarity blended with keyword coverage

use crate::processing::keywords::{KeywordExtractor, KeywordSet};
use crate::processing::normalizer::Normalizer;
use crate::processing::tagger::Tagger;
use crate::processing::tfidf::{cosine_similarity, TfidfVectorizer, VectorizeError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SIMILARITY_WEIGHT: f64 = 0.6;
pub const KEYWORD_WEIGHT: f64 = 0.4;

static EMPTY_KEYWORDS: KeywordSet = KeywordSet::new();

/// Why scoring fell back to zero
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScoringFailure {
    #[error("vectorization failed: {0}")]
    Vectorization(String),

    #[error("similarity is not a finite number")]
    NonFiniteSimilarity,
}

impl From<VectorizeError> for ScoringFailure {
    fn from(err: VectorizeError) -> Self {
        ScoringFailure::Vectorization(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Final score in 0..=100
    pub score: u8,
    pub similarity: f64,
    pub keyword_match: f64,
    pub resume_keywords: KeywordSet,
    pub job_keywords: KeywordSet,
}

impl ScoreCard {
    /// Job keywords also found in the résumé
    pub fn matched_keywords(&self) -> KeywordSet {
        self.resume_keywords
            .intersection(&self.job_keywords)
            .cloned()
            .collect()
    }

    /// Job keywords absent from the résumé
    pub fn missing_keywords(&self) -> KeywordSet {
        self.job_keywords
            .difference(&self.resume_keywords)
            .cloned()
            .collect()
    }
}

/// Outcome of scoring one résumé against one job description.
///
/// Every variant other than `Scored` reports a score of zero with empty
/// keyword sets.
#[derive(Debug, Clone, PartialEq)]
pub enum Assessment {
    Scored(ScoreCard),
    /// One of the inputs was an empty string
    EmptyInput,
    Degraded(ScoringFailure),
}

impl Assessment {
    pub fn score(&self) -> u8 {
        match self {
            Assessment::Scored(card) => card.score,
            _ => 0,
        }
    }

    pub fn card(&self) -> Option<&ScoreCard> {
        match self {
            Assessment::Scored(card) => Some(card),
            _ => None,
        }
    }

    pub fn resume_keywords(&self) -> &KeywordSet {
        self.card().map_or(&EMPTY_KEYWORDS, |card| &card.resume_keywords)
    }

    pub fn job_keywords(&self) -> &KeywordSet {
        self.card().map_or(&EMPTY_KEYWORDS, |card| &card.job_keywords)
    }

    pub fn matched_keywords(&self) -> KeywordSet {
        self.card().map(ScoreCard::matched_keywords).unwrap_or_default()
    }

    pub fn missing_keywords(&self) -> KeywordSet {
        self.card().map(ScoreCard::missing_keywords).unwrap_or_default()
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Assessment::Degraded(_))
    }
}

pub struct AtsScorer<T: Tagger> {
    normalizer: Normalizer,
    extractor: KeywordExtractor<T>,
    vectorizer: TfidfVectorizer,
}

impl<T: Tagger> AtsScorer<T> {
    pub fn new(tagger: T) -> Self {
        Self {
            normalizer: Normalizer::new(),
            extractor: KeywordExtractor::new(tagger),
            vectorizer: TfidfVectorizer::new(),
        }
    }

    pub fn score(&self, resume_text: &str, job_text: &str) -> Assessment {
        if resume_text.is_empty() || job_text.is_empty() {
            debug!("Empty input, skipping scoring");
            return Assessment::EmptyInput;
        }

        let resume_clean = self.normalizer.normalize(resume_text);
        let job_clean = self.normalizer.normalize(job_text);

        let resume_keywords = self.extractor.extract(&resume_clean);
        let job_keywords = self.extractor.extract(&job_clean);
        debug!(
            "Extracted {} resume keywords and {} job keywords",
            resume_keywords.len(),
            job_keywords.len()
        );

        let similarity = match self.similarity(&resume_clean, &job_clean) {
            Ok(similarity) => similarity,
            Err(failure) => {
                warn!("Scoring degraded to zero: {}", failure);
                return Assessment::Degraded(failure);
            }
        };

        let keyword_match = Self::keyword_match(&resume_keywords, &job_keywords);
        let raw = similarity * SIMILARITY_WEIGHT + keyword_match * KEYWORD_WEIGHT;
        let score = (raw * 100.0).round().clamp(0.0, 100.0) as u8;
        debug!(
            "similarity={:.4} keyword_match={:.4} score={}",
            similarity, keyword_match, score
        );

        Assessment::Scored(ScoreCard {
            score,
            similarity,
            keyword_match,
            resume_keywords,
            job_keywords,
        })
    }

    fn similarity(&self, resume_clean: &str, job_clean: &str) -> Result<f64, ScoringFailure> {
        let (_, vectors) = self.vectorizer.fit_transform(&[resume_clean, job_clean])?;
        let similarity = cosine_similarity(&vectors[0], &vectors[1]);
        if !similarity.is_finite() {
            return Err(ScoringFailure::NonFiniteSimilarity);
        }
        Ok(similarity.clamp(0.0, 1.0))
    }

    /// Share of job keywords present in the résumé
    fn keyword_match(resume_keywords: &KeywordSet, job_keywords: &KeywordSet) -> f64 {
        if job_keywords.is_empty() {
            return 0.0;
        }
        let matched = resume_keywords.intersection(job_keywords).count();
        matched as f64 / job_keywords.len() as f64
    }
}
