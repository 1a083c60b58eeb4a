//! Report structures built from a scoring assessment

use crate::processing::keywords::KeywordSet;
use crate::processing::scorer::{Assessment, KEYWORD_WEIGHT, SIMILARITY_WEIGHT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Score tier shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Verdict::Excellent,
            60..=79 => Verdict::Good,
            40..=59 => Verdict::Fair,
            _ => Verdict::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent",
            Verdict::Good => "Good",
            Verdict::Fair => "Fair",
            Verdict::NeedsWork => "Needs Work",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent! Your resume is highly optimized.",
            Verdict::Good => "Good! Minor improvements needed.",
            Verdict::Fair => "Fair. Add more job-specific keywords.",
            Verdict::NeedsWork => "Needs Work. Rewrite with keywords from the job.",
        }
    }
}

/// How the score was reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreStatus {
    Scored,
    EmptyInput,
    Degraded { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub similarity: f64,
    pub similarity_weight: f64,
    pub keyword_match: f64,
    pub keyword_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSummary {
    pub matched_count: usize,
    pub missing_count: usize,
    /// First `sample_size` matched keywords, alphabetical
    pub matched_sample: Vec<String>,
    /// First `sample_size` missing keywords, alphabetical
    pub missing_sample: Vec<String>,
    pub resume_keywords: Vec<String>,
    pub job_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_file: String,
    pub job_source: String,
    pub scorer_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u8,
    pub verdict: Verdict,
    pub status: ScoreStatus,
    pub components: Option<ScoreComponents>,
    pub keywords: KeywordSummary,
    pub metadata: ReportMetadata,
}

impl ScoreReport {
    pub fn from_assessment(
        assessment: &Assessment,
        sample_size: usize,
        resume_file: &str,
        job_source: &str,
    ) -> Self {
        let score = assessment.score();

        let status = match assessment {
            Assessment::Scored(_) => ScoreStatus::Scored,
            Assessment::EmptyInput => ScoreStatus::EmptyInput,
            Assessment::Degraded(failure) => ScoreStatus::Degraded {
                reason: failure.to_string(),
            },
        };

        let components = assessment.card().map(|card| ScoreComponents {
            similarity: card.similarity,
            similarity_weight: SIMILARITY_WEIGHT,
            keyword_match: card.keyword_match,
            keyword_weight: KEYWORD_WEIGHT,
        });

        let matched = assessment.matched_keywords();
        let missing = assessment.missing_keywords();

        Self {
            score,
            verdict: Verdict::from_score(score),
            status,
            components,
            keywords: KeywordSummary {
                matched_count: matched.len(),
                missing_count: missing.len(),
                matched_sample: sample(&matched, sample_size),
                missing_sample: sample(&missing, sample_size),
                resume_keywords: assessment.resume_keywords().iter().cloned().collect(),
                job_keywords: assessment.job_keywords().iter().cloned().collect(),
            },
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                resume_file: resume_file.to_string(),
                job_source: job_source.to_string(),
                scorer_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

fn sample(keywords: &KeywordSet, limit: usize) -> Vec<String> {
    keywords.iter().take(limit).cloned().collect()
}
