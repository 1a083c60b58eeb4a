//! ATS scorer library
//!
//! Scores a résumé against a job description by blending TF-IDF cosine
//! similarity with the share of job keywords found in the résumé.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{AtsError, Result};
pub use processing::scorer::{Assessment, AtsScorer, ScoreCard};
pub use processing::tagger::LexiconTagger;
