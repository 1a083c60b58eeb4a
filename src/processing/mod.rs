//! Text processing and scoring module

pub mod keywords;
pub mod normalizer;
pub mod scorer;
pub mod tagger;
pub mod tfidf;
