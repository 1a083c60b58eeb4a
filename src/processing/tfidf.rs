//! TF-IDF vector space over a small corpus and cosine similarity

use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorizeError {
    #[error("empty vocabulary; documents contain no terms of two or more word characters")]
    EmptyVocabulary,

    #[error("no documents to vectorize")]
    NoDocuments,
}

/// Fitted vocabulary with smoothed inverse document frequencies
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

pub struct TfidfVectorizer {
    token_regex: Regex,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        let token_regex = Regex::new(r"\b\w\w+\b").expect("Invalid token regex");
        Self { token_regex }
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.token_regex.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Fit the vocabulary on `documents` and return one L2-normalized vector per document.
    ///
    /// Term weight is `count * idf` with `idf = ln((1 + n) / (1 + df)) + 1`.
    pub fn fit_transform(&self, documents: &[&str]) -> Result<(TfidfModel, Vec<Vec<f64>>), VectorizeError> {
        if documents.is_empty() {
            return Err(VectorizeError::NoDocuments);
        }

        let tokenized: Vec<Vec<&str>> = documents.iter().map(|doc| self.tokenize(doc)).collect();

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().copied().collect();
            for term in unique {
                *document_frequency.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let n = documents.len() as f64;
        let vocabulary: BTreeMap<String, usize> = document_frequency
            .keys()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();
        let idf: Vec<f64> = document_frequency
            .values()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let model = TfidfModel { vocabulary, idf };
        let vectors = tokenized.iter().map(|tokens| model.weigh(tokens)).collect();

        Ok((model, vectors))
    }
}

impl TfidfModel {
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&index| self.idf[index])
    }

    fn weigh(&self, tokens: &[&str]) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in tokens {
            if let Some(&index) = self.vocabulary.get(*token) {
                vector[index] += 1.0;
            }
        }
        for (weight, idf) in vector.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }
        l2_normalize(&mut vector);
        vector
    }
}

/// Zero vectors are left as they are
fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

/// Cosine of the angle between `a` and `b`; 0.0 when either is a zero vector
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
