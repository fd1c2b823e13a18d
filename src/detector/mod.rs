pub mod cluster;
pub mod compare;
pub mod pairwise;
pub mod score;
pub mod token;

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, DetectorConfig};
use score::ScoredDocument;
use token::TermVector;

/// A document of the batch. The id has no bearing on the algorithm and is
/// carried only for logging and traceability; the body is the text that gets
/// vectorized. A missing body behaves like empty text.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Document {
    pub id: Option<String>,
    pub body: Option<String>,
}

impl Document {
    pub fn new(body: impl Into<String>) -> Self {
        Document {
            id: None,
            body: Some(body.into()),
        }
    }

    pub fn with_id(id: impl Into<String>, body: impl Into<String>) -> Self {
        Document {
            id: Some(id.into()),
            body: Some(body.into()),
        }
    }

    fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// Pairwise cosine-similarity engine.
///
/// Holds the validated configuration (threshold and stopword set) immutably
/// for its lifetime; a whole batch is compared in one pass and either scored
/// for spam or grouped into clusters.
#[derive(Debug, Clone)]
pub struct SpamDetector {
    threshold: f64,
    stopwords: HashSet<String>,
}

impl SpamDetector {
    /// Build a detector from a configuration. Fails fast on an invalid
    /// threshold; there is no fallback configuration.
    pub fn new(config: &DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(SpamDetector {
            threshold: config.similarity_threshold,
            stopwords: config.stopword_set(),
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Transform a text into its term-frequency vector: tokenize, drop the
    /// configured stopwords, count the survivors.
    pub fn vectorize(&self, text: &str) -> TermVector {
        let mut tokens = token::tokenize(text);
        token::remove_stopwords(&mut tokens, &self.stopwords);
        let mut vector = TermVector::new();
        vector.add_tokens(&tokens);
        vector
    }

    /// Cosine similarity of two raw texts, in `[0, 1]`. Pure function of the
    /// two inputs and the stopword configuration; comparing a non-empty text
    /// with itself yields 1.0, texts without shared tokens yield 0.0.
    pub fn similarity(&self, first: &str, second: &str) -> f64 {
        compare::cosine(&self.vectorize(first), &self.vectorize(second))
    }

    /// Score every document of the batch by its maximum similarity against
    /// the others and flag it as spam when that maximum strictly exceeds the
    /// threshold.
    ///
    /// Returns a new list sorted descending by scoring; documents that were
    /// never compared (singleton batch) carry `None` and sort last, ties
    /// keep input order. An empty batch yields an empty list.
    pub fn score_and_categorize(&self, documents: Vec<Document>) -> Vec<ScoredDocument> {
        let vectors: Vec<TermVector> = documents
            .iter()
            .map(|document| self.vectorize(document.body_text()))
            .collect();
        let results = pairwise::compare_all(&vectors);
        score::categorize(documents, &results, self.threshold)
    }

    /// Group the texts into clusters of directly similar documents (see
    /// `cluster::find_clusters` for the exact, non-transitive semantics).
    /// Returned sets contain 0-based positions in the input slice, emitted
    /// in seed order after superset dedup.
    pub fn find_clusters<T: AsRef<str>>(&self, texts: &[T]) -> Vec<BTreeSet<usize>> {
        let vectors: Vec<TermVector> = texts
            .iter()
            .map(|text| self.vectorize(text.as_ref()))
            .collect();
        let results = pairwise::compare_all(&vectors);
        cluster::find_clusters(&results, self.threshold)
    }
}
