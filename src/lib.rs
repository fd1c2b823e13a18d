/// This crate is a pairwise similarity engine for spam detection and
/// duplicate-document clustering, built on term-frequency cosine similarity.
pub mod config;
pub mod detector;

/// Spam Detector
/// The top-level struct of this crate. It compares every document of a batch
/// against every other one using term-frequency cosine similarity and drives
/// the two downstream policies:
/// - spam scoring: each document carries the maximum similarity it reached
///   against any other document, plus a spam flag
/// - clustering: threshold-connected groups of document indices
///
/// The detector is constructed from a `DetectorConfig` (similarity threshold
/// and stopword list) and holds it immutably for its lifetime. Construction
/// fails fast on invalid configuration.
pub use detector::SpamDetector;

/// Detector configuration: the similarity threshold and the comma-delimited
/// stopword list. Can be built in code or loaded from a YAML file via
/// `DetectorConfig::load`.
pub use config::{ConfigError, DetectorConfig};

/// A document to be scored. Carries an optional external id, which is used
/// only for logging, and an optional body. A missing body is treated as
/// empty text and never fails.
pub use detector::Document;

/// Term Frequency Vector
/// Maps each surviving token of a document to its number of occurrences.
/// Keys are lowercased word-character runs with the configured stopwords
/// removed; insertion order of first occurrence is preserved.
pub use detector::token::TermVector;

/// A single pairwise comparison result: an unordered index pair `(left,
/// right)` with `left < right` and the cosine similarity of the two
/// documents, in `[0, 1]`.
pub use detector::pairwise::SimilarityResult;

/// A scored document produced by `SpamDetector::score_and_categorize`:
/// the input document plus its maximum observed similarity (`None` for a
/// singleton batch) and the spam flag.
pub use detector::score::ScoredDocument;
