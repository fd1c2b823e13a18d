use serde::{Deserialize, Serialize};

use super::pairwise::SimilarityResult;
use super::Document;

/// A document together with its spam scoring.
///
/// `spam_scoring` is the maximum similarity the document reached against any
/// other document of the batch; it stays `None` when there was nothing to
/// compare against (singleton batch). `spam` is true iff the scoring
/// strictly exceeds the configured threshold.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScoredDocument {
    pub document: Document,
    pub spam_scoring: Option<f64>,
    pub spam: bool,
}

impl ScoredDocument {
    fn new(document: Document) -> Self {
        Self {
            document,
            spam_scoring: None,
            spam: false,
        }
    }

    /// Raise the scoring to `similarity` if it exceeds the current value and
    /// recompute the spam flag. The scoring never decreases.
    fn raise_scoring(&mut self, similarity: f64, threshold: f64) {
        if self.spam_scoring.map_or(true, |current| similarity > current) {
            self.spam_scoring = Some(similarity);
            let spam = similarity > threshold;
            if spam && !self.spam {
                tracing::info!(
                    id = self.document.id.as_deref().unwrap_or("<unset>"),
                    threshold,
                    "spam detected: document exceeds the similarity threshold"
                );
            }
            self.spam = spam;
        }
    }
}

/// Consumes the pairwise results and assigns every document its maximum
/// observed similarity plus the spam flag. Each result raises the scoring of
/// BOTH endpoints of the pair.
///
/// The returned list is a new vector sorted descending by scoring; unscored
/// documents sort last and ties keep their original input order (the sort is
/// stable).
pub fn categorize(
    documents: Vec<Document>,
    results: &[SimilarityResult],
    threshold: f64,
) -> Vec<ScoredDocument> {
    let mut scored: Vec<ScoredDocument> = documents.into_iter().map(ScoredDocument::new).collect();

    for result in results {
        scored[result.left].raise_scoring(result.score, threshold);
        scored[result.right].raise_scoring(result.score, threshold);
    }

    scored.sort_by(|a, b| {
        let a = a.spam_scoring.unwrap_or(f64::NEG_INFINITY);
        let b = b.spam_scoring.unwrap_or(f64::NEG_INFINITY);
        b.total_cmp(&a)
    });
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str) -> Document {
        Document::with_id(id, "")
    }

    fn result(left: usize, right: usize, score: f64) -> SimilarityResult {
        SimilarityResult { left, right, score }
    }

    #[test]
    fn scoring_tracks_maximum_for_both_endpoints() {
        let documents = vec![doc("a"), doc("b"), doc("c")];
        let results = vec![
            result(0, 1, 0.3),
            result(0, 2, 0.9),
            result(1, 2, 0.5),
        ];
        let scored = categorize(documents, &results, 0.8);
        // sorted descending: a (0.9), c (0.9), b (0.5)
        assert_eq!(scored[0].spam_scoring, Some(0.9));
        assert_eq!(scored[1].spam_scoring, Some(0.9));
        assert_eq!(scored[2].spam_scoring, Some(0.5));
        assert!(scored[0].spam);
        assert!(scored[1].spam);
        assert!(!scored[2].spam);
    }

    #[test]
    fn scoring_is_never_lowered_by_a_later_pair() {
        let documents = vec![doc("a"), doc("b"), doc("c")];
        let results = vec![result(0, 1, 0.9), result(0, 2, 0.2)];
        let scored = categorize(documents, &results, 0.95);
        let a = scored
            .iter()
            .find(|s| s.document.id.as_deref() == Some("a"))
            .unwrap();
        assert_eq!(a.spam_scoring, Some(0.9));
    }

    #[test]
    fn threshold_is_strict() {
        let documents = vec![doc("a"), doc("b")];
        let scored = categorize(documents, &[result(0, 1, 0.8)], 0.8);
        assert!(!scored[0].spam, "score equal to threshold is not spam");
    }

    #[test]
    fn singleton_batch_has_unset_scoring() {
        let scored = categorize(vec![doc("only")], &[], 0.5);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].spam_scoring, None);
        assert!(!scored[0].spam);
    }

    #[test]
    fn unscored_documents_sort_last_and_ties_keep_input_order() {
        let documents = vec![doc("a"), doc("b"), doc("c"), doc("d")];
        // only b and c are compared; a and d stay unscored
        let results = vec![result(1, 2, 0.4)];
        let scored = categorize(documents, &results, 0.9);
        let ids: Vec<&str> = scored
            .iter()
            .map(|s| s.document.id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, vec!["b", "c", "a", "d"]);
    }
}
