use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::compare;
use super::token::TermVector;

/// One pairwise comparison: an unordered index pair with `left < right`
/// (0-based positions in the input batch) and the cosine similarity of the
/// two documents.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SimilarityResult {
    pub left: usize,
    pub right: usize,
    pub score: f64,
}

/// Compares every unordered pair of the batch exactly once and returns the
/// N·(N-1)/2 results in lexicographic `(left, right)` order.
///
/// The pair loop is the O(N²) core cost and each comparison is a pure
/// function of its two vectors, so the loop runs on the rayon pool. The
/// indexed collect keeps the output order fixed regardless of worker
/// scheduling; downstream consumers rely on that order (the cluster
/// superset-dedup is order-sensitive).
pub fn compare_all(vectors: &[TermVector]) -> Vec<SimilarityResult> {
    let n = vectors.len();
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect();

    pairs
        .into_par_iter()
        .map(|(left, right)| {
            tracing::debug!(left, right, "comparing documents");
            SimilarityResult {
                left,
                right,
                score: compare::cosine(&vectors[left], &vectors[right]),
            }
        })
        .collect()
}
