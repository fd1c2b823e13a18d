use std::collections::BTreeSet;

use super::pairwise::SimilarityResult;

/// Groups document indices into clusters of directly similar documents.
///
/// Every index acts once as a seed, in input order. The candidate cluster of
/// seed `i` is `{i}` plus every `j > i` whose similarity with `i` strictly
/// exceeds the threshold. A non-empty candidate is accepted unless an
/// already accepted cluster is a superset of it.
///
/// This is deliberately NOT connected-component clustering: two indices land
/// in one cluster only through a direct above-threshold similarity with a
/// common seed, never through a chain of intermediate documents. The
/// superset-dedup makes the outcome sensitive to seed order, which is why
/// the pairwise results must arrive in `(left, right)` lexicographic order.
///
/// `results` must be the full lexicographically ordered output of
/// `pairwise::compare_all`.
pub fn find_clusters(results: &[SimilarityResult], threshold: f64) -> Vec<BTreeSet<usize>> {
    let mut clusters: Vec<BTreeSet<usize>> = Vec::new();
    let mut candidate: BTreeSet<usize> = BTreeSet::new();
    let mut seed: Option<usize> = None;

    // results are grouped by seed already; flush the candidate whenever the
    // seed column advances
    for result in results {
        if seed != Some(result.left) {
            accept(&mut clusters, std::mem::take(&mut candidate));
            seed = Some(result.left);
        }
        if result.score > threshold {
            candidate.insert(result.left);
            candidate.insert(result.right);
        }
    }
    accept(&mut clusters, candidate);

    clusters
}

fn accept(clusters: &mut Vec<BTreeSet<usize>>, candidate: BTreeSet<usize>) {
    if candidate.is_empty() {
        return;
    }
    // already covered by an earlier, larger cluster
    if clusters.iter().any(|existing| existing.is_superset(&candidate)) {
        return;
    }
    clusters.push(candidate);
}
