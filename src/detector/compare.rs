use std::cmp::Ordering;

use num::Num;

use super::token::TermVector;

/// Cosine similarity over two sparse vectors given as key-sorted entry
/// iterators.
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
/// ||a|| = sqrt(Σ(a_i^2))
///
/// Both inputs must be sorted ascending by key; dimensions present on only
/// one side contribute to that side's norm alone. Accumulation happens in
/// key order for dot product and both norms, so swapping the arguments
/// produces bit-identical results.
///
/// A zero norm on either side (empty vector) yields 0.0 instead of the
/// undefined division.
pub fn cosine_similarity<'a, N>(
    vec: impl Iterator<Item = (&'a str, N)>,
    other: impl Iterator<Item = (&'a str, N)>,
) -> f64
where
    N: Num + Copy + Into<f64>,
{
    let mut a_it = vec.fuse();
    let mut b_it = other.fuse();
    let mut a_next = a_it.next();
    let mut b_next = b_it.next();
    let mut norm_a = 0_f64;
    let mut norm_b = 0_f64;
    let mut dot = 0_f64;
    while let (Some((ka, va)), Some((kb, vb))) = (a_next, b_next) {
        match ka.cmp(kb) {
            Ordering::Equal => {
                let va: f64 = va.into();
                let vb: f64 = vb.into();
                norm_a += va * va;
                norm_b += vb * vb;
                dot += va * vb;
                a_next = a_it.next();
                b_next = b_it.next();
            }
            Ordering::Less => {
                let va: f64 = va.into();
                norm_a += va * va;
                a_next = a_it.next();
            }
            Ordering::Greater => {
                let vb: f64 = vb.into();
                norm_b += vb * vb;
                b_next = b_it.next();
            }
        }
    }
    while let Some((_, va)) = a_next {
        let va: f64 = va.into();
        norm_a += va * va;
        a_next = a_it.next();
    }
    while let Some((_, vb)) = b_next {
        let vb: f64 = vb.into();
        norm_b += vb * vb;
        b_next = b_it.next();
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}

/// Cosine similarity of two term-frequency vectors.
pub fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    cosine_similarity(a.sorted_entries().into_iter(), b.sorted_entries().into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(tokens: &[&str]) -> TermVector {
        let mut v = TermVector::new();
        v.add_tokens(tokens);
        v
    }

    #[test]
    fn identical_vectors_have_similarity_one() {
        let a = vector(&["alpha", "beta", "beta", "gamma"]);
        let sim = cosine(&a, &a.clone());
        assert!((sim - 1.0).abs() < 1e-12, "got {sim}");
    }

    #[test]
    fn disjoint_vectors_have_similarity_zero() {
        let a = vector(&["alpha", "beta"]);
        let b = vector(&["gamma", "delta"]);
        assert_eq!(cosine(&a, &b), 0.0);
    }

    #[test]
    fn similarity_is_exactly_commutative() {
        let a = vector(&["one", "two", "two", "three", "five"]);
        let b = vector(&["two", "three", "three", "four", "four", "six"]);
        // bit-for-bit, not just within tolerance
        assert_eq!(cosine(&a, &b).to_bits(), cosine(&b, &a).to_bits());
    }

    #[test]
    fn similarity_stays_within_unit_interval() {
        let a = vector(&["a", "b", "c", "a"]);
        let b = vector(&["b", "c", "d", "d", "d"]);
        let sim = cosine(&a, &b);
        assert!((0.0..=1.0).contains(&sim), "got {sim}");
    }

    #[test]
    fn zero_vector_similarity_is_defined_as_zero() {
        let empty = TermVector::new();
        let nonempty = vector(&["word"]);
        assert_eq!(cosine(&empty, &nonempty), 0.0);
        assert_eq!(cosine(&nonempty, &empty), 0.0);
        // zero vs zero is the degenerate case of the classic formula;
        // pinned to 0.0 rather than an error
        assert_eq!(cosine(&empty, &TermVector::new()), 0.0);
    }

    #[test]
    fn known_overlap_matches_hand_computed_value() {
        // a = {x:1, y:1}, b = {x:1, z:1} -> dot 1, norms sqrt(2) each
        let a = vector(&["x", "y"]);
        let b = vector(&["x", "z"]);
        let expected = 1.0 / 2.0;
        assert!((cosine(&a, &b) - expected).abs() < 1e-12);
    }
}
