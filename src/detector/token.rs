use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Splits raw text into lowercased tokens.
///
/// A token is a maximal run of word characters (Unicode letters, digits and
/// underscore); everything else acts as a separator and is discarded. Order
/// of occurrence is preserved. Empty or whitespace-only input yields an
/// empty sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            for lower in ch.to_lowercase() {
                current.push(lower);
            }
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Removes every occurrence of every configured stopword from the token
/// sequence, preserving the order of the survivors. Tokens are already
/// lowercased, so the exact match against the lowercased stopword set is
/// effectively case-insensitive. Running the filter twice yields the same
/// result.
pub fn remove_stopwords(tokens: &mut Vec<String>, stopwords: &HashSet<String>) {
    tokens.retain(|token| !stopwords.contains(token));
}

/// TermVector struct
/// Manages the occurrence count of each token within one document and is the
/// base data for the cosine similarity calculation.
///
/// # Examples
/// ```
/// use spam_sieve::TermVector;
/// let mut vector = TermVector::new();
/// vector.add_token("token1");
/// vector.add_token("token2");
/// vector.add_token("token1");
///
/// assert_eq!(vector.token_count("token1"), 2);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TermVector {
    #[serde(with = "indexmap::map::serde_seq")]
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

impl TermVector {
    pub fn new() -> Self {
        TermVector {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Count one occurrence of `token`.
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        let count = self.token_count.entry(token.to_string()).or_insert(0);
        *count += 1;
        self.total_token_count += 1;
        self
    }

    /// Count one occurrence of each token in the slice.
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    /// Occurrence count of a single token, 0 when absent.
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        *self.token_count.get(token).unwrap_or(&0)
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    /// Sum of all occurrence counts.
    #[inline]
    pub fn token_total_count(&self) -> u64 {
        self.total_token_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_empty()
    }

    /// Entries sorted by token, ascending. The sorted order is the dimension
    /// order of the sparse merge in the cosine calculation; accumulating in
    /// key order makes the similarity exactly commutative.
    #[inline]
    pub fn sorted_entries(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .token_count
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
