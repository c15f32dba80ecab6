//! Wildcard-bucket adjacency index
//!
//! Words are grouped into buckets keyed by their one-letter wildcard
//! patterns. Every word in a bucket is exactly one letter away from every
//! other word in it, so the neighbors of a word are the union of its buckets
//! minus the word itself:
//!
//! ```text
//! .ar: car          c.r: car         ca.: car cat
//! .at: cat hat      c.t: cat         h.t: hat hot
//! .ot: hot          ha.: hat         ho.: hot
//!
//! adjacent(cat) = {car, cat} ∪ {cat, hat} ∪ {cat} - {cat} = {car, hat}
//! ```
//!
//! Lookups cost O(L) bucket unions for a word of length L instead of a scan
//! over the whole dictionary.
//!
//! The index is insert-only. Build it once (sequentially with
//! [`Graph::build_from_words`] or in parallel with [`Graph::build_parallel`])
//! and share it read-only afterwards.

mod parallel;

use crate::core::{normalize, patterns};
use rustc_hash::{FxHashMap, FxHashSet};

/// Adjacency index over a dictionary of words
///
/// Expects pre-filtered input where every word has the same target length.
/// Words of other lengths are still accepted but only ever connect to words
/// of their own length.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// word -> its patterns, in position order
    nodes: FxHashMap<String, Vec<String>>,
    /// pattern -> every word that produced it
    buckets: FxHashMap<String, FxHashSet<String>>,
}

impl Graph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph by adding each word in order
    ///
    /// # Examples
    /// ```
    /// use word_morph::graph::Graph;
    ///
    /// let graph = Graph::build_from_words(["car", "cat", "hat"]);
    /// assert_eq!(graph.len(), 3);
    /// ```
    pub fn build_from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for word in words {
            graph.add(word.as_ref());
        }
        graph
    }

    /// Index a word
    ///
    /// The word is trimmed and lowercased first; blank input is ignored.
    /// Adding a word twice has no further effect.
    pub fn add(&mut self, word: &str) {
        let Some(word) = normalize(word) else {
            return;
        };
        let word_patterns = Self::patterns(&word);
        self.insert(word, word_patterns);
    }

    /// Record an already-normalized word with its precomputed patterns
    fn insert(&mut self, word: String, word_patterns: Vec<String>) {
        for pattern in &word_patterns {
            self.buckets
                .entry(pattern.clone())
                .or_default()
                .insert(word.clone());
        }
        self.nodes.insert(word, word_patterns);
    }

    /// One-letter wildcard patterns for a word
    ///
    /// Does not consult or modify the index.
    #[must_use]
    pub fn patterns(word: &str) -> Vec<String> {
        patterns(word)
    }

    /// All indexed words exactly one letter apart from `word`
    ///
    /// A word never appears in its own neighbor set. Unknown words have no
    /// recorded patterns and therefore no neighbors.
    #[must_use]
    pub fn adjacent(&self, word: &str) -> FxHashSet<&str> {
        let mut neighbors = FxHashSet::default();

        let Some(word_patterns) = self.nodes.get(word) else {
            return neighbors;
        };

        for pattern in word_patterns {
            if let Some(bucket) = self.buckets.get(pattern) {
                neighbors.extend(bucket.iter().map(String::as_str));
            }
        }

        neighbors.remove(word);
        neighbors
    }

    /// Check whether a word has been indexed
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.nodes.contains_key(word)
    }

    /// The indexed copy of `word`, borrowed for the lifetime of the graph
    #[inline]
    #[must_use]
    pub fn resolve(&self, word: &str) -> Option<&str> {
        self.nodes.get_key_value(word).map(|(key, _)| key.as_str())
    }

    /// Number of indexed words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether no words have been indexed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct pattern buckets
    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Snapshot of every bucket for inspection
    ///
    /// Patterns are sorted, and so are the words inside each bucket.
    #[must_use]
    pub fn buckets_sorted(&self) -> Vec<(&str, Vec<&str>)> {
        let mut dump: Vec<(&str, Vec<&str>)> = self
            .buckets
            .iter()
            .map(|(pattern, words)| {
                let mut words: Vec<&str> = words.iter().map(String::as_str).collect();
                words.sort_unstable();
                (pattern.as_str(), words)
            })
            .collect();
        dump.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        dump
    }
}
