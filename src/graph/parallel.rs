//! Parallel bulk construction
//!
//! The word list is split into one contiguous range per worker. Workers
//! compute patterns without holding any lock and take the graph lock only to
//! record a word. All workers are joined before the graph is handed back, so
//! callers only ever see a fully built index.

use super::Graph;
use crate::core::normalize;
use crate::wordlists::loader::{LoadError, load_from_file};
use parking_lot::Mutex;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

impl Graph {
    /// Build a graph using `workers` concurrent insertion tasks
    ///
    /// Produces the same index as [`Graph::build_from_words`] on the same
    /// input. The worker count is clamped to between one and the number of
    /// words.
    ///
    /// # Examples
    /// ```
    /// use word_morph::graph::Graph;
    ///
    /// let words = ["car", "cat", "cut", "hat", "hot"];
    /// let graph = Graph::build_parallel(&words, 4);
    /// assert_eq!(graph.len(), 5);
    /// ```
    #[must_use]
    pub fn build_parallel<S>(words: &[S], workers: usize) -> Self
    where
        S: AsRef<str> + Sync,
    {
        let workers = workers.clamp(1, words.len().max(1));
        let shared = Mutex::new(Self::new());

        rayon::scope(|scope| {
            for range in chunk_ranges(words.len(), workers) {
                let chunk = &words[range];
                let shared = &shared;
                scope.spawn(move |_| {
                    for raw in chunk {
                        let Some(word) = normalize(raw.as_ref()) else {
                            continue;
                        };
                        let word_patterns = Self::patterns(&word);
                        shared.lock().insert(word, word_patterns);
                    }
                });
            }
        });

        let graph = shared.into_inner();
        debug!(
            words = graph.len(),
            buckets = graph.bucket_count(),
            workers,
            "graph built"
        );
        graph
    }

    /// Build a graph from a word file, keeping only words of `word_length`
    ///
    /// Uses `workers` insertion tasks, or one per thread in the rayon pool
    /// when `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file cannot be read or `word_length`
    /// is zero.
    pub fn build_from_file<P: AsRef<Path>>(
        path: P,
        word_length: usize,
        workers: Option<usize>,
    ) -> Result<Self, LoadError> {
        let words = load_from_file(path, word_length)?;
        let workers = workers.unwrap_or_else(rayon::current_num_threads);
        Ok(Self::build_parallel(&words, workers))
    }
}

/// Split `len` items into `workers` contiguous ranges
///
/// Each range holds `len / workers` items and the last one also takes the
/// remainder. There are never more ranges than items, and empty ranges are
/// dropped.
fn chunk_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.clamp(1, len.max(1));
    let per_worker = len / workers;
    let remainder = len % workers;

    (0..workers)
        .map(|index| {
            let start = index * per_worker;
            let mut end = start + per_worker;
            if index == workers - 1 {
                end += remainder;
            }
            start..end
        })
        .filter(|range| !range.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    #[test]
    fn chunk_ranges_even_split() {
        assert_eq!(chunk_ranges(9, 3), vec![0..3, 3..6, 6..9]);
    }

    #[test]
    fn chunk_ranges_last_takes_remainder() {
        assert_eq!(chunk_ranges(10, 3), vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn chunk_ranges_more_workers_than_items() {
        // One item per worker, extra workers are never created
        assert_eq!(chunk_ranges(2, 4), vec![0..1, 1..2]);
    }

    #[test]
    fn chunk_ranges_huge_worker_count() {
        assert_eq!(chunk_ranges(3, usize::MAX), vec![0..1, 1..2, 2..3]);
        assert!(chunk_ranges(0, usize::MAX).is_empty());
    }

    #[test]
    fn chunk_ranges_empty_input() {
        assert!(chunk_ranges(0, 8).is_empty());
    }

    #[test]
    fn chunk_ranges_zero_workers() {
        assert_eq!(chunk_ranges(5, 0), vec![0..5]);
    }

    #[test]
    fn parallel_build_skips_blank_words() {
        let words = ["car", "", "  ", "cat"];
        let graph = Graph::build_parallel(&words, 2);

        assert_eq!(graph.len(), 2);
        assert!(graph.adjacent("car").contains("cat"));
    }

    #[test]
    fn parallel_build_huge_worker_count() {
        let graph = Graph::build_parallel(&["hot", "pot", "put"], usize::MAX);
        assert_eq!(graph.len(), 3);
        assert!(graph.adjacent("pot").contains("put"));
    }

    #[test]
    fn parallel_build_zero_workers() {
        let graph = Graph::build_parallel(&["hot", "pot"], 0);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn build_from_file_filters_length() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "car\ncat\ncart\n\n  hat  \na\nhot").unwrap();

        let graph = Graph::build_from_file(file.path(), 3, None).unwrap();

        assert_eq!(graph.len(), 4);
        assert!(!graph.contains("cart"));
        assert!(graph.adjacent("hat").contains("hot"));
    }

    #[test]
    fn build_from_file_explicit_workers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hot\npot\nput").unwrap();

        let graph = Graph::build_from_file(file.path(), 3, Some(usize::MAX)).unwrap();
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn build_from_file_missing() {
        let result = Graph::build_from_file("/nonexistent/word_morph/words.txt", 3, Some(2));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn graph_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Graph>();
    }

    proptest! {
        #[test]
        fn parallel_matches_sequential(
            words in prop::collection::vec("[a-d]{1,4}", 0..60),
            workers in 1usize..9
        ) {
            let sequential = Graph::build_from_words(&words);
            let parallel = Graph::build_parallel(&words, workers);

            prop_assert_eq!(parallel.len(), sequential.len());
            prop_assert_eq!(parallel.buckets_sorted(), sequential.buckets_sorted());
        }
    }
}
