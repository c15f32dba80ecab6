//! Min-priority frontier for uniform-cost search

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Words waiting to be expanded, smallest distance first
///
/// Equal distances pop in ascending word order. A word may be queued more
/// than once if a shorter route to it turns up later; the search is expected
/// to skip the stale copies.
#[derive(Debug, Default)]
pub(crate) struct Frontier<'g> {
    heap: BinaryHeap<Reverse<(usize, &'g str)>>,
}

impl<'g> Frontier<'g> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue `word` at `distance`
    pub(crate) fn push(&mut self, distance: usize, word: &'g str) {
        self.heap.push(Reverse((distance, word)));
    }

    /// Remove the entry with the smallest distance
    pub(crate) fn pop(&mut self) -> Option<(usize, &'g str)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_distance_first() {
        let mut frontier = Frontier::new();
        frontier.push(3, "car");
        frontier.push(1, "hat");
        frontier.push(2, "cat");

        assert_eq!(frontier.pop(), Some((1, "hat")));
        assert_eq!(frontier.pop(), Some((2, "cat")));
        assert_eq!(frontier.pop(), Some((3, "car")));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn equal_distances_pop_in_word_order() {
        let mut frontier = Frontier::new();
        frontier.push(1, "pot");
        frontier.push(1, "hat");

        assert_eq!(frontier.pop(), Some((1, "hat")));
        assert_eq!(frontier.pop(), Some((1, "pot")));
    }

    #[test]
    fn keeps_duplicate_entries() {
        let mut frontier = Frontier::new();
        frontier.push(4, "cut");
        frontier.push(2, "cut");

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), Some((2, "cut")));
        assert_eq!(frontier.pop(), Some((4, "cut")));
    }
}
