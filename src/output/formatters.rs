//! Formatting utilities for terminal output
//!
//! Plain-text renderings; color is applied by the display layer.

use crate::graph::Graph;
use crate::search::Ladder;

/// Format one bucket as `pattern: word word ...`
#[must_use]
pub fn bucket_line(pattern: &str, words: &[&str]) -> String {
    format!("{pattern}: {}", words.join(" "))
}

/// Sorted, space-separated neighbor list
#[must_use]
pub fn neighbor_list<'a>(neighbors: impl IntoIterator<Item = &'a str>) -> String {
    let mut words: Vec<&str> = neighbors.into_iter().collect();
    words.sort_unstable();
    words.join(" ")
}

/// Neighbor report for one word
///
/// Two lines for an unknown word (`Word`, `Not found`); for an indexed word
/// the `Adjacent` line is followed by a blank line.
#[must_use]
pub fn adjacent_report(graph: &Graph, word: &str) -> String {
    let header = format!("Word    : {word}");
    if graph.contains(word) {
        format!("{header}\nAdjacent: {}\n", neighbor_list(graph.adjacent(word)))
    } else {
        format!("{header}\nNot found")
    }
}

/// Step count line for a ladder
#[must_use]
pub fn steps_line(ladder: &Ladder) -> String {
    format!("Path : {} steps", ladder.distance)
}
