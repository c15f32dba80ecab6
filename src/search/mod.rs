//! Shortest word-ladder search
//!
//! Runs Dijkstra's algorithm over the implicit word graph, with every edge
//! costing one step and [`Graph::adjacent`] supplying the edges. With unit
//! weights this returns the same distances as a breadth-first search.

mod frontier;

use crate::graph::Graph;
use frontier::Frontier;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// A shortest transformation between two words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    /// Number of single-letter steps
    pub distance: usize,
    /// Words from start to end inclusive; empty when start and end are equal
    pub path: Vec<String>,
}

impl Ladder {
    /// Check that this ladder is a legal walk through `graph`
    ///
    /// Every consecutive pair must be adjacent in the graph and the number of
    /// steps must match `distance`. The empty ladder is valid only with a
    /// distance of zero.
    #[must_use]
    pub fn is_valid_in(&self, graph: &Graph) -> bool {
        if self.path.is_empty() {
            return self.distance == 0;
        }

        self.path.len() == self.distance + 1
            && self
                .path
                .windows(2)
                .all(|pair| graph.adjacent(&pair[0]).contains(pair[1].as_str()))
    }
}

/// Finds shortest ladders in a built [`Graph`]
///
/// Holds only a shared borrow of the graph, so any number of finders can
/// query one graph, including from different threads.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g Graph,
}

/// Bookkeeping for a single `find` call
///
/// Created fresh for every search and dropped when it returns.
#[derive(Debug, Default)]
struct Session<'g> {
    /// word -> fewest steps from start found so far
    distances: FxHashMap<&'g str, usize>,
    /// word -> predecessor on that route (`None` for the start word)
    trail: FxHashMap<&'g str, Option<&'g str>>,
    /// words taken off the frontier and expanded
    expanded: usize,
}

impl<'g> PathFinder<'g> {
    #[must_use]
    pub const fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Find a shortest ladder from `start` to `end`
    ///
    /// Returns:
    /// - `None` if either word is empty, or no ladder exists (including when
    ///   either word is not in the graph)
    /// - a ladder of distance 0 and an empty path if `start == end`
    /// - otherwise a ladder whose path begins with `start` and ends with `end`
    ///
    /// When several ladders share the minimal length, the one returned
    /// prefers alphabetically earlier words nearer the start.
    ///
    /// # Examples
    /// ```
    /// use word_morph::graph::Graph;
    /// use word_morph::search::PathFinder;
    ///
    /// let graph = Graph::build_from_words(["car", "cat", "hat", "hot"]);
    /// let finder = PathFinder::new(&graph);
    ///
    /// let ladder = finder.find("hot", "car").unwrap();
    /// assert_eq!(ladder.distance, 3);
    /// assert_eq!(ladder.path, vec!["hot", "hat", "cat", "car"]);
    ///
    /// assert!(finder.find("hot", "").is_none());
    /// ```
    #[must_use]
    pub fn find(&self, start: &str, end: &str) -> Option<Ladder> {
        if start.is_empty() || end.is_empty() {
            return None;
        }
        if start == end {
            return Some(Ladder {
                distance: 0,
                path: Vec::new(),
            });
        }

        // A word outside the graph has no neighbors, so nothing is reachable
        let start = self.graph.resolve(start)?;
        let session = self.measure(start, end);
        Self::build_path(&session, start, end)
    }

    /// Run the search from `start`, stopping once `end` is settled
    fn measure(&self, start: &'g str, end: &str) -> Session<'g> {
        let mut session = Session::default();
        let mut frontier = Frontier::new();

        session.distances.insert(start, 0);
        session.trail.insert(start, None);
        frontier.push(0, start);

        while let Some((distance, word)) = frontier.pop() {
            // A shorter route was recorded after this entry was queued
            if session.distances.get(word).is_some_and(|&best| distance > best) {
                continue;
            }
            if word == end {
                break;
            }

            session.expanded += 1;
            let next = distance + 1;

            for neighbor in self.graph.adjacent(word) {
                let improves = session
                    .distances
                    .get(neighbor)
                    .is_none_or(|&known| next < known);

                if improves {
                    trace!(from = word, to = neighbor, distance = next, "relaxed");
                    session.distances.insert(neighbor, next);
                    session.trail.insert(neighbor, Some(word));
                    frontier.push(next, neighbor);
                }
            }
        }

        debug!(
            start,
            end,
            expanded = session.expanded,
            reached = session.distances.contains_key(end),
            queued = frontier.len(),
            "search finished"
        );
        session
    }

    /// Walk the trail back from `end` to `start`
    fn build_path(session: &Session<'g>, start: &'g str, end: &str) -> Option<Ladder> {
        let (&end, &distance) = session.distances.get_key_value(end)?;

        let mut path = vec![end.to_string()];
        let mut current = end;
        while current != start {
            let previous = session.trail.get(current).copied().flatten()?;
            path.push(previous.to_string());
            current = previous;
        }
        path.reverse();

        Some(Ladder { distance, path })
    }
}
