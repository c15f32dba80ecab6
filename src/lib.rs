//! Word Morph
//!
//! Finds the shortest word ladder between two words of equal length, where
//! each step changes exactly one letter and every word is in the dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_morph::graph::Graph;
//! use word_morph::search::PathFinder;
//!
//! let graph = Graph::build_from_words(["car", "cat", "hat", "hot", "pot", "put"]);
//! let finder = PathFinder::new(&graph);
//!
//! let ladder = finder.find("hot", "put").unwrap();
//! assert_eq!(ladder.distance, 2);
//! assert_eq!(ladder.path, vec!["hot", "pot", "put"]);
//! ```

// Word normalization and wildcard patterns
pub mod core;

// Adjacency index
pub mod graph;

// Shortest-path search
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
