//! Word list sources
//!
//! Loads dictionaries from disk and filters them down to a single word
//! length before they are indexed.

pub mod loader;

pub use loader::{LoadError, load_from_file, words_of_length};
