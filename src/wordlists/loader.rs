//! Word list loading utilities
//!
//! Reads dictionary files and keeps only the words of the requested length.
//! This is the only place the crate touches the filesystem.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word length must be at least 1, got {0}")]
    InvalidLength(usize),
}

/// Load words of exactly `word_length` characters from a file
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or
/// [`LoadError::InvalidLength`] if `word_length` is zero.
///
/// # Examples
/// ```no_run
/// use word_morph::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words", 4).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Vec<String>, LoadError> {
    if word_length == 0 {
        return Err(LoadError::InvalidLength(word_length));
    }

    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_of_length(&content, word_length))
}

/// Split text on whitespace, normalize each token, and keep those of exactly
/// `word_length` characters
///
/// The length is checked after lowercasing, since lowercasing can change the
/// character count (`İ` becomes `i̇`). Length is counted in characters, not
/// bytes.
///
/// # Examples
/// ```
/// use word_morph::wordlists::loader::words_of_length;
///
/// let words = words_of_length("Cat\ncart\n  dog \n", 3);
/// assert_eq!(words, vec!["cat", "dog"]);
/// ```
#[must_use]
pub fn words_of_length(text: &str, word_length: usize) -> Vec<String> {
    text.split_whitespace()
        .filter_map(normalize)
        .filter(|word| word.chars().count() == word_length)
        .collect()
}
