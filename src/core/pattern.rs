//! Wildcard pattern generation
//!
//! A pattern is a word with exactly one character replaced by [`PLACEHOLDER`].
//! Two distinct words are one letter apart iff they share a pattern:
//!
//! ```text
//! car -> .ar  c.r  ca.
//! cat -> .at  c.t  ca.
//!                  ^^^ shared bucket, so car <-> cat
//! ```
//!
//! Replacing a character never changes the character count, so words of
//! different lengths can never produce the same pattern.

/// Wildcard symbol substituted into each position
pub const PLACEHOLDER: char = '.';

/// Generate the one-letter wildcard patterns for a word
///
/// Returns one pattern per character position, in position order. A word of
/// length L yields exactly L patterns; the empty word yields none.
///
/// Works on `char`s rather than bytes so multi-byte letters are replaced
/// whole.
///
/// # Examples
/// ```
/// use word_morph::core::patterns;
///
/// assert_eq!(patterns("cat"), vec![".at", "c.t", "ca."]);
/// assert!(patterns("").is_empty());
/// ```
#[must_use]
pub fn patterns(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();

    (0..chars.len())
        .map(|index| {
            chars
                .iter()
                .enumerate()
                .map(|(i, &ch)| if i == index { PLACEHOLDER } else { ch })
                .collect()
        })
        .collect()
}
