//! Word normalization
//!
//! Dictionary entries and query words are compared after trimming and
//! lowercasing, so "Cat " and "cat" index to the same node.

/// Normalize a raw word: trim surrounding whitespace and lowercase it
///
/// Returns `None` when nothing is left after trimming.
///
/// # Examples
/// ```
/// use word_morph::core::normalize;
///
/// assert_eq!(normalize("  CaT\n"), Some("cat".to_string()));
/// assert_eq!(normalize("   "), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize("CRANE").as_deref(), Some("crane"));
        assert_eq!(normalize("CrAnE").as_deref(), Some("crane"));
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize("  hot\t").as_deref(), Some("hot"));
        assert_eq!(normalize("\nhot\r\n").as_deref(), Some("hot"));
    }

    #[test]
    fn normalize_rejects_blank() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("\n\t"), None);
    }

    #[test]
    fn normalize_keeps_inner_characters() {
        // Only the edges are trimmed
        assert_eq!(normalize(" ice cream ").as_deref(), Some("ice cream"));
    }
}
