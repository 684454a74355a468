//! Plain-text extraction helpers

/// Collapse every run of whitespace to one space and trim the ends
///
/// ```
/// use attestkit_render::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  Fait à\n Lyon,\tle "), "Fait à Lyon, le");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Join text segments, one per line
pub(crate) fn join_lines<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    segments
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_nbsp() {
        assert_eq!(normalize_whitespace("550.00\u{a0}€"), "550.00 €");
    }

    #[test]
    fn test_join_skips_blank() {
        assert_eq!(join_lines(["a", "", "  ", "b"]), "a\nb");
    }
}
