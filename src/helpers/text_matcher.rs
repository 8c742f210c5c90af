/// `haystack` is expected to be lower-cased already; keywords are lower-case literals.
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// True when any of the lower-cased `values` contains any keyword.
pub fn any_contains(values: &[String], keywords: &[&str]) -> bool {
    values.iter().any(|value| contains_any(value, keywords))
}

/// Cuts on a char boundary; `text` is returned whole when it already fits.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_substrings_not_words() {
        assert!(contains_any("rebuild the dashboard", &["ui"]));
        assert!(!contains_any("rebuild the dashboard", &["api"]));
    }

    #[test]
    fn any_contains_checks_every_value() {
        let labels = vec!["bug".to_string(), "high-priority".to_string()];
        assert!(any_contains(&labels, &["high"]));
        assert!(!any_contains(&labels, &["low"]));
        assert!(!any_contains(&[], &["low"]));
    }

    #[test]
    fn truncation_respects_multibyte_chars() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("short", 200), "short");
        assert_eq!(truncate_chars("", 3), "");
    }
}
