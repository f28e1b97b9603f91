//! Glossary word filter.

use folgen_domain::GlossaryEntry;

/// Entries whose word contains `substring`, ignoring case.
///
/// An absent or empty substring returns every entry. Order is preserved.
pub fn filter_words(entries: &[GlossaryEntry], substring: Option<&str>) -> Vec<GlossaryEntry> {
    let needle = match substring {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => return entries.to_vec(),
    };

    entries
        .iter()
        .filter(|entry| entry.word_contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::sample_collections;

    fn words(entries: &[GlossaryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn no_filter_returns_everything_in_order() {
        let glossary = sample_collections().glossary;

        let result = filter_words(&glossary, None);

        assert_eq!(result, glossary);
    }

    #[test]
    fn empty_filter_returns_everything() {
        let glossary = sample_collections().glossary;

        let result = filter_words(&glossary, Some(""));

        assert_eq!(result, glossary);
    }

    #[test]
    fn matches_case_insensitively() {
        let glossary = sample_collections().glossary;

        assert_eq!(words(&filter_words(&glossary, Some("apf"))), vec!["Apfel"]);
        assert_eq!(words(&filter_words(&glossary, Some("APF"))), vec!["Apfel"]);
    }

    #[test]
    fn matches_inside_the_word() {
        let glossary = sample_collections().glossary;

        assert_eq!(words(&filter_words(&glossary, Some("rn"))), vec!["Birne"]);
    }

    #[test]
    fn matches_non_ascii_words() {
        let glossary = sample_collections().glossary;

        assert_eq!(words(&filter_words(&glossary, Some("ÜB"))), vec!["Übung"]);
    }

    #[test]
    fn only_word_field_is_matched() {
        let glossary = sample_collections().glossary;

        // "Frucht" appears in Apfel's explanation, not in any word
        assert!(filter_words(&glossary, Some("frucht")).is_empty());
    }

    #[test]
    fn result_is_exact_subsequence() {
        let glossary = vec![
            GlossaryEntry::new("Zahl", "Nomen"),
            GlossaryEntry::new("zählen", "Verb"),
            GlossaryEntry::new("Zahlenstrahl", "Nomen"),
            GlossaryEntry::new("Bruch", "Nomen"),
        ];

        let result = filter_words(&glossary, Some("zahl"));

        assert_eq!(words(&result), vec!["Zahl", "Zahlenstrahl"]);
    }
}
