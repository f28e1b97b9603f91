//! Glossary entry entity

use serde::{Deserialize, Serialize};

/// A word explained in the glossary.
///
/// Related words are referenced by name only; entries never embed each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryEntry {
    #[serde(alias = "wort")]
    pub word: String,
    /// Word-type tag (the `type` field on the wire)
    #[serde(default, rename = "type", alias = "wortart")]
    pub word_type: String,
    #[serde(default, alias = "erklaerung")]
    pub explanation: String,
    #[serde(default, alias = "beispiele")]
    pub examples: Vec<String>,
    #[serde(default, alias = "verwandteWoerter")]
    pub related_words: Vec<String>,
}

impl GlossaryEntry {
    pub fn new(word: impl Into<String>, word_type: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            word_type: word_type.into(),
            explanation: String::new(),
            examples: Vec::new(),
            related_words: Vec::new(),
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }

    pub fn with_related_words(mut self, related_words: Vec<String>) -> Self {
        self.related_words = related_words;
        self
    }

    /// Case-insensitive substring match on `word`.
    ///
    /// `needle_lower` must already be lower-cased.
    pub fn word_contains(&self, needle_lower: &str) -> bool {
        self.word.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_contains_ignores_case() {
        let entry = GlossaryEntry::new("Apfelbaum", "Nomen");
        assert!(entry.word_contains("apf"));
        assert!(entry.word_contains("baum"));
        assert!(!entry.word_contains("birne"));
    }

    #[test]
    fn word_contains_handles_non_ascii() {
        let entry = GlossaryEntry::new("Übung", "Nomen");
        assert!(entry.word_contains("üb"));
    }

    #[test]
    fn serializes_normalized_field_names() {
        let entry = GlossaryEntry::new("Apfel", "Nomen")
            .with_explanation("Eine Frucht")
            .with_examples(vec!["Der Apfel ist rot.".to_string()])
            .with_related_words(vec!["Birne".to_string()]);

        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["word"], "Apfel");
        assert_eq!(value["type"], "Nomen");
        assert_eq!(value["explanation"], "Eine Frucht");
        assert_eq!(value["examples"][0], "Der Apfel ist rot.");
        assert_eq!(value["relatedWords"][0], "Birne");
    }

    #[test]
    fn word_is_required() {
        let result: Result<GlossaryEntry, _> = serde_json::from_str(r#"{"type": "Nomen"}"#);
        assert!(result.is_err());
    }
}
