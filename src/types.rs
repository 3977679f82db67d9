//! Core data types shared across the pipeline.
//!
//! Everything here is built fresh per summarization request and never
//! mutated after creation; stages hand these types to each other and the
//! whole set is discarded once the output document is rendered.

use serde::{Deserialize, Serialize};

/// A single sentence from the extracted corpus.
///
/// `index` is the position in corpus order, which selection uses to break
/// score ties; `start`/`end` are byte offsets into the normalized text the
/// sentence was split from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text, whitespace-normalized.
    pub text: String,
    /// Byte offset of the sentence start in the normalized text.
    pub start: usize,
    /// Byte offset one past the sentence end in the normalized text.
    pub end: usize,
    /// Position in corpus order (0-based).
    pub index: usize,
}

impl Sentence {
    /// Create a sentence record.
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

/// A sentence paired with its topic-relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// The sentence.
    pub sentence: Sentence,
    /// Relevance to the topic query (0.0 when no topic term occurs).
    pub score: f64,
}

/// The selected sentences for one request, in descending score order
/// (ties keep corpus order).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    /// The topic the corpus was ranked against.
    pub topic: String,
    /// Selected sentences, highest score first.
    pub sentences: Vec<ScoredSentence>,
}

impl Summary {
    /// Create a summary from ranked sentences.
    pub fn new(topic: impl Into<String>, sentences: Vec<ScoredSentence>) -> Self {
        Self {
            topic: topic.into(),
            sentences,
        }
    }

    /// Number of selected sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether no sentence was selected.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterate over the selected sentence texts in summary order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.sentence.text.as_str())
    }
}

/// Output of one summarization request: the selected sentences plus the
/// rendered PDF bytes.
#[derive(Debug, Clone)]
pub struct RenderedSummary {
    /// The selected sentences, highest score first.
    pub summary: Summary,
    /// The rendered output document.
    pub document: Vec<u8>,
}

/// Configuration for one summarization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeConfig {
    /// Maximum number of sentences to select.
    pub sentence_count: usize,
    /// Stop-word language code (e.g., "en", "de", "fr").
    pub language: String,
    /// Title line of the rendered document.
    pub title: String,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            sentence_count: 8,
            language: "en".to_string(),
            title: "Summary".to_string(),
        }
    }
}

impl SummarizeConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of sentences to select.
    pub fn with_sentence_count(mut self, count: usize) -> Self {
        self.sentence_count = count;
        self
    }

    /// Set the stop-word language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the title line of the rendered document.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = SummarizeConfig::default();
        assert_eq!(cfg.sentence_count, 8);
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.title, "Summary");
    }

    #[test]
    fn test_config_builders() {
        let cfg = SummarizeConfig::new()
            .with_sentence_count(3)
            .with_language("de")
            .with_title("Zusammenfassung");
        assert_eq!(cfg.sentence_count, 3);
        assert_eq!(cfg.language, "de");
        assert_eq!(cfg.title, "Zusammenfassung");
    }

    #[test]
    fn test_summary_accessors() {
        let summary = Summary::new(
            "mat",
            vec![
                ScoredSentence {
                    sentence: Sentence::new("The mat was red.", 0, 16, 2),
                    score: 0.7,
                },
                ScoredSentence {
                    sentence: Sentence::new("Dogs are loyal.", 17, 32, 1),
                    score: 0.0,
                },
            ],
        );
        assert_eq!(summary.len(), 2);
        assert!(!summary.is_empty());
        let texts: Vec<_> = summary.texts().collect();
        assert_eq!(texts, vec!["The mat was red.", "Dogs are loyal."]);
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::default();
        assert!(summary.is_empty());
        assert_eq!(summary.len(), 0);
    }
}
