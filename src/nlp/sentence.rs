//! Sentence-boundary detection
//!
//! Splits text on UAX #29 sentence boundaries. PDF extraction emits hard
//! line breaks mid-sentence and the segmenter treats line separators as
//! mandatory breaks, so input is whitespace-normalized first; sentence
//! offsets refer to the normalized text.

use unicode_segmentation::UnicodeSegmentation;

use crate::pipeline::traits::SentenceSplitter;
use crate::types::Sentence;

/// Collapse every whitespace run (including line breaks) to a single space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// UAX #29 sentence splitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSplitter;

impl UnicodeSentenceSplitter {
    /// Create a splitter.
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split(&self, text: &str) -> Vec<Sentence> {
        let normalized = normalize_whitespace(text);
        let mut sentences = Vec::new();

        for (offset, segment) in normalized.split_sentence_bound_indices() {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                continue;
            }
            let lead = segment.len() - segment.trim_start().len();
            let start = offset + lead;
            sentences.push(Sentence::new(
                trimmed,
                start,
                start + trimmed.len(),
                sentences.len(),
            ));
        }

        sentences
    }
}
