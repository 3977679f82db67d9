//! Topic-relevance ranking
//!
//! Builds a per-request vocabulary and term weight table over the sentence
//! corpus (each sentence counts as one "document" for IDF purposes) and
//! scores every sentence against the topic term set.

pub mod tfidf;
pub mod vocabulary;
pub mod weights;

pub use tfidf::TfidfScorer;
pub use vocabulary::Vocabulary;
pub use weights::TermWeightTable;

/// Result of scoring a corpus against a topic.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceScores {
    /// Per-sentence scores, indexed by corpus position.
    pub scores: Vec<f64>,
    /// Number of distinct topic terms found in the corpus vocabulary.
    pub topic_term_count: usize,
}

impl RelevanceScores {
    /// Create a result from per-sentence scores.
    pub fn new(scores: Vec<f64>, topic_term_count: usize) -> Self {
        Self {
            scores,
            topic_term_count,
        }
    }

    /// Result for an empty corpus.
    pub fn empty() -> Self {
        Self {
            scores: Vec::new(),
            topic_term_count: 0,
        }
    }

    /// Score for a corpus position (0.0 when out of range).
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    /// Number of scored sentences.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the corpus was empty.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Whether no sentence carries any topic weight.
    pub fn all_zero(&self) -> bool {
        self.scores.iter().all(|&s| s == 0.0)
    }
}
