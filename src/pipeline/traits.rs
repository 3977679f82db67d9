//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; the default stage set covers the PDF-to-PDF path,
//! and any stage can be swapped through
//! [`PipelineBuilder`](crate::pipeline::runner::PipelineBuilder).

use crate::error::Result;
use crate::rank::RelevanceScores;
use crate::types::{ScoredSentence, Sentence, SummarizeConfig, Summary};

// ============================================================================
// Stage traits
// ============================================================================

/// Extracts plain text from a source document.
///
/// # Contract
///
/// - **Input**: the raw document bytes.
/// - **Output**: all page texts concatenated in document order, with no
///   page-boundary markers.
/// - **Errors**: extraction failure when the document cannot be parsed. An
///   empty result is not itself an error; downstream stages handle an empty
///   corpus.
pub trait TextExtractor {
    /// Extract the document's text.
    fn extract(&self, document: &[u8]) -> Result<String>;
}

/// Segments raw text into sentences.
///
/// # Contract
///
/// - Deterministic for identical input.
/// - Sentence `index` fields reflect corpus order.
/// - Empty input yields an empty sequence, not an error.
pub trait SentenceSplitter {
    /// Split `text` into sentences in corpus order.
    fn split(&self, text: &str) -> Vec<Sentence>;
}

/// Scores each sentence's relevance to a topic query.
///
/// # Contract
///
/// - Scores are deterministic given (corpus, topic).
/// - `scores[i]` corresponds to `sentences[i]`.
/// - A topic sharing no vocabulary with the corpus produces all-zero
///   scores; an empty corpus produces an empty result.
pub trait RelevanceScorer {
    /// Score every sentence against `topic`.
    fn score(&self, sentences: &[Sentence], topic: &str) -> RelevanceScores;
}

/// Orders sentences by score and keeps the top `k`.
///
/// # Contract
///
/// - Descending score; equal scores preserve corpus order (stable).
/// - Fewer than `k` sentences returns all of them; `k = 0` returns none.
pub trait SummarySelector {
    /// Select the top `k` sentences.
    fn select(
        &self,
        sentences: &[Sentence],
        scores: &RelevanceScores,
        k: usize,
    ) -> Vec<ScoredSentence>;
}

/// Renders a summary into an output document.
///
/// # Contract
///
/// - Sentence text is preserved exactly: no truncation, no re-ordering.
/// - An empty summary still produces a valid document.
/// - **Errors**: render failure when the output cannot be produced.
pub trait SummaryRenderer {
    /// Render `summary` into document bytes.
    fn render(&self, summary: &Summary, cfg: &SummarizeConfig) -> Result<Vec<u8>>;
}

// ============================================================================
// TopKSelector — default selection stage
// ============================================================================

/// Stable top-K selection: descending score, ties keep corpus order,
/// truncated to `k`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopKSelector;

impl SummarySelector for TopKSelector {
    fn select(
        &self,
        sentences: &[Sentence],
        scores: &RelevanceScores,
        k: usize,
    ) -> Vec<ScoredSentence> {
        let mut ranked: Vec<ScoredSentence> = sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| ScoredSentence {
                sentence: sentence.clone(),
                score: scores.score(i),
            })
            .collect();

        // sort_by is stable, so equal scores keep corpus order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(k);
        ranked
    }
}
