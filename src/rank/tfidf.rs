//! TF-IDF topic-relevance scoring
//!
//! A sentence's score is the sum of its weights for the topic term set.
//! IDF is computed over the sentence corpus itself: rarity is measured
//! sentence-to-sentence, not against any external collection.

use rustc_hash::FxHashSet;

use super::{RelevanceScores, TermWeightTable, Vocabulary};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::WordTokenizer;
use crate::pipeline::traits::RelevanceScorer;
use crate::types::Sentence;

/// Scores sentences by summed TF-IDF weight of topic terms.
///
/// The topic query is tokenized with the same rules as the corpus; terms
/// repeated in the topic contribute once per sentence (set semantics). A
/// topic sharing no vocabulary with the corpus yields all-zero scores.
#[derive(Debug, Clone, Default)]
pub struct TfidfScorer {
    tokenizer: WordTokenizer,
    stopwords: StopwordFilter,
}

impl TfidfScorer {
    /// Create a scorer with English stop words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stop-word filter.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replace the word tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: WordTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Tokenize and drop stop words.
    fn content_terms(&self, text: &str) -> Vec<String> {
        let mut terms = self.tokenizer.tokenize(text);
        terms.retain(|t| !self.stopwords.is_stopword(t));
        terms
    }
}

impl RelevanceScorer for TfidfScorer {
    fn score(&self, sentences: &[Sentence], topic: &str) -> RelevanceScores {
        if sentences.is_empty() {
            return RelevanceScores::empty();
        }

        let sentence_terms: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.content_terms(&s.text))
            .collect();

        let vocab = Vocabulary::build(&sentence_terms);
        let table = TermWeightTable::build(&vocab, &sentence_terms);

        // Topic terms count once each, however often they repeat in the
        // query.
        let topic_terms: FxHashSet<u32> = self
            .content_terms(topic)
            .iter()
            .filter_map(|t| vocab.id(t))
            .collect();

        let scores = (0..sentences.len())
            .map(|row| topic_terms.iter().map(|&t| table.weight(row, t)).sum())
            .collect();

        RelevanceScores::new(scores, topic_terms.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, 0, t.len(), i))
            .collect()
    }

    const MAT_CORPUS: &[&str] = &[
        "The cat sat on the mat.",
        "Dogs are loyal animals.",
        "The mat was red.",
    ];

    #[test]
    fn test_mat_sentences_tie_and_others_score_zero() {
        let scorer = TfidfScorer::new();
        let scores = scorer.score(&corpus(MAT_CORPUS), "mat");

        // "mat" appears once in sentences 0 and 2 with identical corpus
        // statistics, so both carry the same positive weight.
        assert!(scores.score(0) > 0.0);
        assert!((scores.score(0) - scores.score(2)).abs() < 1e-12);
        assert_eq!(scores.score(1), 0.0);
        assert_eq!(scores.topic_term_count, 1);
    }

    #[test]
    fn test_disjoint_topic_scores_all_zero() {
        let scorer = TfidfScorer::new();
        let scores = scorer.score(&corpus(MAT_CORPUS), "quantum chromodynamics");

        assert!(scores.all_zero());
        assert_eq!(scores.topic_term_count, 0);
    }

    #[test]
    fn test_empty_topic_scores_all_zero() {
        let scorer = TfidfScorer::new();
        assert!(scorer.score(&corpus(MAT_CORPUS), "").all_zero());
    }

    #[test]
    fn test_stop_word_topic_scores_all_zero() {
        // "the" occurs in the corpus but is removed as a stop word.
        let scorer = TfidfScorer::new();
        assert!(scorer.score(&corpus(MAT_CORPUS), "the").all_zero());
    }

    #[test]
    fn test_repeated_topic_terms_not_double_counted() {
        let scorer = TfidfScorer::new();
        let once = scorer.score(&corpus(MAT_CORPUS), "mat");
        let thrice = scorer.score(&corpus(MAT_CORPUS), "mat mat mat");

        assert_eq!(once, thrice);
    }

    #[test]
    fn test_multi_term_topic_sums_weights() {
        let scorer = TfidfScorer::new();
        let mat = scorer.score(&corpus(MAT_CORPUS), "mat");
        let cat_mat = scorer.score(&corpus(MAT_CORPUS), "cat mat");

        // Sentence 0 contains both terms; its combined score exceeds the
        // single-term score.
        assert!(cat_mat.score(0) > mat.score(0));
        // Sentence 2 contains only "mat"; unchanged.
        assert!((cat_mat.score(2) - mat.score(2)).abs() < 1e-12);
    }

    #[test]
    fn test_empty_corpus_yields_empty_scores() {
        let scorer = TfidfScorer::new();
        let scores = scorer.score(&[], "mat");
        assert!(scores.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let scorer = TfidfScorer::new();
        let a = scorer.score(&corpus(MAT_CORPUS), "mat red");
        let b = scorer.score(&corpus(MAT_CORPUS), "mat red");
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_stopword_filter() {
        // With stop-word filtering disabled, "the" is a scorable term.
        let scorer = TfidfScorer::new().with_stopwords(StopwordFilter::none());
        let scores = scorer.score(&corpus(MAT_CORPUS), "the");

        assert!(scores.score(0) > 0.0);
        assert_eq!(scores.score(1), 0.0);
    }
}
