//! Sparse term weight table
//!
//! Flat CSR-style layout: each sentence owns a contiguous run of
//! (term id, weight) entries sorted by id, so a lookup is one binary search
//! and building is a single pass over the corpus.

use rustc_hash::FxHashMap;

use super::vocabulary::Vocabulary;

/// Smoothed inverse document frequency over a corpus of `num_docs`
/// sentences.
pub fn idf(doc_freq: u32, num_docs: usize) -> f64 {
    ((1 + num_docs) as f64 / (1 + doc_freq as usize) as f64).ln() + 1.0
}

/// Per-sentence TF-IDF weights over the corpus vocabulary.
///
/// TF is the raw in-sentence count; rows are not length-normalized, so
/// sentences covering the same topic terms with the same counts score
/// identically.
#[derive(Debug, Clone)]
pub struct TermWeightTable {
    /// Row i's entries live at indices row_ptr[i]..row_ptr[i+1].
    row_ptr: Vec<usize>,
    /// Term ids per entry, sorted within each row.
    term_ids: Vec<u32>,
    /// Weight per entry.
    weights: Vec<f64>,
}

impl TermWeightTable {
    /// Build one weight row per sentence.
    pub fn build(vocab: &Vocabulary, sentence_terms: &[Vec<String>]) -> Self {
        let num_docs = sentence_terms.len();
        let mut row_ptr = Vec::with_capacity(num_docs + 1);
        let mut term_ids = Vec::new();
        let mut weights = Vec::new();
        row_ptr.push(0);

        for terms in sentence_terms {
            let mut counts: FxHashMap<u32, u32> = FxHashMap::default();
            for term in terms {
                if let Some(id) = vocab.id(term) {
                    *counts.entry(id).or_insert(0) += 1;
                }
            }

            let mut entries: Vec<(u32, f64)> = counts
                .into_iter()
                .map(|(id, tf)| (id, tf as f64 * idf(vocab.doc_freq(id), num_docs)))
                .collect();
            entries.sort_by_key(|&(id, _)| id);

            for (id, weight) in entries {
                term_ids.push(id);
                weights.push(weight);
            }
            row_ptr.push(term_ids.len());
        }

        Self {
            row_ptr,
            term_ids,
            weights,
        }
    }

    /// Number of sentence rows.
    pub fn num_rows(&self) -> usize {
        self.row_ptr.len() - 1
    }

    /// Weight of `term` in sentence `row` (0.0 when absent).
    pub fn weight(&self, row: usize, term: u32) -> f64 {
        let start = self.row_ptr[row];
        let end = self.row_ptr[row + 1];
        match self.term_ids[start..end].binary_search(&term) {
            Ok(pos) => self.weights[start + pos],
            Err(_) => 0.0,
        }
    }

    /// Iterate over (term id, weight) entries of one row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[row];
        let end = self.row_ptr[row + 1];
        (start..end).map(move |i| (self.term_ids[i], self.weights[i]))
    }
}
