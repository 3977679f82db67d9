//! Corpus vocabulary
//!
//! Interns content terms into dense ids and tracks per-term document
//! frequency, where each sentence counts as one document. Ids are assigned
//! in first-seen order, so the same corpus always produces the same table.

use rustc_hash::{FxHashMap, FxHashSet};

/// Vocabulary of one sentence corpus, fixed for the duration of a request.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Maps term -> dense id.
    term_to_id: FxHashMap<String, u32>,
    /// Term storage, indexed by id.
    terms: Vec<String>,
    /// Number of sentences containing each term at least once.
    doc_freq: Vec<u32>,
}

impl Vocabulary {
    /// Build from per-sentence content terms (already tokenized and
    /// stop-word filtered).
    pub fn build(sentence_terms: &[Vec<String>]) -> Self {
        let mut vocab = Self::default();

        for terms in sentence_terms {
            let mut seen = FxHashSet::default();
            for term in terms {
                let id = vocab.get_or_intern(term);
                if seen.insert(id) {
                    vocab.doc_freq[id as usize] += 1;
                }
            }
        }

        vocab
    }

    fn get_or_intern(&mut self, term: &str) -> u32 {
        if let Some(&id) = self.term_to_id.get(term) {
            return id;
        }

        let id = self.terms.len() as u32;
        self.term_to_id.insert(term.to_string(), id);
        self.terms.push(term.to_string());
        self.doc_freq.push(0);
        id
    }

    /// Id for a term, if it occurs in the corpus.
    pub fn id(&self, term: &str) -> Option<u32> {
        self.term_to_id.get(term).copied()
    }

    /// Term text for an id.
    pub fn term(&self, id: u32) -> &str {
        &self.terms[id as usize]
    }

    /// Number of sentences containing the term.
    pub fn doc_freq(&self, id: u32) -> u32 {
        self.doc_freq[id as usize]
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
