//! Word tokenization
//!
//! Tokens are maximal runs of Unicode alphanumerics (plus `_`) of at least
//! two characters, lowercased. Single-character fragments ("s" in "it's")
//! are dropped, so contractions and possessives contribute only their stem.

/// Minimum number of characters for a token to count.
const MIN_TOKEN_CHARS: usize = 2;

/// Splits text into lowercase word tokens.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    /// Tokens shorter than this (in chars) are discarded.
    min_chars: usize,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self {
            min_chars: MIN_TOKEN_CHARS,
        }
    }
}

impl WordTokenizer {
    /// Create a tokenizer with the default minimum token length.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum token length in characters.
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Tokenize `text` into lowercase word tokens, in order of occurrence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            if ch.is_alphanumeric() || ch == '_' {
                current.push(ch);
            } else {
                self.flush(&mut current, &mut tokens);
            }
        }
        self.flush(&mut current, &mut tokens);

        tokens
    }

    fn flush(&self, current: &mut String, tokens: &mut Vec<String>) {
        if current.chars().count() >= self.min_chars {
            tokens.push(current.to_lowercase());
        }
        current.clear();
    }
}
