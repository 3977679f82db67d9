//! Natural Language Processing components
//!
//! This module provides word tokenization, sentence-boundary detection,
//! and stopword filtering.

pub mod sentence;
pub mod stopwords;
pub mod tokenizer;
