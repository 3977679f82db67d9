//! PDF text extraction
//!
//! Thin adapter over `pdf-extract`: all page texts come back concatenated
//! in document order with no page-boundary markers. A document that parses
//! but contains no text yields an empty string, not an error.

use crate::error::{Error, Result};
use crate::pipeline::traits::TextExtractor;

/// Extracts plain text from PDF bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create an extractor.
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, document: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(document).map_err(|e| Error::Extraction(e.to_string()))
    }
}
