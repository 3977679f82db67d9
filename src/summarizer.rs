//! High-level summarization facade
//!
//! Wraps the pipeline behind a byte-in/byte-out API. One call processes one
//! document to completion; every request builds its own vocabulary and
//! weight table, so there is no shared state across invocations.

use std::path::Path;

use crate::error::{Error, Result};
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::observer::NoopObserver;
use crate::pipeline::runner::{PipelineBuilder, TopicSummaryPipeline};
use crate::rank::TfidfScorer;
use crate::types::{RenderedSummary, SummarizeConfig, Summary};

/// Topic-guided PDF summarizer.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizeConfig,
}

impl Summarizer {
    /// Create a summarizer with default settings (8 sentences, English,
    /// "Summary" title).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a summarizer from a full config.
    pub fn with_config(config: SummarizeConfig) -> Self {
        Self { config }
    }

    /// Set the maximum number of sentences to select.
    pub fn with_sentence_count(mut self, count: usize) -> Self {
        self.config.sentence_count = count;
        self
    }

    /// Set the stop-word language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Set the title line of the rendered document.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Summarize PDF bytes into a rendered summary PDF.
    pub fn summarize(&self, document: &[u8], topic: &str) -> Result<RenderedSummary> {
        let pipeline = self.pipeline()?;
        let output = pipeline.run(document, topic, &self.config, &mut NoopObserver)?;
        tracing::info!(topic, selected = output.summary.len(), "summary rendered");
        Ok(output)
    }

    /// Summarize the PDF at `input` and write the rendered document to
    /// `output`.
    pub fn summarize_file(&self, input: &Path, topic: &str, output: &Path) -> Result<Summary> {
        let document = std::fs::read(input)
            .map_err(|e| Error::Extraction(format!("cannot read {}: {e}", input.display())))?;
        let rendered = self.summarize(&document, topic)?;
        std::fs::write(output, &rendered.document)
            .map_err(|e| Error::Render(format!("cannot write {}: {e}", output.display())))?;
        Ok(rendered.summary)
    }

    fn pipeline(&self) -> Result<TopicSummaryPipeline> {
        let stopwords = StopwordFilter::for_language(&self.config.language).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "unknown language code '{}'",
                self.config.language
            ))
        })?;
        Ok(PipelineBuilder::new()
            .scorer(TfidfScorer::new().with_stopwords(stopwords))
            .build())
    }
}

/// Default output file name for a topic: the topic sanitized into a safe
/// file stem, suffixed with `_summary.pdf`.
pub fn default_output_name(topic: &str) -> String {
    let mut stem = String::new();
    let mut gap = true;
    for c in topic.chars() {
        if c.is_alphanumeric() {
            stem.push(c);
            gap = false;
        } else if !gap {
            stem.push('_');
            gap = true;
        }
    }
    let stem = stem.trim_end_matches('_');
    if stem.is_empty() {
        "summary.pdf".to_string()
    } else {
        format!("{stem}_summary.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_is_invalid_parameter() {
        let err = Summarizer::new()
            .with_language("tlh")
            .summarize(b"%PDF-", "mat")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_unparseable_document_is_extraction_error() {
        let err = Summarizer::new().summarize(b"not a pdf", "mat").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[test]
    fn test_missing_input_file_is_extraction_error() {
        let err = Summarizer::new()
            .summarize_file(
                Path::new("/nonexistent/input.pdf"),
                "mat",
                Path::new("/tmp/out.pdf"),
            )
            .unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[test]
    fn test_default_output_name() {
        assert_eq!(default_output_name("mat"), "mat_summary.pdf");
        assert_eq!(
            default_output_name("climate change"),
            "climate_change_summary.pdf"
        );
        assert_eq!(default_output_name("a/b: c"), "a_b_c_summary.pdf");
        assert_eq!(default_output_name("??"), "summary.pdf");
        assert_eq!(default_output_name(""), "summary.pdf");
    }
}
