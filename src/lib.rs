//! Topic-guided PDF summarization.
//!
//! `docsift` extracts the text of a PDF, splits it into sentences, ranks
//! each sentence against a user-supplied topic with corpus-local TF-IDF
//! weights, and re-renders the best sentences as a new PDF.
//!
//! The pipeline is strictly linear — extract → split → score → select →
//! render — and request-scoped: every call builds its own vocabulary and
//! weight table, and no state survives the call.
//!
//! # Quick start
//!
//! ```no_run
//! use docsift::Summarizer;
//!
//! # fn main() -> docsift::Result<()> {
//! let document = std::fs::read("report.pdf").expect("read input");
//! let output = Summarizer::new()
//!     .with_sentence_count(5)
//!     .summarize(&document, "supply chains")?;
//! std::fs::write("supply_chains_summary.pdf", &output.document).expect("write output");
//! # Ok(())
//! # }
//! ```
//!
//! Individual stages can be swapped through
//! [`PipelineBuilder`](pipeline::runner::PipelineBuilder); the
//! [`Feature`] launcher routes requests to the summarizer or to the
//! (unimplemented) handwriting converter.

pub mod document;
pub mod error;
pub mod feature;
pub mod nlp;
pub mod pipeline;
pub mod rank;
pub mod summarizer;
pub mod types;

// Re-export the error type and alias.
pub use error::{Error, Result};

// Re-export core data types.
pub use types::{RenderedSummary, ScoredSentence, Sentence, SummarizeConfig, Summary};

// Re-export the facade and launcher.
pub use feature::{Feature, FeatureRequest};
pub use summarizer::{default_output_name, Summarizer};

// Re-export document adapters.
pub use document::{PageLayout, PdfSummaryRenderer, PdfTextExtractor};

// Re-export NLP components.
pub use nlp::sentence::UnicodeSentenceSplitter;
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::WordTokenizer;

// Re-export ranking components.
pub use rank::{RelevanceScores, TermWeightTable, TfidfScorer, Vocabulary};

// Re-export pipeline types.
pub use pipeline::{
    NoopObserver, Pipeline, PipelineBuilder, PipelineObserver, RelevanceScorer, SentenceSplitter,
    StageReport, StageTimingObserver, SummaryRenderer, SummarySelector, TextExtractor,
    TopKSelector, TopicSummaryPipeline,
};
