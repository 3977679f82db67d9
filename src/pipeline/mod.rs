//! Pipeline orchestration.
//!
//! ## Submodules
//!
//! - [`traits`] — stage trait definitions and the default selector
//! - [`runner`] — pipeline composition and execution
//! - [`observer`] — logging, profiling, and debug hooks

pub mod observer;
pub mod runner;
pub mod traits;

// Re-export observer types.
pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    StageTimingObserver, STAGE_EXTRACT, STAGE_RENDER, STAGE_SCORE, STAGE_SELECT, STAGE_SPLIT,
};

// Re-export runner types (Pipeline, builder, type alias).
pub use runner::{Pipeline, PipelineBuilder, TopicSummaryPipeline};

// Re-export stage traits and the default selection stage.
pub use traits::{
    RelevanceScorer, SentenceSplitter, SummaryRenderer, SummarySelector, TextExtractor,
    TopKSelector,
};
