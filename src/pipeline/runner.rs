//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of pipeline
//! stages. Calling [`Pipeline::run`] executes them in order (extract →
//! split → score → select → render), threading artifacts between stages and
//! notifying a [`PipelineObserver`] at each boundary. The first stage
//! failure aborts the run; no partial output is ever returned.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over all stage types, so the compiler
//! monomorphizes each combination into a unique concrete type. Zero-sized
//! default stages (e.g., [`TopKSelector`]) add zero bytes and zero runtime
//! cost.

use crate::document::extract::PdfTextExtractor;
use crate::document::render::PdfSummaryRenderer;
use crate::error::Result;
use crate::nlp::sentence::UnicodeSentenceSplitter;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReportBuilder, STAGE_EXTRACT, STAGE_RENDER, STAGE_SCORE,
    STAGE_SELECT, STAGE_SPLIT,
};
use crate::pipeline::traits::{
    RelevanceScorer, SentenceSplitter, SummaryRenderer, SummarySelector, TextExtractor,
    TopKSelector,
};
use crate::rank::TfidfScorer;
use crate::types::{RenderedSummary, SummarizeConfig, Summary};

/// Entered tracing span guard for one pipeline stage. Each stage holds its
/// guard inside its own block, so the span closes when the stage ends.
macro_rules! trace_stage {
    ($name:expr) => {
        tracing::debug_span!("pipeline_stage", stage = $name).entered()
    };
}

// ============================================================================
// Pipeline — statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// All type parameters have trait bounds enforced at the `impl` level, so
/// the struct itself is unconditionally constructible (useful for builders).
///
/// # Type parameters
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Ext` | [`TextExtractor`] | [`PdfTextExtractor`] |
/// | `Spl` | [`SentenceSplitter`] | [`UnicodeSentenceSplitter`] |
/// | `Scr` | [`RelevanceScorer`] | [`TfidfScorer`] |
/// | `Sel` | [`SummarySelector`] | [`TopKSelector`] |
/// | `Rnd` | [`SummaryRenderer`] | [`PdfSummaryRenderer`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Ext, Spl, Scr, Sel, Rnd> {
    pub extractor: Ext,
    pub splitter: Spl,
    pub scorer: Scr,
    pub selector: Sel,
    pub renderer: Rnd,
}

/// Type alias for the default PDF-to-PDF pipeline.
pub type TopicSummaryPipeline = Pipeline<
    PdfTextExtractor,
    UnicodeSentenceSplitter,
    TfidfScorer,
    TopKSelector,
    PdfSummaryRenderer,
>;

impl TopicSummaryPipeline {
    /// Build the default topic-summary pipeline:
    /// - PDF text extraction
    /// - UAX #29 sentence splitting
    /// - TF-IDF relevance scoring with English stop words
    /// - Stable top-K selection
    /// - Paginated PDF rendering
    pub fn topic_summary() -> Self {
        Pipeline {
            extractor: PdfTextExtractor::new(),
            splitter: UnicodeSentenceSplitter::new(),
            scorer: TfidfScorer::new(),
            selector: TopKSelector,
            renderer: PdfSummaryRenderer::new(),
        }
    }
}

// ============================================================================
// Pipeline::run — execute stages in order
// ============================================================================

impl<Ext, Spl, Scr, Sel, Rnd> Pipeline<Ext, Spl, Scr, Sel, Rnd>
where
    Ext: TextExtractor,
    Spl: SentenceSplitter,
    Scr: RelevanceScorer,
    Sel: SummarySelector,
    Rnd: SummaryRenderer,
{
    /// Execute the pipeline, producing the selected summary and the
    /// rendered output document.
    ///
    /// `cfg.sentence_count` bounds the selection; the `observer` receives
    /// callbacks at each stage boundary (pass [`NoopObserver`] for
    /// zero-overhead execution).
    ///
    /// [`NoopObserver`]: crate::pipeline::observer::NoopObserver
    pub fn run(
        &self,
        document: &[u8],
        topic: &str,
        cfg: &SummarizeConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<RenderedSummary> {
        // Stage 1: extract
        let text = {
            let _span = trace_stage!(STAGE_EXTRACT);
            observer.on_stage_start(STAGE_EXTRACT);
            let clock = StageClock::start();
            let text = self.extractor.extract(document)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .bytes(text.len())
                .build();
            observer.on_stage_end(STAGE_EXTRACT, &report);
            observer.on_text(&text);
            text
        };

        // Stage 2: split
        let sentences = {
            let _span = trace_stage!(STAGE_SPLIT);
            observer.on_stage_start(STAGE_SPLIT);
            let clock = StageClock::start();
            let sentences = self.splitter.split(&text);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(sentences.len())
                .build();
            observer.on_stage_end(STAGE_SPLIT, &report);
            observer.on_sentences(&sentences);
            sentences
        };

        // Stage 3: score
        let scores = {
            let _span = trace_stage!(STAGE_SCORE);
            observer.on_stage_start(STAGE_SCORE);
            let clock = StageClock::start();
            let scores = self.scorer.score(&sentences, topic);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(scores.topic_term_count)
                .build();
            observer.on_stage_end(STAGE_SCORE, &report);
            observer.on_scores(&scores);
            scores
        };

        // Stage 4: select
        let summary = {
            let _span = trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let selected = self.selector.select(&sentences, &scores, cfg.sentence_count);
            let summary = Summary::new(topic, selected);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(summary.len())
                .build();
            observer.on_stage_end(STAGE_SELECT, &report);
            observer.on_summary(&summary);
            summary
        };

        // Stage 5: render
        let bytes = {
            let _span = trace_stage!(STAGE_RENDER);
            observer.on_stage_start(STAGE_RENDER);
            let clock = StageClock::start();
            let bytes = self.renderer.render(&summary, cfg)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .bytes(bytes.len())
                .build();
            observer.on_stage_end(STAGE_RENDER, &report);
            observer.on_document(&bytes);
            bytes
        };

        Ok(RenderedSummary {
            summary,
            document: bytes,
        })
    }
}

// ============================================================================
// PipelineBuilder — fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// Starts from the default topic-summary configuration and allows
/// overriding individual stages.
///
/// ```
/// # use docsift::pipeline::runner::PipelineBuilder;
/// # use docsift::rank::TfidfScorer;
/// # use docsift::nlp::stopwords::StopwordFilter;
/// let pipeline = PipelineBuilder::new()
///     .scorer(TfidfScorer::new().with_stopwords(StopwordFilter::none()))
///     .build();
/// ```
pub struct PipelineBuilder<
    Ext = PdfTextExtractor,
    Spl = UnicodeSentenceSplitter,
    Scr = TfidfScorer,
    Sel = TopKSelector,
    Rnd = PdfSummaryRenderer,
> {
    extractor: Ext,
    splitter: Spl,
    scorer: Scr,
    selector: Sel,
    renderer: Rnd,
}

impl PipelineBuilder {
    /// Start building from the default stages.
    pub fn new() -> Self {
        PipelineBuilder {
            extractor: PdfTextExtractor::new(),
            splitter: UnicodeSentenceSplitter::new(),
            scorer: TfidfScorer::new(),
            selector: TopKSelector,
            renderer: PdfSummaryRenderer::new(),
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ext, Spl, Scr, Sel, Rnd> PipelineBuilder<Ext, Spl, Scr, Sel, Rnd> {
    /// Override the text extraction stage.
    pub fn extractor<E: TextExtractor>(self, e: E) -> PipelineBuilder<E, Spl, Scr, Sel, Rnd> {
        PipelineBuilder {
            extractor: e,
            splitter: self.splitter,
            scorer: self.scorer,
            selector: self.selector,
            renderer: self.renderer,
        }
    }

    /// Override the sentence splitting stage.
    pub fn splitter<S: SentenceSplitter>(self, s: S) -> PipelineBuilder<Ext, S, Scr, Sel, Rnd> {
        PipelineBuilder {
            extractor: self.extractor,
            splitter: s,
            scorer: self.scorer,
            selector: self.selector,
            renderer: self.renderer,
        }
    }

    /// Override the relevance scoring stage.
    pub fn scorer<S: RelevanceScorer>(self, s: S) -> PipelineBuilder<Ext, Spl, S, Sel, Rnd> {
        PipelineBuilder {
            extractor: self.extractor,
            splitter: self.splitter,
            scorer: s,
            selector: self.selector,
            renderer: self.renderer,
        }
    }

    /// Override the selection stage.
    pub fn selector<S: SummarySelector>(self, s: S) -> PipelineBuilder<Ext, Spl, Scr, S, Rnd> {
        PipelineBuilder {
            extractor: self.extractor,
            splitter: self.splitter,
            scorer: self.scorer,
            selector: s,
            renderer: self.renderer,
        }
    }

    /// Override the rendering stage.
    pub fn renderer<R: SummaryRenderer>(self, r: R) -> PipelineBuilder<Ext, Spl, Scr, Sel, R> {
        PipelineBuilder {
            extractor: self.extractor,
            splitter: self.splitter,
            scorer: self.scorer,
            selector: self.selector,
            renderer: r,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<Ext, Spl, Scr, Sel, Rnd> {
        Pipeline {
            extractor: self.extractor,
            splitter: self.splitter,
            scorer: self.scorer,
            selector: self.selector,
            renderer: self.renderer,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
