//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::rank::RelevanceScores;
use crate::types::{Sentence, Summary};

/// Stage name: text extraction.
pub const STAGE_EXTRACT: &str = "extract";
/// Stage name: sentence splitting.
pub const STAGE_SPLIT: &str = "split";
/// Stage name: relevance scoring.
pub const STAGE_SCORE: &str = "score";
/// Stage name: top-K selection.
pub const STAGE_SELECT: &str = "select";
/// Stage name: document rendering.
pub const STAGE_RENDER: &str = "render";

// ============================================================================
// StageClock / StageReport
// ============================================================================

/// Measures wall-clock time for one stage.
#[derive(Debug)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    /// Start the clock.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time elapsed since the clock was started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Metrics reported when a stage completes.
#[derive(Debug, Clone)]
pub struct StageReport {
    duration: Duration,
    items: Option<usize>,
    bytes: Option<usize>,
}

impl StageReport {
    /// Report carrying only a duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            items: None,
            bytes: None,
        }
    }

    /// Stage wall-clock duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Item count the stage produced, when it reports one.
    pub fn items(&self) -> Option<usize> {
        self.items
    }

    /// Byte count the stage produced, when it reports one.
    pub fn bytes(&self) -> Option<usize> {
        self.bytes
    }
}

/// Builder for reports carrying stage-specific metrics.
#[derive(Debug)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    /// Start from a duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            report: StageReport::new(duration),
        }
    }

    /// Record an item count.
    pub fn items(mut self, items: usize) -> Self {
        self.report.items = Some(items);
        self
    }

    /// Record a byte count.
    pub fn bytes(mut self, bytes: usize) -> Self {
        self.report.bytes = Some(bytes);
        self
    }

    /// Finish the report.
    pub fn build(self) -> StageReport {
        self.report
    }
}

// ============================================================================
// PipelineObserver
// ============================================================================

/// Callbacks at stage boundaries.
///
/// Every method defaults to a no-op, so implementors override only what
/// they need.
pub trait PipelineObserver {
    /// Called before a stage runs.
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// Called after a stage completes, with its metrics.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Extracted raw text.
    fn on_text(&mut self, _text: &str) {}

    /// Sentence corpus after splitting.
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    /// Per-sentence relevance scores.
    fn on_scores(&mut self, _scores: &RelevanceScores) {}

    /// The selected summary.
    fn on_summary(&mut self, _summary: &Summary) {}

    /// The rendered output document.
    fn on_document(&mut self, _document: &[u8]) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records one (stage, report) pair per completed stage.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create an empty timing observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded reports, in stage order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder_carries_metrics() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .items(42)
            .bytes(1024)
            .build();

        assert_eq!(report.duration(), Duration::from_millis(3));
        assert_eq!(report.items(), Some(42));
        assert_eq!(report.bytes(), Some(1024));
    }

    #[test]
    fn test_plain_report_has_no_metrics() {
        let report = StageReport::new(Duration::ZERO);
        assert!(report.items().is_none());
        assert!(report.bytes().is_none());
    }

    #[test]
    fn test_timing_observer_accumulates() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_EXTRACT, &StageReport::new(Duration::ZERO));
        obs.on_stage_end(STAGE_SPLIT, &StageReport::new(Duration::ZERO));

        let names: Vec<_> = obs.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_EXTRACT, STAGE_SPLIT]);
    }

    #[test]
    fn test_noop_observer_accepts_all_callbacks() {
        let mut obs = NoopObserver;
        obs.on_stage_start(STAGE_SCORE);
        obs.on_text("some text");
        obs.on_stage_end(STAGE_SCORE, &StageReport::new(Duration::ZERO));
    }
}
