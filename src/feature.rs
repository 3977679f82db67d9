//! Feature launcher
//!
//! The two-choice shell dispatches to a feature variant through a common
//! `run` capability. A variant with no backend in the build returns a typed
//! [`Error::FeatureUnavailable`] instead of failing at load time.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::summarizer::Summarizer;
use crate::types::{RenderedSummary, SummarizeConfig};

/// Stable name of the summarizer feature.
pub const FEATURE_SUMMARIZER: &str = "pdf-summarizer";
/// Stable name of the handwriting feature.
pub const FEATURE_HANDWRITING: &str = "handwriting-conversion";

/// One request routed through the launcher.
#[derive(Debug, Clone)]
pub struct FeatureRequest<'a> {
    /// Raw input document bytes.
    pub document: &'a [u8],
    /// Topic query (ignored by features that do not rank).
    pub topic: &'a str,
    /// Request configuration.
    pub config: SummarizeConfig,
}

/// The features offered by the launcher shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Topic-guided PDF summarization.
    Summarizer,
    /// Handwriting-to-text conversion (no backend in this build).
    HandwritingConverter,
}

impl Feature {
    /// Stable feature name, used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Summarizer => FEATURE_SUMMARIZER,
            Feature::HandwritingConverter => FEATURE_HANDWRITING,
        }
    }

    /// Run the feature against one request.
    pub fn run(&self, request: FeatureRequest<'_>) -> Result<RenderedSummary> {
        match self {
            Feature::Summarizer => {
                Summarizer::with_config(request.config).summarize(request.document, request.topic)
            }
            Feature::HandwritingConverter => Err(Error::FeatureUnavailable(FEATURE_HANDWRITING)),
        }
    }
}

impl FromStr for Feature {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "summarizer" | "summary" | "pdf-summarizer" => Ok(Feature::Summarizer),
            "handwriting" | "handwriting-conversion" | "handwriting-converter" => {
                Ok(Feature::HandwritingConverter)
            }
            other => Err(Error::InvalidParameter(format!("unknown feature '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feature_names() {
        assert_eq!("summarizer".parse::<Feature>().unwrap(), Feature::Summarizer);
        assert_eq!(
            "Handwriting".parse::<Feature>().unwrap(),
            Feature::HandwritingConverter
        );
        assert!(matches!(
            "telepathy".parse::<Feature>().unwrap_err(),
            Error::InvalidParameter(_)
        ));
    }

    #[test]
    fn test_feature_names_are_stable() {
        assert_eq!(Feature::Summarizer.name(), "pdf-summarizer");
        assert_eq!(Feature::HandwritingConverter.name(), "handwriting-conversion");
    }

    #[test]
    fn test_handwriting_is_unavailable() {
        let request = FeatureRequest {
            document: b"scanned page",
            topic: "",
            config: SummarizeConfig::default(),
        };
        let err = Feature::HandwritingConverter.run(request).unwrap_err();
        assert!(matches!(err, Error::FeatureUnavailable(_)));
        assert_eq!(err.kind(), "feature_unavailable");
    }

    #[test]
    fn test_summarizer_dispatch_propagates_stage_errors() {
        let request = FeatureRequest {
            document: b"not a pdf",
            topic: "mat",
            config: SummarizeConfig::default(),
        };
        let err = Feature::Summarizer.run(request).unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }
}
