//! Error types for the summarization pipeline.
//!
//! Every stage failure maps into one of these kinds; the orchestrator
//! propagates the first failure and never returns partial output.

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure kinds surfaced by the pipeline and the feature shell.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input document could not be read or parsed into text.
    #[error("failed to extract text: {0}")]
    Extraction(String),

    /// The output document could not be produced or written.
    #[error("failed to render summary: {0}")]
    Render(String),

    /// A caller-supplied parameter is unusable (unknown language code,
    /// degenerate page layout).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The requested feature has no backend in this build.
    #[error("feature '{0}' is not available in this build")]
    FeatureUnavailable(&'static str),
}

impl Error {
    /// Short, stable name for the failure kind (for logs and CLI output).
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Extraction(_) => "extraction",
            Error::Render(_) => "render",
            Error::InvalidParameter(_) => "invalid_parameter",
            Error::FeatureUnavailable(_) => "feature_unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_message() {
        let err = Error::Extraction("broken xref table".into());
        assert_eq!(
            err.to_string(),
            "failed to extract text: broken xref table"
        );
    }

    #[test]
    fn test_kind_names_are_stable() {
        assert_eq!(Error::Extraction(String::new()).kind(), "extraction");
        assert_eq!(Error::Render(String::new()).kind(), "render");
        assert_eq!(
            Error::InvalidParameter(String::new()).kind(),
            "invalid_parameter"
        );
        assert_eq!(
            Error::FeatureUnavailable("handwriting-conversion").kind(),
            "feature_unavailable"
        );
    }
}
