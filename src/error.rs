//! Error taxonomy for the analysis pipeline.
//!
//! Three failure modes are surfaced to the user, none of them retried
//! automatically:
//!
//! - `EmptyInput`: the message was blank after trimming (caller-side check)
//! - `LimitExceeded`: the daily free-tier cap was reached before the engine
//!   was invoked
//! - `ServiceUnavailable`: an internal engine step failed; there is no
//!   partial-result recovery, the caller gets no result at all

use thiserror::Error;

/// Errors produced by the analysis pipeline and its callers.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The message was empty (or whitespace only) after trimming.
    #[error("message must not be empty")]
    EmptyInput,

    /// The daily free-tier analysis limit was reached.
    #[error("daily limit of {limit} analyses reached")]
    LimitExceeded {
        /// The configured daily cap (50 for free users).
        limit: u32,
    },

    /// An internal engine step failed. Callers must treat this as
    /// "no result", not a degraded result.
    #[error("analysis service unavailable")]
    ServiceUnavailable(#[source] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_display() {
        let err = AnalysisError::EmptyInput;
        assert_eq!(err.to_string(), "message must not be empty");
    }

    #[test]
    fn test_limit_exceeded_display_includes_limit() {
        let err = AnalysisError::LimitExceeded { limit: 50 };
        assert!(err.to_string().contains("50"));
    }

    #[test]
    fn test_service_unavailable_preserves_source() {
        let err = AnalysisError::ServiceUnavailable(anyhow::anyhow!("pattern failed"));
        assert_eq!(err.to_string(), "analysis service unavailable");
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
        assert!(source.unwrap().to_string().contains("pattern failed"));
    }
}
