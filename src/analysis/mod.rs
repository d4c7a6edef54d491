//! Message analysis engine.
//!
//! The engine is a single operation: `analyze(message, target_language)`
//! produces a `TranslationResult` combining a simulated translation, a list
//! of detected cultural-nuance issues, and a heuristic tone analysis, plus
//! a confidence score derived from the other two. Every invocation reads
//! only from static, read-only rule tables; concurrent calls share no
//! mutable state.
//!
//! # Architecture
//!
//! - `translate`: per-language dictionary substitution plus note and tip
//! - `nuance`: ordered rule table flagging culturally risky phrasing
//! - `tone`: keyword ladder deriving tone, formality, and 1-10 scores
//! - `confidence`: severity- and length-penalized score in [0.65, 0.98]
//! - `metrics`: global counters for completed/failed analyses

pub mod metrics;

mod confidence;
mod nuance;
mod tone;
mod translate;

pub use confidence::{MAX_CONFIDENCE, MIN_CONFIDENCE};
pub use nuance::{CulturalNuance, Severity};
pub use tone::{Formality, OverallTone, ToneAnalysis};

use crate::error::AnalysisError;
use metrics::AnalysisMetrics;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Full result of analyzing one message.
///
/// Constructed fresh per request and held transiently by the UI until the
/// next request overwrites it; never persisted. Serialized camelCase for
/// the web frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// Simulated translation: translated text, cultural note, and one tip,
    /// separated by blank lines
    pub translated_text: String,

    /// Confidence score in [0.65, 0.98]
    pub confidence: f64,

    /// Detected cultural-nuance issues, in rule order (possibly empty)
    pub cultural_nuances: Vec<CulturalNuance>,

    /// Tone and formality analysis
    pub tone_analysis: ToneAnalysis,
}

/// The analysis engine.
///
/// Stateless apart from the configured artificial delay, which simulates
/// network latency for the demo's perceived realism. The delay is explicit
/// and injectable so tests and the preview binary can skip it.
#[derive(Debug, Clone)]
pub struct Analyzer {
    delay: Duration,
}

impl Analyzer {
    /// Create an analyzer with the given artificial delay per call.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Create an analyzer with no artificial delay.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Analyze a message for a target language.
    ///
    /// # Arguments
    /// * `message` - The raw message text; must be non-blank (callers are
    ///   expected to validate, but the engine rejects blank input too)
    /// * `target_language` - ISO code ("ja") or lower-cased name
    ///   ("japanese"); unknown values fall back to a bracket-tagged
    ///   passthrough translation
    ///
    /// # Errors
    /// * `EmptyInput` if the message is blank after trimming
    /// * `ServiceUnavailable` if an internal step fails; there is no
    ///   partial result
    pub async fn analyze(
        &self,
        message: &str,
        target_language: &str,
    ) -> Result<TranslationResult, AnalysisError> {
        if message.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        // Single suspension point, no cancellation support; callers that
        // want a timeout must race this future themselves.
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.run(message, target_language) {
            Ok(result) => {
                AnalysisMetrics::global().record_completed();
                debug!(
                    target_language,
                    nuances = result.cultural_nuances.len(),
                    confidence = result.confidence,
                    "analysis completed"
                );
                Ok(result)
            }
            Err(err) => {
                AnalysisMetrics::global().record_failed();
                warn!(target_language, error = %err, "analysis failed");
                Err(err)
            }
        }
    }

    fn run(
        &self,
        message: &str,
        target_language: &str,
    ) -> Result<TranslationResult, AnalysisError> {
        let translated_text = translate::simulate(message, target_language)
            .map_err(AnalysisError::ServiceUnavailable)?;
        let cultural_nuances = nuance::detect(message);
        let tone_analysis = tone::analyze(message);
        let confidence = confidence::score(message, &cultural_nuances);

        Ok(TranslationResult {
            translated_text,
            confidence,
            cultural_nuances,
            tone_analysis,
        })
    }
}
