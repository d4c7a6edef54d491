//! Confidence scoring for a translation result.
//!
//! The score is synthetic: it starts from a fixed base and is reduced by a
//! severity-keyed penalty per detected nuance and by length brackets, then
//! clamped to the advertised range. Heavy-nuance inputs are clamp-dominated
//! at the floor.

use crate::analysis::nuance::{CulturalNuance, Severity};

/// Lowest confidence the engine ever reports.
pub const MIN_CONFIDENCE: f64 = 0.65;

/// Highest confidence the engine ever reports.
pub const MAX_CONFIDENCE: f64 = 0.98;

/// Starting score before penalties.
const BASE_CONFIDENCE: f64 = 0.9;

/// Penalty applied per detected nuance, keyed by severity.
fn severity_penalty(severity: Severity) -> f64 {
    match severity {
        Severity::High => 0.15,
        Severity::Medium => 0.08,
        Severity::Low => 0.03,
    }
}

/// Compute the confidence score for a message and its detected nuances.
///
/// Penalties accumulate additively, one per nuance instance. Very short
/// messages (< 5 words) lose 0.1, very long ones (> 50 words) lose 0.05;
/// the brackets are mutually exclusive. The result is clamped to
/// `[MIN_CONFIDENCE, MAX_CONFIDENCE]`.
pub(crate) fn score(message: &str, nuances: &[CulturalNuance]) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    for nuance in nuances {
        confidence -= severity_penalty(nuance.severity);
    }

    let word_count = message.split_whitespace().count();
    if word_count < 5 {
        confidence -= 0.1;
    }
    if word_count > 50 {
        confidence -= 0.05;
    }

    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
