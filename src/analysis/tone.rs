//! Tone and formality analysis.
//!
//! A linear ladder of keyword rules derives the overall tone, formality,
//! and 1-10 politeness/urgency scores. Rule order is a contract: later
//! rules overwrite `overall` (last-write-wins), so reordering them changes
//! output. All checks run on the lower-cased message.

use serde::Serialize;
use std::fmt;

/// Overall tone of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallTone {
    Neutral,
    Urgent,
    Polite,
    Apologetic,
    Demanding,
}

impl fmt::Display for OverallTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OverallTone::Neutral => "neutral",
            OverallTone::Urgent => "urgent",
            OverallTone::Polite => "polite",
            OverallTone::Apologetic => "apologetic",
            OverallTone::Demanding => "demanding",
        };
        f.write_str(label)
    }
}

/// Formality register of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Neutral,
    Casual,
    Formal,
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Formality::Neutral => "neutral",
            Formality::Casual => "casual",
            Formality::Formal => "formal",
        };
        f.write_str(label)
    }
}

/// Result of the tone ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToneAnalysis {
    /// Dominant tone; the last firing ladder rule wins
    pub overall: OverallTone,

    /// Formality register
    pub formality: Formality,

    /// Politeness score, 1-10 (5 = neutral)
    pub politeness: u8,

    /// Urgency score, 1-10 (5 = neutral)
    pub urgency: u8,

    /// Improvement suggestions, in ladder order
    pub suggestions: Vec<&'static str>,
}

/// Run the tone ladder over a message.
///
/// The rule sequence below must stay in this exact order to reproduce the
/// documented last-write-wins behavior on `overall`.
pub(crate) fn analyze(message: &str) -> ToneAnalysis {
    let lower = message.to_lowercase();

    let mut overall = OverallTone::Neutral;
    let mut formality = Formality::Neutral;
    let mut politeness: u8 = 5;
    let mut urgency: u8 = 5;
    let mut suggestions: Vec<&'static str> = Vec::new();

    // 1. Urgency
    if lower.contains("urgent") || lower.contains("asap") || lower.contains("immediately") {
        urgency = 9;
        overall = OverallTone::Urgent;
        suggestions.push("Consider softening urgent language to avoid appearing demanding");
    }

    // 2. Politeness
    if lower.contains("please") && lower.contains("thank") {
        politeness = 8;
        overall = OverallTone::Polite;
    } else if lower.contains("please") {
        politeness = 7;
    } else if lower.contains("send") || lower.contains("give me") {
        politeness = 3;
        suggestions.push("Adding \"please\" would make the message more polite");
    }

    // 3. Formality
    if lower.contains("hey") || lower.contains("btw") || lower.contains("fyi") {
        formality = Formality::Casual;
        suggestions.push("Consider using more formal language for professional communication");
    } else if lower.contains("dear") || lower.contains("respectfully") {
        formality = Formality::Formal;
    }

    // 4. Apologies
    if lower.contains("sorry") || lower.contains("apolog") {
        overall = OverallTone::Apologetic;
        suggestions.push("Consider if an apology is necessary in this context");
    }

    // 5. Demands
    if lower.contains("need you to") || lower.contains("you must") {
        overall = OverallTone::Demanding;
        suggestions.push(
            "Consider using more collaborative language like \"could you\" or \"would you be able to\"",
        );
    }

    if suggestions.is_empty() {
        suggestions.push("Tone appears appropriate for professional communication");
    }

    ToneAnalysis {
        overall,
        formality,
        politeness,
        urgency,
        suggestions,
    }
}
