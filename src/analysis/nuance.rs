//! Cultural nuance detection.
//!
//! A fixed, ordered list of rules is evaluated against the lower-cased
//! message. Each rule pairs a substring predicate with a static
//! `CulturalNuance` record explaining the issue and suggesting a
//! replacement. Rules fire at most once; matches are collected in rule
//! declaration order.

use serde::Serialize;

/// How risky a flagged phrase is for cross-cultural communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A flagged phrase with its explanation and suggested replacement.
///
/// Records are drawn verbatim from the static rule table and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CulturalNuance {
    /// Label for the flagged phrase (e.g., "ASAP / as soon as possible")
    pub phrase: &'static str,

    /// Why the phrase is risky across cultures
    pub issue: &'static str,

    /// Suggested replacement phrasing
    pub suggestion: &'static str,

    /// Severity of the issue
    pub severity: Severity,
}

/// Substring predicate for a nuance rule.
#[derive(Debug)]
enum Predicate {
    /// Fires if the text contains any of the listed substrings
    AnyOf(&'static [&'static str]),

    /// Fires if the text contains `required` and at least one of `any`
    WithAnyOf {
        required: &'static str,
        any: &'static [&'static str],
    },
}

impl Predicate {
    fn matches(&self, lower_text: &str) -> bool {
        match self {
            Predicate::AnyOf(needles) => needles.iter().any(|n| lower_text.contains(n)),
            Predicate::WithAnyOf { required, any } => {
                lower_text.contains(required) && any.iter().any(|n| lower_text.contains(n))
            }
        }
    }
}

/// A detection rule: predicate plus the record it produces when it fires.
struct NuanceRule {
    predicate: Predicate,
    nuance: CulturalNuance,
}

/// The detection rules, in evaluation (and output) order.
static RULES: &[NuanceRule] = &[
    NuanceRule {
        predicate: Predicate::AnyOf(&["asap", "as soon as possible"]),
        nuance: CulturalNuance {
            phrase: "ASAP / as soon as possible",
            issue: "Can sound demanding or create unnecessary pressure in many cultures",
            suggestion: "Could you complete this by [specific date/time]?",
            severity: Severity::High,
        },
    },
    NuanceRule {
        predicate: Predicate::WithAnyOf {
            required: "just",
            any: &["wondering", "checking"],
        },
        nuance: CulturalNuance {
            phrase: "Just wondering/checking",
            issue: "Can make you sound uncertain or apologetic in some cultures",
            suggestion: "I would like to know about...",
            severity: Severity::Medium,
        },
    },
    NuanceRule {
        predicate: Predicate::AnyOf(&["let me know"]),
        nuance: CulturalNuance {
            phrase: "Let me know",
            issue: "Can be seen as vague or placing burden on the recipient",
            suggestion: "Please share your thoughts on this by [date]",
            severity: Severity::Medium,
        },
    },
    NuanceRule {
        predicate: Predicate::AnyOf(&["hop on a call", "jump on a call"]),
        nuance: CulturalNuance {
            phrase: "Hop on a call",
            issue: "Casual idiom that may be confusing for non-native speakers",
            suggestion: "Would you be available for a phone/video meeting?",
            severity: Severity::Medium,
        },
    },
    NuanceRule {
        predicate: Predicate::AnyOf(&["eod", "end of day"]),
        nuance: CulturalNuance {
            phrase: "EOD / end of day",
            issue: "Ambiguous due to different time zones and work schedules",
            suggestion: "by [specific time] [timezone]",
            severity: Severity::High,
        },
    },
    NuanceRule {
        predicate: Predicate::AnyOf(&["touch base"]),
        nuance: CulturalNuance {
            phrase: "Touch base",
            issue: "American business idiom that may not translate well",
            suggestion: "Let's discuss this further or I'd like to follow up on this",
            severity: Severity::Medium,
        },
    },
    NuanceRule {
        predicate: Predicate::AnyOf(&["circle back"]),
        nuance: CulturalNuance {
            phrase: "Circle back",
            issue: "Business jargon that may confuse international colleagues",
            suggestion: "I'll follow up with you later or Let's revisit this",
            severity: Severity::Medium,
        },
    },
];

/// Evaluate every rule against the message and collect the records of the
/// rules that fire, in declaration order. A rule fires at most once no
/// matter how often its substrings appear. Zero matches yield an empty list.
pub(crate) fn detect(message: &str) -> Vec<CulturalNuance> {
    let lower = message.to_lowercase();
    RULES
        .iter()
        .filter(|rule| rule.predicate.matches(&lower))
        .map(|rule| rule.nuance)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Single Rule Tests ====================

    #[test]
    fn test_detects_asap() {
        let nuances = detect("I need this ASAP");
        assert_eq!(nuances.len(), 1);
        assert_eq!(nuances[0].phrase, "ASAP / as soon as possible");
        assert_eq!(nuances[0].severity, Severity::High);
    }

    #[test]
    fn test_detects_as_soon_as_possible_spelled_out() {
        let nuances = detect("Send it as soon as possible");
        assert_eq!(nuances.len(), 1);
        assert_eq!(nuances[0].phrase, "ASAP / as soon as possible");
    }

    #[test]
    fn test_detects_just_wondering() {
        let nuances = detect("Just wondering about the report");
        assert_eq!(nuances.len(), 1);
        assert_eq!(nuances[0].phrase, "Just wondering/checking");
        assert_eq!(nuances[0].severity, Severity::Medium);
    }

    #[test]
    fn test_detects_just_checking() {
        let nuances = detect("just checking in on the status");
        assert_eq!(nuances.len(), 1);
        assert_eq!(nuances[0].phrase, "Just wondering/checking");
    }

    #[test]
    fn test_just_alone_does_not_fire() {
        // "just" needs "wondering" or "checking" alongside it
        let nuances = detect("I just finished the draft");
        assert!(nuances.is_empty());
    }

    #[test]
    fn test_wondering_alone_does_not_fire() {
        let nuances = detect("I was wondering about the budget");
        assert!(nuances.is_empty());
    }

    #[test]
    fn test_detects_let_me_know() {
        let nuances = detect("Let me know what you think");
        assert_eq!(nuances.len(), 1);
        assert_eq!(nuances[0].phrase, "Let me know");
    }

    #[test]
    fn test_detects_hop_on_a_call() {
        let nuances = detect("Can we hop on a call tomorrow?");
        assert_eq!(nuances.len(), 1);
        assert_eq!(nuances[0].phrase, "Hop on a call");
    }

    #[test]
    fn test_detects_jump_on_a_call() {
        let nuances = detect("Let's jump on a call");
        assert_eq!(nuances.len(), 1);
        assert_eq!(nuances[0].phrase, "Hop on a call");
    }

    #[test]
    fn test_detects_eod() {
        let nuances = detect("Please send the file by EOD");
        assert_eq!(nuances.len(), 1);
        assert_eq!(nuances[0].phrase, "EOD / end of day");
        assert_eq!(nuances[0].severity, Severity::High);
    }

    #[test]
    fn test_detects_end_of_day_spelled_out() {
        let nuances = detect("I'll have it done by end of day");
        assert_eq!(nuances.len(), 1);
        assert_eq!(nuances[0].phrase, "EOD / end of day");
    }

    #[test]
    fn test_detects_touch_base() {
        let nuances = detect("Let's touch base next week");
        assert_eq!(nuances.len(), 1);
        assert_eq!(nuances[0].phrase, "Touch base");
    }

    #[test]
    fn test_detects_circle_back() {
        let nuances = detect("I'll circle back on this");
        assert_eq!(nuances.len(), 1);
        assert_eq!(nuances[0].phrase, "Circle back");
    }

    // ==================== Multi-Rule Tests ====================

    #[test]
    fn test_multiple_rules_fire_in_declaration_order() {
        let nuances = detect("Circle back ASAP and touch base by EOD");
        let phrases: Vec<_> = nuances.iter().map(|n| n.phrase).collect();
        assert_eq!(
            phrases,
            vec![
                "ASAP / as soon as possible",
                "EOD / end of day",
                "Touch base",
                "Circle back",
            ]
        );
    }

    #[test]
    fn test_rule_fires_at_most_once() {
        let nuances = detect("ASAP! I said ASAP, as soon as possible!");
        assert_eq!(nuances.len(), 1);
    }

    // ==================== Edge Cases ====================

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(detect("AsAp"), detect("asap"));
        assert_eq!(detect("TOUCH BASE"), detect("touch base"));
    }

    #[test]
    fn test_clean_message_yields_empty_list() {
        let nuances = detect("The weather is nice today.");
        assert!(nuances.is_empty());
    }

    #[test]
    fn test_detection_is_idempotent() {
        let message = "Hey, just wondering if we could touch base by EOD?";
        let first = detect(message);
        let second = detect(message);
        assert_eq!(first, second);
    }
}
