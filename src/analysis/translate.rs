//! Pseudo-translation of workplace messages.
//!
//! This is a demo simulation, not machine translation: sentences are
//! lower-cased and a fixed set of English words and phrases is replaced
//! with their equivalents from the target language's dictionary, then a
//! cultural politeness note and one contextual tip are appended.

use crate::i18n::{Language, LanguageConfig};
use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Produce the simulated translation text for a message.
///
/// Unknown target languages fall back to a bracket-tagged passthrough
/// (`"[xx] original text"`) instead of erroring. The canonical language
/// gets the identity translation, still annotated with a note and tip.
///
/// # Errors
/// Fails only if a substitution pattern cannot be compiled, which the
/// engine surfaces as `ServiceUnavailable`.
pub(crate) fn simulate(message: &str, target_language: &str) -> Result<String> {
    let Ok(language) = Language::from_code(target_language) else {
        return Ok(format!("[{}] {}", target_language, message));
    };

    let config = language.config();
    let translated = if language.is_canonical() {
        message.to_string()
    } else {
        substitute(message, config)?
    };

    Ok(annotate(&translated, config))
}

/// Apply the per-language dictionary sentence by sentence.
///
/// The input is split on sentence-ending punctuation, each fragment is
/// lower-cased, and every whole-word occurrence of each dictionary key is
/// replaced in declaration order. Substituted text is not re-scanned for
/// the same key. Fragments are rejoined with `". "`.
fn substitute(message: &str, config: &LanguageConfig) -> Result<String> {
    let mut fragments: Vec<String> = Vec::new();

    for fragment in message.split(['.', '!', '?']) {
        let trimmed = fragment.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut text = trimmed.to_lowercase();
        for (english, replacement) in config.dictionary {
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(english)))
                .with_context(|| format!("invalid substitution pattern for '{}'", english))?;
            text = pattern.replace_all(&text, NoExpand(replacement)).into_owned();
        }
        fragments.push(text);
    }

    Ok(fragments.join(". "))
}

/// Append the cultural note and one tip below the translated text.
fn annotate(translated: &str, config: &LanguageConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        translated,
        config.cultural_note,
        pick_tip(config.tips)
    )
}

/// Pick one tip from the language's fixed list.
///
/// Selection is cosmetic variety only; nuance detection and tone scoring
/// never depend on it, and tests assert membership rather than a specific
/// tip.
fn pick_tip(tips: &'static [&'static str]) -> &'static str {
    if tips.is_empty() {
        return "";
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    tips[nanos as usize % tips.len()]
}
