//! Language type: Flexible, validated language representation.
//!
//! A `Language` can only be constructed for codes (or names) present in the
//! registry, so holding one is proof the language is supported and enabled.
//! The analysis engine accepts raw strings and falls back gracefully for
//! unknown values; this type is for the parts of the system that require a
//! supported language.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "ja")
    code: &'static str,
}

impl Language {
    /// The canonical source language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a code or lower-cased English name.
    ///
    /// # Arguments
    /// * `code` - ISO 639-1 code ("ja") or full name ("japanese")
    ///
    /// # Returns
    /// * `Ok(Language)` if the value resolves to an enabled language
    /// * `Err` if the value is unknown or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a properly constructed Language.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}
