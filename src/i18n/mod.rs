//! Internationalization (i18n) module for multi-language support.
//!
//! All language-related state lives here: the registry of supported
//! languages with their pseudo-translation dictionaries, cultural notes,
//! and contextual tips, plus the validated `Language` type.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and
//!   their static content tables
//! - `language`: Type-safe Language type validated against the registry
//!
//! # Example
//!
//! ```rust,ignore
//! use converse_easy::i18n::{Language, LanguageRegistry};
//!
//! // Create language from code or name
//! let japanese = Language::from_code("japanese")?;
//!
//! // List all enabled languages
//! let languages = LanguageRegistry::get().list_enabled();
//! ```

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
