//! Language registry: Single source of truth for all supported languages.
//!
//! Each language carries its pseudo-translation dictionary, its cultural
//! politeness annotation, and the fixed list of contextual tips shown under
//! a translation. The registry is a singleton behind `OnceLock` so the
//! tables are initialized once and shared read-only across requests.

use std::sync::OnceLock;

/// Configuration and static content for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "ja")
    pub code: &'static str,

    /// English name of the language (e.g., "Japanese"). The demo frontend
    /// sends this name lower-cased as the target-language value, so lookups
    /// accept it alongside the code.
    pub name: &'static str,

    /// Native name of the language (e.g., "日本語")
    pub native_name: &'static str,

    /// Whether this is the canonical/source language (only one should be true).
    /// Messages are written in the canonical language; translating to it is
    /// the identity.
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,

    /// Ordered `(english, replacement)` pairs for the pseudo-translation.
    /// Declaration order is the substitution order and must be preserved.
    pub dictionary: &'static [(&'static str, &'static str)],

    /// Cultural politeness annotation appended to every translation
    pub cultural_note: &'static str,

    /// Fixed list of contextual tips; one is appended per translation
    pub tips: &'static [&'static str],
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a language by ISO code or by its lower-cased English name.
    ///
    /// The workspace UI submits full names ("japanese"), API clients tend to
    /// send codes ("ja"); both resolve to the same config.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` for unknown values (the engine falls back to a bracket-tagged
    ///   passthrough rather than erroring)
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.code == code || lang.name.eq_ignore_ascii_case(code))
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if zero or multiple canonical languages are defined (a
    /// configuration error caught by tests).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language code (or name) is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Default language configurations.
///
/// English is canonical (messages are written in it); the four target
/// languages carry the word-level substitution dictionaries used by the
/// translation simulation.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
            dictionary: &[],
            cultural_note: "(Culturally adapted)",
            tips: &[
                "Specific dates and times travel better across time zones than relative deadlines.",
                "Short sentences reduce ambiguity for non-native readers.",
                "State the request early; context can follow.",
            ],
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_canonical: false,
            enabled: true,
            dictionary: &[
                ("hello", "こんにちは"),
                ("please", "お願いします"),
                ("thank you", "ありがとうございます"),
                ("meeting", "会議"),
                ("deadline", "締切"),
                ("project", "プロジェクト"),
                ("report", "レポート"),
                ("schedule", "スケジュール"),
                ("urgent", "緊急"),
                ("asap", "可能な限り早く"),
                ("could you", "していただけますか"),
                ("would you", "していただけませんか"),
                ("I need", "必要です"),
                ("by end of day", "本日中に"),
                ("by tomorrow", "明日までに"),
            ],
            cultural_note: "(丁寧語で表現されています - Expressed in polite form)",
            tips: &[
                "Requests land better when framed as questions rather than instructions.",
                "Opening with appreciation before a request is customary in Japanese business writing.",
                "Avoid pressing for an immediate yes or no; leave room for consideration.",
            ],
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_canonical: false,
            enabled: true,
            dictionary: &[
                ("hello", "hola"),
                ("please", "por favor"),
                ("thank you", "gracias"),
                ("meeting", "reunión"),
                ("deadline", "fecha límite"),
                ("project", "proyecto"),
                ("report", "informe"),
                ("schedule", "horario"),
                ("urgent", "urgente"),
                ("asap", "lo antes posible"),
                ("could you", "podrías"),
                ("would you", "podrías"),
                ("I need", "necesito"),
                ("by end of day", "para el final del día"),
                ("by tomorrow", "para mañana"),
            ],
            cultural_note: "(Expresado con cortesía apropiada - Expressed with appropriate courtesy)",
            tips: &[
                "A brief personal greeting before business is common in Spanish-speaking workplaces.",
                "Building rapport first makes direct requests easier to receive.",
                "Warmth in the opening line is read as professionalism, not informality.",
            ],
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_canonical: false,
            enabled: true,
            dictionary: &[
                ("hello", "hallo"),
                ("please", "bitte"),
                ("thank you", "danke"),
                ("meeting", "Besprechung"),
                ("deadline", "Frist"),
                ("project", "Projekt"),
                ("report", "Bericht"),
                ("schedule", "Zeitplan"),
                ("urgent", "dringend"),
                ("asap", "so schnell wie möglich"),
                ("could you", "könnten Sie"),
                ("would you", "würden Sie"),
                ("I need", "ich brauche"),
                ("by end of day", "bis Ende des Tages"),
                ("by tomorrow", "bis morgen"),
            ],
            cultural_note: "(Höflich und professionell ausgedrückt - Expressed politely and professionally)",
            tips: &[
                "Directness is appreciated; state the request and the deadline plainly.",
                "Exact dates and times are expected in German business culture.",
                "Keep small talk brief; clarity is read as respect.",
            ],
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_canonical: false,
            enabled: true,
            dictionary: &[
                ("hello", "bonjour"),
                ("please", "s'il vous plaît"),
                ("thank you", "merci"),
                ("meeting", "réunion"),
                ("deadline", "échéance"),
                ("project", "projet"),
                ("report", "rapport"),
                ("schedule", "emploi du temps"),
                ("urgent", "urgent"),
                ("asap", "dès que possible"),
                ("could you", "pourriez-vous"),
                ("would you", "voudriez-vous"),
                ("I need", "j'ai besoin"),
                ("by end of day", "avant la fin de la journée"),
                ("by tomorrow", "avant demain"),
            ],
            cultural_note: "(Exprimé avec politesse appropriée - Expressed with appropriate politeness)",
            tips: &[
                "Formal address (vous) is the safe default in French professional writing.",
                "A polite closing formula is expected in French business correspondence.",
                "Conditional phrasing (pourriez-vous) keeps requests courteous.",
            ],
        },
    ]
}
