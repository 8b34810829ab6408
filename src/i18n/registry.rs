//! Language registry: Single source of truth for all supported languages.
//!
//! The portal ships English as its base language and Malayalam as the
//! alternate. The registry carries the display metadata for each enumerated
//! [`Language`]. The process-wide instance is initialized once on first
//! access via `OnceLock`; a language context can be given its own registry
//! instead, e.g. to switch off a language whose catalog is not ready.

use crate::i18n::Language;
use std::sync::{Arc, OnceLock};

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The enumerated language this entry describes
    pub language: Language,

    /// ISO 639-1 language code (e.g., "en", "ml")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Malayalam")
    pub name: &'static str,

    /// Native name of the language, as shown on the toggle control
    pub native_name: &'static str,

    /// Whether this is the base language every other catalog is measured
    /// against (exactly one entry must be true)
    pub is_canonical: bool,

    /// Whether this language can be selected
    pub enabled: bool,
}

/// Language registry.
///
/// Immutable after construction. Holds metadata only; the active-language
/// selection lives in each [`LanguageContext`](crate::i18n::LanguageContext).
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<Arc<LanguageRegistry>> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        Self::global()
    }

    /// The global registry as a shareable `Arc`.
    pub fn shared() -> Arc<LanguageRegistry> {
        Arc::clone(Self::global())
    }

    fn global() -> &'static Arc<LanguageRegistry> {
        REGISTRY.get_or_init(|| Arc::new(LanguageRegistry::new(default_languages())))
    }

    /// Build a registry from explicit configurations.
    pub fn new(languages: Vec<LanguageConfig>) -> Self {
        Self { languages }
    }

    /// The default languages with `disabled` switched off.
    ///
    /// The canonical language always stays enabled; it is where every
    /// context can fall back to.
    pub fn with_disabled(disabled: &[Language]) -> Self {
        let languages = default_languages()
            .into_iter()
            .map(|mut config| {
                if !config.is_canonical && disabled.contains(&config.language) {
                    config.enabled = false;
                }
                config
            })
            .collect();
        Self::new(languages)
    }

    /// Get a language configuration by its ISO 639-1 code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the configuration of an enumerated language.
    pub fn get_by_language(&self, language: Language) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.language == language)
    }

    /// Get all enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical (base) language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
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

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }

    /// The enabled language that follows `current` in registry order,
    /// wrapping around. Used by the header's language toggle.
    pub fn next_enabled(&self, current: Language) -> Language {
        let enabled = self.list_enabled();
        let position = enabled
            .iter()
            .position(|lang| lang.language == current)
            .unwrap_or(0);

        enabled
            .get((position + 1) % enabled.len().max(1))
            .map(|lang| lang.language)
            .unwrap_or(current)
    }
}

/// Default language configurations: English (canonical) and Malayalam.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::English,
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            language: Language::Malayalam,
            code: "ml",
            name: "Malayalam",
            native_name: "മലയാളം",
            is_canonical: false,
            enabled: true,
        },
    ]
}
