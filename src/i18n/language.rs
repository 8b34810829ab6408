//! Language type: the closed set of display languages the portal supports.
//!
//! Codes coming from outside (configuration, the toggle control, the CLI)
//! are validated against the registry before they become a `Language`.

use crate::i18n::{I18nError, LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    /// Base language; every key is defined here first.
    #[serde(rename = "en")]
    English,

    /// Alternate language.
    #[serde(rename = "ml")]
    Malayalam,
}

impl Language {
    /// Every enumerated language, in registry order.
    pub const ALL: &'static [Language] = &[Language::English, Language::Malayalam];

    /// Create a Language from an ISO 639-1 code.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is known and the language is enabled
    /// * `Err(I18nError::InvalidLanguageCode)` for an unknown code
    /// * `Err(I18nError::LanguageDisabled)` for a known but disabled one
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(config.language),
            Some(_) => Err(I18nError::LanguageDisabled(code.to_string())),
            None => Err(I18nError::InvalidLanguageCode(code.to_string())),
        }
    }

    /// The base language the application starts in.
    pub fn canonical() -> Language {
        LanguageRegistry::get().canonical().language
    }

    /// ISO 639-1 code (e.g., "en", "ml").
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Malayalam => "ml",
        }
    }

    /// Full registry entry for this language.
    ///
    /// # Panics
    /// Panics if the registry has no entry for this variant, which the
    /// registry tests rule out.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_language(*self)
            .expect("Every Language variant should be registered")
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (shown on the toggle control).
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// `true` for the base language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
