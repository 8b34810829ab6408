//! Error types for the i18n layer.
//!
//! A missing translation is deliberately not represented here: lookups that
//! miss return the key itself instead of failing.

use thiserror::Error;

/// Errors raised by dictionary construction and language-state access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// A view asked for the language context without an enclosing provider,
    /// or after the provider was dropped.
    #[error("language context requested outside of an initialized LanguageProvider")]
    ContextNotInitialized,

    /// The code is not one of the enumerated language codes.
    #[error("unknown language code: '{0}'")]
    InvalidLanguageCode(String),

    /// The code is known to the registry but switched off.
    #[error("language '{0}' is not enabled")]
    LanguageDisabled(String),

    /// The same key appeared twice in one language's catalog.
    #[error("duplicate translation key '{key}' in language '{language}'")]
    DuplicateKey { language: &'static str, key: String },

    /// The key does not follow the dotted `<area>.<field>` convention.
    #[error("malformed translation key '{key}' in language '{language}'")]
    MalformedKey { language: &'static str, key: String },

    /// A catalog entry maps a key to an empty string.
    #[error("empty translation for key '{key}' in language '{language}'")]
    EmptyValue { language: &'static str, key: String },
}
