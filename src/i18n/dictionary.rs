//! Translation dictionary: immutable `Language -> key -> text` store.
//!
//! Catalogs are validated once at construction (well-formed keys, no
//! duplicates, no empty text). After that the dictionary is read-only and
//! can be shared freely between threads and contexts.

use crate::i18n::catalog::{ENGLISH_ENTRIES, MALAYALAM_ENTRIES};
use crate::i18n::{I18nError, Language};
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};
use tracing::info;

/// A per-language catalog as fed to [`TranslationDictionary::from_catalogs`].
pub type Catalog = &'static [(&'static str, &'static str)];

/// Immutable mapping from language to its key/text table.
#[derive(Debug, Clone, Default)]
pub struct TranslationDictionary {
    tables: BTreeMap<Language, HashMap<&'static str, &'static str>>,
}

static BUILTIN: OnceLock<Arc<TranslationDictionary>> = OnceLock::new();
static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

/// Check a key against the dotted `<area>.<field>[.<field>...]` convention.
///
/// Segments are lowercase ASCII letters, digits or underscores; at least two
/// segments are required.
pub fn is_valid_key(key: &str) -> bool {
    let regex =
        KEY_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9_]+(\.[a-z0-9_]+)+$").unwrap());
    regex.is_match(key)
}

impl TranslationDictionary {
    /// The portal's built-in English/Malayalam dictionary.
    ///
    /// Built on first access and kept for the life of the process; every
    /// call hands out a clone of the same `Arc`.
    ///
    /// # Panics
    /// Panics if the compiled-in catalogs fail validation; the catalog tests
    /// guard against that.
    pub fn builtin() -> Arc<TranslationDictionary> {
        BUILTIN
            .get_or_init(|| {
                let dictionary = Self::from_catalogs(&[
                    (Language::English, ENGLISH_ENTRIES),
                    (Language::Malayalam, MALAYALAM_ENTRIES),
                ])
                .expect("Built-in catalogs should be well-formed");
                Arc::new(dictionary)
            })
            .clone()
    }

    /// Build a dictionary from per-language catalogs.
    ///
    /// # Errors
    /// * `MalformedKey` if a key breaks the dotted naming convention
    /// * `EmptyValue` if a key maps to an empty string
    /// * `DuplicateKey` if a key repeats within one language, including
    ///   when the same language is supplied twice
    pub fn from_catalogs(catalogs: &[(Language, Catalog)]) -> Result<Self, I18nError> {
        let mut tables: BTreeMap<Language, HashMap<&'static str, &'static str>> = BTreeMap::new();

        for (language, entries) in catalogs {
            let table = tables.entry(*language).or_default();

            for &(key, text) in entries.iter() {
                if !is_valid_key(key) {
                    return Err(I18nError::MalformedKey {
                        language: language.code(),
                        key: key.to_string(),
                    });
                }
                if text.is_empty() {
                    return Err(I18nError::EmptyValue {
                        language: language.code(),
                        key: key.to_string(),
                    });
                }
                if table.insert(key, text).is_some() {
                    return Err(I18nError::DuplicateKey {
                        language: language.code(),
                        key: key.to_string(),
                    });
                }
            }
        }

        for (language, table) in &tables {
            info!(language = language.code(), keys = table.len(), "Loaded translation catalog");
        }

        Ok(Self { tables })
    }

    /// Look up `key` in `language`'s table. `None` when absent; no
    /// cross-language fallback is attempted.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .copied()
    }

    /// Whether `language` defines `key`.
    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.lookup(language, key).is_some()
    }

    /// All keys defined for `language`, sorted.
    pub fn keys(&self, language: Language) -> Vec<&'static str> {
        let mut keys: Vec<_> = self
            .tables
            .get(&language)
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Number of keys defined for `language`.
    pub fn len(&self, language: Language) -> usize {
        self.tables.get(&language).map(HashMap::len).unwrap_or(0)
    }

    /// `true` when no language has any entry.
    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }

    /// Languages that have a catalog, in enumeration order.
    pub fn languages(&self) -> Vec<Language> {
        self.tables.keys().copied().collect()
    }
}
