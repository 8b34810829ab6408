//! Catalog coverage validation.
//!
//! Compares every alternate language against the base language. Keys the
//! alternate language has not translated yet are warnings: the portal
//! renders them as raw keys, which is acceptable while localization catches
//! up. Keys that exist only in an alternate language are errors, since no
//! view can be relying on them.

use crate::i18n::{Language, TranslationDictionary};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors, warnings and per-language coverage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Critical errors that indicate catalog defects
    pub errors: Vec<String>,

    /// Non-critical warnings about incomplete localization
    pub warnings: Vec<String>,

    /// Coverage of each alternate language relative to the base language
    pub coverage: Vec<LanguageCoverage>,
}

/// How much of the base language one alternate language has translated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageCoverage {
    pub language: Language,

    /// Base-language keys this language defines
    pub translated: usize,

    /// Number of base-language keys
    pub total: usize,

    /// `translated / total` as a percentage (0-100)
    pub percent: f64,

    /// Base-language keys this language lacks, sorted
    pub missing: Vec<&'static str>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            coverage: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Coverage entry for `language`, if it was checked.
    pub fn coverage_for(&self, language: Language) -> Option<&LanguageCoverage> {
        self.coverage.iter().find(|entry| entry.language == language)
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog completeness.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every alternate language in `dictionary` against the base
    /// language.
    ///
    /// This function checks that:
    /// - alternate languages define no keys the base language lacks (error)
    /// - alternate languages translate every base key (warning per key)
    /// - translated strings keep the base string's `{placeholder}`s (warning)
    pub fn validate(dictionary: &TranslationDictionary) -> ValidationReport {
        let mut report = ValidationReport::new();
        let base = Language::canonical();
        let base_keys: BTreeSet<&'static str> = dictionary.keys(base).into_iter().collect();

        for language in dictionary.languages() {
            if language == base {
                continue;
            }

            let keys: BTreeSet<&'static str> = dictionary.keys(language).into_iter().collect();

            for extra in keys.difference(&base_keys) {
                report.errors.push(format!(
                    "Key '{}' exists in '{}' but not in base language '{}'",
                    extra,
                    language.code(),
                    base.code()
                ));
            }

            let missing: Vec<&'static str> = base_keys.difference(&keys).copied().collect();
            for key in &missing {
                report.warnings.push(format!(
                    "Key '{}' is not translated to '{}'",
                    key,
                    language.code()
                ));
            }

            for key in keys.intersection(&base_keys) {
                let (Some(original), Some(translated)) =
                    (dictionary.lookup(base, key), dictionary.lookup(language, key))
                else {
                    continue;
                };
                let orig_placeholders = Self::extract_placeholders(original);
                let trans_placeholders = Self::extract_placeholders(translated);
                if orig_placeholders != trans_placeholders {
                    report.warnings.push(format!(
                        "Placeholder mismatch for '{}' in '{}': base has {:?}, translation has {:?}",
                        key,
                        language.code(),
                        orig_placeholders,
                        trans_placeholders
                    ));
                }
            }

            let total = base_keys.len();
            let translated = total - missing.len();
            let percent = if total > 0 {
                (translated as f64 / total as f64) * 100.0
            } else {
                100.0
            };

            report.coverage.push(LanguageCoverage {
                language,
                translated,
                total,
                percent,
                missing,
            });
        }

        report
    }

    /// Extract the sorted set of `{name}` placeholders from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(0).map(|m| m.as_str().to_string()))
            .collect()
    }
}
