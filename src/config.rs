use crate::i18n::{Language, LanguageRegistry};
use anyhow::{bail, Context, Result};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Language the portal starts in
    pub default_language: Language,

    // Languages hidden from the toggle (comma-separated codes)
    pub disabled_languages: Vec<Language>,

    // Treat untranslated keys as a failure in the coverage command
    pub strict_coverage: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_code = std::env::var("DOCUMETRO_DEFAULT_LANGUAGE")
            .unwrap_or_else(|_| Language::canonical().code().to_string());

        let default_language = Language::from_code(&default_code)
            .with_context(|| format!("Invalid DOCUMETRO_DEFAULT_LANGUAGE '{}'", default_code))?;

        let disabled_languages = std::env::var("DOCUMETRO_DISABLED_LANGUAGES")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(|code| {
                Language::from_code(code)
                    .with_context(|| format!("Invalid DOCUMETRO_DISABLED_LANGUAGES entry '{}'", code))
            })
            .collect::<Result<Vec<_>>>()?;

        if disabled_languages.contains(&Language::canonical()) {
            bail!("DOCUMETRO_DISABLED_LANGUAGES cannot disable the base language");
        }
        if disabled_languages.contains(&default_language) {
            bail!(
                "DOCUMETRO_DEFAULT_LANGUAGE '{}' is listed in DOCUMETRO_DISABLED_LANGUAGES",
                default_language
            );
        }

        Ok(Self {
            default_language,
            disabled_languages,

            strict_coverage: std::env::var("DOCUMETRO_STRICT_COVERAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        })
    }

    /// Language registry with the configured languages switched off.
    pub fn registry(&self) -> Arc<LanguageRegistry> {
        if self.disabled_languages.is_empty() {
            LanguageRegistry::shared()
        } else {
            Arc::new(LanguageRegistry::with_disabled(&self.disabled_languages))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: Language::canonical(),
            disabled_languages: Vec::new(),
            strict_coverage: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("DOCUMETRO_DEFAULT_LANGUAGE");
        std::env::remove_var("DOCUMETRO_STRICT_COVERAGE");
        std::env::remove_var("DOCUMETRO_DISABLED_LANGUAGES");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("Should load");
        assert_eq!(config, Config::default());
        assert_eq!(config.default_language, Language::English);
    }

    #[test]
    #[serial]
    fn test_from_env_malayalam_default() {
        clear_env();
        std::env::set_var("DOCUMETRO_DEFAULT_LANGUAGE", "ml");
        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.default_language, Language::Malayalam);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_language() {
        clear_env();
        std::env::set_var("DOCUMETRO_DEFAULT_LANGUAGE", "fr");
        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("DOCUMETRO_DEFAULT_LANGUAGE"));
        assert!(format!("{:#}", err).contains("unknown language code"));
    }

    #[test]
    #[serial]
    fn test_from_env_strict_coverage() {
        clear_env();
        std::env::set_var("DOCUMETRO_STRICT_COVERAGE", "true");
        let config = Config::from_env().expect("Should load");
        clear_env();

        assert!(config.strict_coverage);
    }

    #[test]
    #[serial]
    fn test_from_env_unparseable_strict_flag_defaults_to_false() {
        clear_env();
        std::env::set_var("DOCUMETRO_STRICT_COVERAGE", "yes please");
        let config = Config::from_env().expect("Should load");
        clear_env();

        assert!(!config.strict_coverage);
    }

    #[test]
    #[serial]
    fn test_from_env_disabled_languages() {
        clear_env();
        std::env::set_var("DOCUMETRO_DISABLED_LANGUAGES", " ml ,");
        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.disabled_languages, vec![Language::Malayalam]);
        let registry = config.registry();
        assert!(!registry.is_enabled("ml"));
        assert!(registry.is_enabled("en"));
    }

    #[test]
    #[serial]
    fn test_from_env_cannot_disable_base_language() {
        clear_env();
        std::env::set_var("DOCUMETRO_DISABLED_LANGUAGES", "en");
        let result = Config::from_env();
        clear_env();

        assert!(result.unwrap_err().to_string().contains("base language"));
    }

    #[test]
    #[serial]
    fn test_from_env_default_language_cannot_be_disabled() {
        clear_env();
        std::env::set_var("DOCUMETRO_DEFAULT_LANGUAGE", "ml");
        std::env::set_var("DOCUMETRO_DISABLED_LANGUAGES", "ml");
        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_uses_global_registry() {
        let registry = Config::default().registry();
        assert!(std::ptr::eq(registry.as_ref(), LanguageRegistry::get()));
    }
}
