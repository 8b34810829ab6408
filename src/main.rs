//! DocuMetro i18n tool - inspect the portal's translation catalogs
//!
//! Usage:
//!   documetro-i18n translate <code> <key>...   # Print each key in the given language
//!   documetro-i18n coverage                    # Print the coverage report as JSON
//!   documetro-i18n languages                   # List supported languages
//!
//! Optional environment variables:
//! - DOCUMETRO_DEFAULT_LANGUAGE (defaults to en)
//! - DOCUMETRO_DISABLED_LANGUAGES (comma-separated codes; defaults to none)
//! - DOCUMETRO_STRICT_COVERAGE (defaults to false; fail `coverage` on any warning)

use anyhow::{bail, Context, Result};
use documetro_i18n::config::Config;
use documetro_i18n::i18n::{LanguageProvider, TranslationDictionary, TranslationValidator};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("documetro_i18n=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("translate") => translate(&config, &args[1..]),
        Some("coverage") => coverage(&config),
        Some("languages") => languages(&config),
        Some(other) => bail!("Unknown command '{}'. Expected translate, coverage or languages", other),
        None => bail!("Usage: documetro-i18n <translate <code> <key>...|coverage|languages>"),
    }
}

fn translate(config: &Config, args: &[String]) -> Result<()> {
    let Some((code, keys)) = args.split_first() else {
        bail!("Usage: documetro-i18n translate <code> <key>...");
    };

    let provider = LanguageProvider::with_registry(
        TranslationDictionary::builtin(),
        config.registry(),
        config.default_language,
    );
    let context = provider.handle().use_language()?;
    context
        .set_language_code(code)
        .with_context(|| format!("Cannot translate into '{}'", code))?;

    for key in keys {
        println!("{}\t{}", key, context.translate(key));
    }

    let report = context.metrics().report();
    if report.fallbacks > 0 {
        warn!(
            fallbacks = report.fallbacks,
            lookups = report.lookups,
            "Some keys have no translation and were printed as-is"
        );
    }
    Ok(())
}

fn coverage(config: &Config) -> Result<()> {
    let dictionary = TranslationDictionary::builtin();
    let report = TranslationValidator::validate(&dictionary);

    println!("{}", serde_json::to_string_pretty(&report)?);

    for entry in &report.coverage {
        info!(
            language = entry.language.code(),
            translated = entry.translated,
            total = entry.total,
            "Coverage {:.1}%",
            entry.percent
        );
    }

    if report.has_errors() {
        bail!("{} catalog error(s) found", report.errors.len());
    }
    if config.strict_coverage && report.has_warnings() {
        bail!(
            "{} untranslated or inconsistent key(s) with DOCUMETRO_STRICT_COVERAGE set",
            report.warnings.len()
        );
    }
    Ok(())
}

fn languages(config: &Config) -> Result<()> {
    for language in config.registry().list_all() {
        println!(
            "{}\t{}\t{}{}{}",
            language.code,
            language.name,
            language.native_name,
            if language.is_canonical { "\t(base)" } else { "" },
            if language.enabled { "" } else { "\t(disabled)" },
        );
    }
    Ok(())
}
