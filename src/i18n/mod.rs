//! Internationalization (i18n) module for the DocuMetro portal.
//!
//! Views render text by key through a [`LanguageContext`]; the user's
//! language toggle switches the context between English and Malayalam.
//!
//! # Architecture
//!
//! - `registry`: Supported languages and their display metadata
//! - `language`: The closed `Language` enumeration
//! - `catalog`: Built-in English and Malayalam string tables
//! - `dictionary`: Validated, immutable `Language -> key -> text` store
//! - `context`: Active language, lookup with raw-key fallback, provider/handle
//! - `validator`: Coverage report for untranslated keys
//! - `metrics`: Per-context lookup counters
//!
//! # Example
//!
//! ```rust,ignore
//! use documetro_i18n::i18n::{Language, LanguageProvider};
//!
//! let provider = LanguageProvider::with_builtin(Language::canonical());
//! let context = provider.handle().use_language()?;
//!
//! assert_eq!(context.translate("nav.home"), "Home");
//! context.set_language(Language::Malayalam)?;
//! assert_eq!(context.translate("nav.home"), "ഹോം");
//! ```

mod catalog;
mod context;
mod dictionary;
mod error;
mod language;
mod metrics;
mod registry;
mod validator;

pub use catalog::{ENGLISH_ENTRIES, MALAYALAM_ENTRIES};
pub use context::{LanguageContext, LanguageHandle, LanguageProvider, SubscriptionId};
pub use dictionary::{is_valid_key, Catalog, TranslationDictionary};
pub use error::I18nError;
pub use language::Language;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{LanguageCoverage, TranslationValidator, ValidationReport};
