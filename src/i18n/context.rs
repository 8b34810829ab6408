//! Language context: the active display language plus key lookup.
//!
//! A [`LanguageProvider`] owns one [`LanguageContext`] for the lifetime of an
//! application (or a test, or a server-side render). Views never reach for a
//! global; they hold a [`LanguageHandle`] and call
//! [`LanguageHandle::use_language`], which fails with
//! [`I18nError::ContextNotInitialized`] once the provider is gone or when the
//! handle was never attached to one.
//!
//! The context is single-threaded (`Rc` + `Cell`): every read and write runs
//! to completion before the next UI event, so no locking is involved.

use crate::i18n::{I18nError, Language, LanguageRegistry, LookupMetrics, TranslationDictionary};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use tracing::{debug, warn};

/// Identifies a language-change listener registered with [`LanguageContext::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(Language)>;

/// Active-language state and lookup over an immutable dictionary.
pub struct LanguageContext {
    dictionary: Arc<TranslationDictionary>,
    registry: Arc<LanguageRegistry>,
    active: Cell<Language>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<u64>,
    metrics: LookupMetrics,
}

impl LanguageContext {
    /// Create a context over `dictionary`, starting in `initial`, with the
    /// global language registry deciding which languages are selectable.
    pub fn new(dictionary: Arc<TranslationDictionary>, initial: Language) -> Self {
        Self::with_registry(dictionary, LanguageRegistry::shared(), initial)
    }

    /// Create a context whose selectable languages come from `registry`.
    pub fn with_registry(
        dictionary: Arc<TranslationDictionary>,
        registry: Arc<LanguageRegistry>,
        initial: Language,
    ) -> Self {
        Self {
            dictionary,
            registry,
            active: Cell::new(initial),
            listeners: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            metrics: LookupMetrics::new(),
        }
    }

    /// Translate `key` in the active language.
    ///
    /// Returns the key itself when the active language has no entry for it.
    /// There is no fallback to the base language: an untranslated key shows
    /// up verbatim in the UI.
    pub fn translate<'k>(&self, key: &'k str) -> &'k str {
        match self.dictionary.lookup(self.active.get(), key) {
            Some(text) => {
                self.metrics.record_hit();
                text
            }
            None => {
                self.metrics.record_fallback();
                key
            }
        }
    }

    /// Short alias for [`translate`](Self::translate), as used in view code.
    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        self.translate(key)
    }

    /// The currently selected language.
    pub fn active_language(&self) -> Language {
        self.active.get()
    }

    /// Switch to `language`.
    ///
    /// Setting the language that is already active changes nothing and
    /// notifies nobody. Otherwise listeners are called synchronously, in
    /// subscription order, with the new language.
    ///
    /// # Errors
    /// `LanguageDisabled` if this context's registry has the language
    /// switched off; the previous language stays active.
    pub fn set_language(&self, language: Language) -> Result<(), I18nError> {
        if !self.registry.is_enabled(language.code()) {
            self.metrics.record_rejected_switch();
            warn!(code = language.code(), "Refusing switch to disabled language");
            return Err(I18nError::LanguageDisabled(language.code().to_string()));
        }

        let previous = self.active.replace(language);
        if previous == language {
            return Ok(());
        }

        self.metrics.record_switch();
        debug!(from = previous.code(), to = language.code(), "Active language changed");

        // Listeners may subscribe or unsubscribe while being notified, so
        // call a snapshot rather than the live list.
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(language);
        }
        Ok(())
    }

    /// Switch using a raw ISO 639-1 code, as received from a toggle control
    /// or a query string.
    ///
    /// # Errors
    /// `InvalidLanguageCode` or `LanguageDisabled`; the previous language
    /// stays active in both cases.
    pub fn set_language_code(&self, code: &str) -> Result<Language, I18nError> {
        let language = Language::from_code(code).inspect_err(|err| {
            self.metrics.record_rejected_switch();
            warn!(code, error = %err, "Refusing language switch");
        })?;

        self.set_language(language)?;
        Ok(language)
    }

    /// Move to the next enabled language (English <-> Malayalam) and return it.
    pub fn toggle(&self) -> Language {
        let next = self.registry.next_enabled(self.active.get());
        if let Err(err) = self.set_language(next) {
            warn!(code = next.code(), error = %err, "Language toggle refused");
        }
        self.active.get()
    }

    /// Register a listener called after each effective language change.
    ///
    /// Subscriptions made or removed during a notification take effect from
    /// the next language change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(Language) + 'static,
    {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// The registry deciding which languages this context accepts.
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// The dictionary this context reads from.
    pub fn dictionary(&self) -> &TranslationDictionary {
        &self.dictionary
    }

    /// Lookup counters for this context.
    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }
}

impl fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageContext")
            .field("active", &self.active.get())
            .field("listeners", &self.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Owner of the language context for one application instance.
#[derive(Debug)]
pub struct LanguageProvider {
    context: Rc<LanguageContext>,
}

impl LanguageProvider {
    /// Create a provider over `dictionary`, starting in `default_language`.
    pub fn new(dictionary: Arc<TranslationDictionary>, default_language: Language) -> Self {
        debug!(language = default_language.code(), "Language provider initialized");
        Self {
            context: Rc::new(LanguageContext::new(dictionary, default_language)),
        }
    }

    /// Create a provider whose context uses its own language registry.
    pub fn with_registry(
        dictionary: Arc<TranslationDictionary>,
        registry: Arc<LanguageRegistry>,
        default_language: Language,
    ) -> Self {
        debug!(language = default_language.code(), "Language provider initialized");
        Self {
            context: Rc::new(LanguageContext::with_registry(
                dictionary,
                registry,
                default_language,
            )),
        }
    }

    /// Create a provider over the built-in portal dictionary.
    pub fn with_builtin(default_language: Language) -> Self {
        Self::new(TranslationDictionary::builtin(), default_language)
    }

    /// A handle views can keep without extending the provider's lifetime.
    pub fn handle(&self) -> LanguageHandle {
        LanguageHandle {
            context: Rc::downgrade(&self.context),
        }
    }

    /// Direct access for the code that owns the provider.
    pub fn context(&self) -> &Rc<LanguageContext> {
        &self.context
    }
}

/// A view's link to its provider's language context.
#[derive(Debug, Clone, Default)]
pub struct LanguageHandle {
    context: Weak<LanguageContext>,
}

impl LanguageHandle {
    /// A handle with no provider behind it.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Obtain the language context.
    ///
    /// # Errors
    /// `ContextNotInitialized` if this handle was never attached to a
    /// provider or the provider has been dropped.
    pub fn use_language(&self) -> Result<Rc<LanguageContext>, I18nError> {
        self.context
            .upgrade()
            .ok_or(I18nError::ContextNotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    const EN: Catalog = &[("nav.home", "Home"), ("chatbot.sources", "Sources:")];
    const ML: Catalog = &[("nav.home", "ഹോം")];

    fn small_context() -> LanguageContext {
        let dictionary =
            TranslationDictionary::from_catalogs(&[(Language::English, EN), (Language::Malayalam, ML)])
                .expect("Should build");
        LanguageContext::new(Arc::new(dictionary), Language::English)
    }

    // ==================== translate Tests ====================

    #[test]
    fn test_translate_in_base_language() {
        let context = small_context();
        assert_eq!(context.translate("nav.home"), "Home");
    }

    #[test]
    fn test_translate_after_switch() {
        let context = small_context();
        context.set_language(Language::Malayalam).expect("Should switch");
        assert_eq!(context.translate("nav.home"), "ഹോം");
    }

    #[test]
    fn test_translate_missing_in_alternate_returns_key() {
        let context = small_context();
        context.set_language(Language::Malayalam).expect("Should switch");
        assert_eq!(context.translate("chatbot.sources"), "chatbot.sources");
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        let context = small_context();
        assert_eq!(context.translate("nonexistent.key"), "nonexistent.key");
        assert_eq!(context.t("not a key at all"), "not a key at all");
    }

    #[test]
    fn test_translate_records_metrics() {
        let context = small_context();
        context.translate("nav.home");
        context.translate("nonexistent.key");

        assert_eq!(context.metrics().lookups(), 2);
        assert_eq!(context.metrics().fallbacks(), 1);
    }

    // ==================== set_language Tests ====================

    #[test]
    fn test_initial_language() {
        assert_eq!(small_context().active_language(), Language::English);
    }

    #[test]
    fn test_set_language_twice_is_idempotent() {
        let context = small_context();
        context.set_language(Language::Malayalam).expect("Should switch");
        context.set_language(Language::Malayalam).expect("Should switch");

        assert_eq!(context.active_language(), Language::Malayalam);
        assert_eq!(context.metrics().language_switches(), 1);
    }

    #[test]
    fn test_set_language_code_rejects_unknown_and_keeps_state() {
        let context = small_context();
        context.set_language(Language::Malayalam).expect("Should switch");

        let result = context.set_language_code("fr");

        assert_eq!(result, Err(I18nError::InvalidLanguageCode("fr".to_string())));
        assert_eq!(context.active_language(), Language::Malayalam);
        assert_eq!(context.metrics().rejected_switches(), 1);
    }

    #[test]
    fn test_set_language_code_accepts_known_code() {
        let context = small_context();
        assert_eq!(context.set_language_code("ml"), Ok(Language::Malayalam));
        assert_eq!(context.active_language(), Language::Malayalam);
    }

    #[test]
    fn test_toggle_alternates() {
        let context = small_context();
        assert_eq!(context.toggle(), Language::Malayalam);
        assert_eq!(context.toggle(), Language::English);
    }

    // ==================== Subscription Tests ====================

    #[test]
    fn test_listener_notified_on_change_only() {
        let context = small_context();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        context.subscribe(move |language| sink.borrow_mut().push(language));

        context.set_language(Language::Malayalam).expect("Should switch");
        context.set_language(Language::Malayalam).expect("Should switch");
        context.set_language(Language::English).expect("Should switch");

        assert_eq!(*seen.borrow(), vec![Language::Malayalam, Language::English]);
    }

    #[test]
    fn test_listener_can_read_context_during_notification() {
        let context = Rc::new(small_context());
        let rendered = Rc::new(RefCell::new(String::new()));

        let weak = Rc::downgrade(&context);
        let sink = Rc::clone(&rendered);
        context.subscribe(move |_| {
            if let Some(context) = weak.upgrade() {
                *sink.borrow_mut() = context.translate("nav.home").to_string();
            }
        });

        context.set_language(Language::Malayalam).expect("Should switch");
        assert_eq!(*rendered.borrow(), "ഹോം");
    }

    #[test]
    fn test_listener_can_unsubscribe_itself() {
        let context = Rc::new(small_context());
        let calls = Rc::new(Cell::new(0));
        let own_id = Rc::new(Cell::new(None));

        let weak = Rc::downgrade(&context);
        let counter = Rc::clone(&calls);
        let id_slot = Rc::clone(&own_id);
        let id = context.subscribe(move |_| {
            counter.set(counter.get() + 1);
            if let (Some(context), Some(id)) = (weak.upgrade(), id_slot.get()) {
                assert!(context.unsubscribe(id));
            }
        });
        own_id.set(Some(id));

        context.toggle();
        context.toggle();

        assert_eq!(calls.get(), 1);
        assert!(!context.unsubscribe(id));
    }

    #[test]
    fn test_listener_can_subscribe_during_notification() {
        let context = Rc::new(small_context());
        let child_calls = Rc::new(Cell::new(0));

        let weak = Rc::downgrade(&context);
        let counter = Rc::clone(&child_calls);
        context.subscribe(move |_| {
            if let Some(context) = weak.upgrade() {
                let counter = Rc::clone(&counter);
                context.subscribe(move |_| counter.set(counter.get() + 1));
            }
        });

        // The child added during the first change is not called for it.
        context.toggle();
        assert_eq!(child_calls.get(), 0);

        // One child from the first change runs; the second change adds another.
        context.toggle();
        assert_eq!(child_calls.get(), 1);
        assert_eq!(context.listeners.borrow().len(), 3);
    }

    #[test]
    fn test_disabled_language_is_rejected_and_state_kept() {
        let dictionary =
            TranslationDictionary::from_catalogs(&[(Language::English, EN), (Language::Malayalam, ML)])
                .expect("Should build");
        let registry = Arc::new(LanguageRegistry::with_disabled(&[Language::Malayalam]));
        let context = LanguageContext::with_registry(Arc::new(dictionary), registry, Language::English);

        assert_eq!(
            context.set_language(Language::Malayalam),
            Err(I18nError::LanguageDisabled("ml".to_string()))
        );
        assert_eq!(
            context.set_language_code("ml"),
            Err(I18nError::LanguageDisabled("ml".to_string()))
        );
        assert_eq!(context.active_language(), Language::English);
        assert_eq!(context.metrics().rejected_switches(), 2);
        assert_eq!(context.metrics().language_switches(), 0);
    }

    #[test]
    fn test_toggle_with_single_enabled_language_stays_put() {
        let registry = Arc::new(LanguageRegistry::with_disabled(&[Language::Malayalam]));
        let context =
            LanguageContext::with_registry(TranslationDictionary::builtin(), registry, Language::English);

        assert_eq!(context.toggle(), Language::English);
        assert_eq!(context.metrics().rejected_switches(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let context = small_context();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = context.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(context.unsubscribe(id));
        assert!(!context.unsubscribe(id));

        context.toggle();
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_subscription_ids_are_unique() {
        let context = small_context();
        let first = context.subscribe(|_| {});
        let second = context.subscribe(|_| {});
        assert_ne!(first, second);
    }

    // ==================== Provider Tests ====================

    #[test]
    fn test_handle_resolves_while_provider_alive() {
        let provider = LanguageProvider::with_builtin(Language::English);
        let handle = provider.handle();

        let context = handle.use_language().expect("Provider is alive");
        assert!(Rc::ptr_eq(&context, provider.context()));
    }

    #[test]
    fn test_detached_handle_fails_fast() {
        let handle = LanguageHandle::detached();
        assert_eq!(handle.use_language().unwrap_err(), I18nError::ContextNotInitialized);
    }

    #[test]
    fn test_handle_fails_after_provider_dropped() {
        let provider = LanguageProvider::with_builtin(Language::English);
        let handle = provider.handle();
        drop(provider);

        assert_eq!(handle.use_language().unwrap_err(), I18nError::ContextNotInitialized);
    }

    #[test]
    fn test_handles_share_state() {
        let provider = LanguageProvider::with_builtin(Language::English);
        let header = provider.handle();
        let footer = provider.handle();

        header
            .use_language()
            .expect("Provider is alive")
            .set_language(Language::Malayalam)
            .expect("Should switch");

        let context = footer.use_language().expect("Provider is alive");
        assert_eq!(context.active_language(), Language::Malayalam);
    }

    #[test]
    fn test_debug_output() {
        let context = small_context();
        context.subscribe(|_| {});
        let debug = format!("{:?}", context);
        assert!(debug.contains("active: English"));
        assert!(debug.contains("listeners: 1"));
    }
}
