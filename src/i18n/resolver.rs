//! Language resolver: the current-language holder and dotted-path lookup.
//!
//! `Localizer` owns the current language in a `watch` channel. Reads go
//! through `current_language`/`t` every time, so a `set_language` call is
//! visible to the very next lookup; views that keep language-derived state
//! subscribe to the channel instead of copying the value.

use crate::i18n::{
    CatalogError, CatalogValidator, I18nError, Language, Lookup, LookupMetrics, MetricsReport,
    TranslationStore,
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

pub struct Localizer {
    store: Arc<TranslationStore>,
    current: watch::Sender<Language>,
    metrics: LookupMetrics,
}

impl Localizer {
    /// Create a localizer starting in the default language.
    pub fn new(store: Arc<TranslationStore>) -> Self {
        Self::with_language(store, Language::default_language())
    }

    pub fn with_language(store: Arc<TranslationStore>, language: Language) -> Self {
        let (current, _) = watch::channel(language);
        Self {
            store,
            current,
            metrics: LookupMetrics::new(),
        }
    }

    /// Load the compiled-in catalogs, report divergence, and start in the
    /// default language.
    pub fn builtin() -> Result<Self, CatalogError> {
        let store = TranslationStore::builtin()?;
        let report = CatalogValidator::validate(&store);
        report.log();
        debug!(
            "Loaded catalogs for {} languages ({} errors, {} warnings)",
            Language::ALL.len(),
            report.errors.len(),
            report.warnings.len()
        );
        Ok(Self::new(Arc::new(store)))
    }

    /// Look up `path` in the catalog of `language`.
    ///
    /// Returns `path` itself when a segment is missing or when the path ends
    /// at a group of strings instead of a single string.
    pub fn resolve<'a>(&'a self, language: Language, path: &'a str) -> &'a str {
        match self.store.lookup(language, path) {
            Lookup::Found(value) => {
                self.metrics.record_resolved();
                value
            }
            Lookup::Missing => {
                self.metrics.record_missing();
                warn!("Translation key not found: {} for language {}", path, language);
                path
            }
            Lookup::NotLeaf => {
                self.metrics.record_not_leaf();
                debug!("Translation key is not a string: {} for language {}", path, language);
                path
            }
        }
    }

    /// Resolve `path` in the current language.
    pub fn t<'a>(&'a self, path: &'a str) -> &'a str {
        self.resolve(self.current_language(), path)
    }

    pub fn current_language(&self) -> Language {
        *self.current.borrow()
    }

    /// Switch the current language.
    ///
    /// Subscribers are only notified when the value actually changes.
    pub fn set_language(&self, language: Language) {
        self.metrics.record_language_switch();
        let changed = self.current.send_if_modified(|current| {
            if *current == language {
                return false;
            }
            debug!("Switching language from {} to {}", current, language);
            *current = language;
            true
        });

        if !changed {
            debug!("Language already set to {}", language);
        }
    }

    /// Switch the current language by code.
    ///
    /// An unsupported code is rejected and the current language is kept.
    pub fn set_language_code(&self, code: &str) -> Result<Language, I18nError> {
        let language = Language::from_code(code).inspect_err(|e| {
            warn!("Ignoring language switch: {}", e);
        })?;
        self.set_language(language);
        Ok(language)
    }

    /// Receive notifications whenever the current language changes.
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.current.subscribe()
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }
}
