//! Language type: the closed set of languages the site is translated into.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported language.
///
/// The set is closed: every variant has a registry entry and a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    Russian,
    Kazakh,
}

/// Errors raised when a language code from outside the program is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    #[error("Unsupported language code: '{0}'")]
    UnsupportedLanguage(String),
}

impl Language {
    /// All languages in switcher order.
    pub const ALL: [Language; 3] = [Language::English, Language::Russian, Language::Kazakh];

    /// Create a Language from a language code string.
    ///
    /// # Example
    /// ```
    /// use ai_impact::i18n::Language;
    ///
    /// let russian = Language::from_code("ru").unwrap();
    /// assert_eq!(russian, Language::Russian);
    /// ```
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| config.language)
            .ok_or_else(|| I18nError::UnsupportedLanguage(code.to_string()))
    }

    /// The language the site starts in.
    pub fn default_language() -> Language {
        LanguageRegistry::get().default_language().language
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Language::English => 0,
            Language::Russian => 1,
            Language::Kazakh => 2,
        }
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().get_by_language(*self)
    }

    /// ISO 639-1 code (e.g., "en", "ru", "kk").
    pub fn code(&self) -> &'static str {
        self.config().code
    }

    /// Label shown on the language switcher.
    pub fn label(&self) -> &'static str {
        self.config().label
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
