//! Language registry: Single source of truth for all supported languages.
//!
//! The set of languages is closed. Each entry carries the metadata the
//! language switcher needs (short label, English and native names) and marks
//! the one language the site starts in.

use crate::i18n::Language;

/// Configuration for a supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// ISO 639-1 language code (e.g., "en", "ru", "kk")
    pub code: &'static str,

    /// Short label rendered on the switcher control (e.g., "EN", "KZ")
    pub label: &'static str,

    /// English name of the language (e.g., "English", "Kazakh")
    pub name: &'static str,

    /// Native name of the language (e.g., "Русский", "Қазақша")
    pub native_name: &'static str,

    /// Whether this is the language the site starts in (exactly one is true)
    pub is_default: bool,
}

static LANGUAGES: [LanguageConfig; 3] = [
    LanguageConfig {
        language: Language::English,
        code: "en",
        label: "EN",
        name: "English",
        native_name: "English",
        is_default: true,
    },
    LanguageConfig {
        language: Language::Russian,
        code: "ru",
        label: "RU",
        name: "Russian",
        native_name: "Русский",
        is_default: false,
    },
    LanguageConfig {
        language: Language::Kazakh,
        code: "kk",
        label: "KZ",
        name: "Kazakh",
        native_name: "Қазақша",
        is_default: false,
    },
];

/// Global language registry.
///
/// Immutable for the life of the process. Entries are ordered the way the
/// language switcher displays them.
pub struct LanguageRegistry {
    languages: &'static [LanguageConfig],
}

static REGISTRY: LanguageRegistry = LanguageRegistry {
    languages: &LANGUAGES,
};

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        &REGISTRY
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the code is not in the supported set
    pub fn get_by_code(&self, code: &str) -> Option<&'static LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the configuration entry for a language.
    pub fn get_by_language(&self, language: Language) -> &'static LanguageConfig {
        // Entries are declared in enum order.
        &self.languages[language.index()]
    }

    /// Get all languages in switcher order.
    pub fn list_all(&self) -> &'static [LanguageConfig] {
        self.languages
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not mark exactly one default language
    /// (this indicates a configuration error).
    pub fn default_language(&self) -> &'static LanguageConfig {
        let defaults: Vec<_> = self.languages.iter().filter(|lang| lang.is_default).collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_russian() {
        let config = LanguageRegistry::get()
            .get_by_code("ru")
            .expect("ru should be registered");

        assert_eq!(config.language, Language::Russian);
        assert_eq!(config.label, "RU");
        assert_eq!(config.native_name, "Русский");
        assert!(!config.is_default);
    }

    #[test]
    fn test_kazakh_label_differs_from_code() {
        let config = LanguageRegistry::get()
            .get_by_code("kk")
            .expect("kk should be registered");

        assert_eq!(config.label, "KZ");
        assert_eq!(config.name, "Kazakh");
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("es").is_none());
        assert!(LanguageRegistry::get().get_by_code("").is_none());
    }

    #[test]
    fn test_get_by_language_matches_enum_order() {
        let registry = LanguageRegistry::get();
        for language in Language::ALL {
            assert_eq!(registry.get_by_language(language).language, language);
        }
    }

    #[test]
    fn test_list_all_switcher_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(codes, vec!["en", "ru", "kk"]);
    }

    #[test]
    fn test_default_language_is_english() {
        let config = LanguageRegistry::get().default_language();

        assert_eq!(config.code, "en");
        assert!(config.is_default);
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("kk"));
        assert!(!registry.is_supported("KK"));
        assert!(!registry.is_supported("fr"));
    }
}
