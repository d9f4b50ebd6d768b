//! Internationalization (i18n) module for multi-language support.
//!
//! All user-facing text of the site lives in per-language JSON catalogs
//! embedded in the binary. Views never hold literal strings; they ask the
//! `Localizer` for a dotted path and get the string in the current language.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: The closed `Language` enum
//! - `catalog`: Parsed, immutable translation trees (`TranslationStore`)
//! - `validator`: Cross-language catalog consistency checks
//! - `metrics`: Lookup counters
//! - `resolver`: `Localizer`, the current-language holder and lookup
//!
//! # Example
//!
//! ```
//! use ai_impact::i18n::{Language, Localizer};
//!
//! let i18n = Localizer::builtin().unwrap();
//! assert_eq!(i18n.t("nav.economy"), "Economy");
//!
//! i18n.set_language(Language::Russian);
//! assert_eq!(i18n.t("nav.economy"), "Экономика");
//!
//! // Unknown keys render as themselves.
//! assert_eq!(i18n.t("nav.unknown"), "nav.unknown");
//! ```

mod catalog;
mod language;
mod metrics;
mod registry;
mod resolver;
mod validator;

pub use catalog::{CatalogError, Lookup, TranslationNode, TranslationStore, TranslationTree};
pub use language::{I18nError, Language};
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::Localizer;
pub use validator::{CatalogValidator, ValidationReport};
