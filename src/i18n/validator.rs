//! Catalog consistency validation.
//!
//! Every language should expose the same set of dotted paths. The resolver
//! tolerates divergence by echoing the path, so mismatches are reported as
//! warnings rather than errors; an empty leaf is an error because it would
//! render as nothing at all.

use crate::i18n::{Language, TranslationStore};
use std::collections::BTreeSet;
use tracing::warn;

/// Validation report containing errors and warnings about the catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make a string unusable
    pub errors: Vec<String>,

    /// Divergence the resolver can survive
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Emit every finding as a `warn!` diagnostic.
    pub fn log(&self) {
        for error in &self.errors {
            warn!("Catalog error: {}", error);
        }
        for warning in &self.warnings {
            warn!("Catalog warning: {}", warning);
        }
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog shape across languages.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Compare every language against the default language.
    ///
    /// This checks that:
    /// - each language has exactly the leaf paths of the default language
    /// - no path is a leaf in one language and a sub-tree in another
    /// - no leaf is empty or whitespace only
    pub fn validate(store: &TranslationStore) -> ValidationReport {
        let mut report = ValidationReport::new();
        let reference = Language::default_language();
        let reference_leaves: BTreeSet<String> = store.leaf_paths(reference).into_iter().collect();
        let reference_trees: BTreeSet<String> = store.tree_paths(reference).into_iter().collect();

        for language in Language::ALL {
            let leaves: BTreeSet<String> = store.leaf_paths(language).into_iter().collect();

            Self::check_empty_leaves(store, language, &leaves, &mut report);

            if language == reference {
                continue;
            }

            let trees: BTreeSet<String> = store.tree_paths(language).into_iter().collect();

            for path in reference_leaves.difference(&leaves) {
                if trees.contains(path) {
                    report.warnings.push(format!(
                        "'{}' is a string in '{}' but a group in '{}'",
                        path, reference, language
                    ));
                } else {
                    report
                        .warnings
                        .push(format!("'{}' is missing from '{}'", path, language));
                }
            }

            for path in leaves.difference(&reference_leaves) {
                if reference_trees.contains(path) {
                    report.warnings.push(format!(
                        "'{}' is a group in '{}' but a string in '{}'",
                        path, reference, language
                    ));
                } else {
                    report.warnings.push(format!(
                        "'{}' exists in '{}' but not in '{}'",
                        path, language, reference
                    ));
                }
            }
        }

        report
    }

    fn check_empty_leaves(
        store: &TranslationStore,
        language: Language,
        leaves: &BTreeSet<String>,
        report: &mut ValidationReport,
    ) {
        for path in leaves {
            if let crate::i18n::Lookup::Found(value) = store.lookup(language, path) {
                if value.trim().is_empty() {
                    report
                        .errors
                        .push(format!("'{}' is empty in '{}'", path, language));
                }
            }
        }
    }
}
