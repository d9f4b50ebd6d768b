//! Translation store: the nested string catalog of every supported language.
//!
//! Catalogs are JSON objects whose values are either strings (leaves) or
//! nested objects (sub-trees). They are parsed once, validated, and never
//! mutated afterwards.

use crate::i18n::Language;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

/// One node of a translation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    Leaf(String),
    Tree(TranslationTree),
}

/// Children of a tree node, keyed by path segment.
pub type TranslationTree = BTreeMap<String, TranslationNode>;

/// Outcome of walking a dotted path through one language's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The path ends at a leaf string.
    Found(&'a str),
    /// Some segment of the path does not exist.
    Missing,
    /// The path ends at a sub-tree rather than a leaf.
    NotLeaf,
}

/// Errors raised while loading catalogs. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog for '{language}' is not valid JSON: {source}")]
    Parse {
        language: Language,
        source: serde_json::Error,
    },

    #[error("Catalog for '{language}' must be a JSON object at the root")]
    RootNotObject { language: Language },

    #[error("Catalog for '{language}' has an unsupported value at '{path}': expected a string or an object")]
    InvalidValue { language: Language, path: String },

    #[error("Catalog for '{language}' has an invalid key '{key}' at '{path}'")]
    InvalidKey {
        language: Language,
        key: String,
        path: String,
    },

    #[error("No catalog for language '{0}'")]
    MissingLanguage(Language),

    #[error("Duplicate catalog for language '{0}'")]
    DuplicateLanguage(Language),
}

static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

fn key_regex() -> &'static Regex {
    KEY_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("valid key regex"))
}

const BUILTIN_SOURCES: [(Language, &str); 3] = [
    (Language::English, include_str!("../../locales/en.json")),
    (Language::Russian, include_str!("../../locales/ru.json")),
    (Language::Kazakh, include_str!("../../locales/kk.json")),
];

/// Read-only catalog holding one tree per supported language.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    // Indexed by `Language::index`; every slot is filled at construction.
    trees: Vec<TranslationTree>,
}

impl TranslationStore {
    /// Load the catalogs compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_sources(BUILTIN_SOURCES)
    }

    /// Parse one JSON catalog per language.
    ///
    /// Every supported language must be present exactly once.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (Language, &'a str)>,
    {
        let mut trees = BTreeMap::new();

        for (language, source) in sources {
            let value: Value = serde_json::from_str(source)
                .map_err(|source| CatalogError::Parse { language, source })?;
            let tree = parse_root(language, value)?;
            if trees.insert(language, tree).is_some() {
                return Err(CatalogError::DuplicateLanguage(language));
            }
        }

        Self::from_trees(trees)
    }

    /// Build a store from already-constructed trees.
    pub fn from_trees(mut trees: BTreeMap<Language, TranslationTree>) -> Result<Self, CatalogError> {
        let mut ordered = Vec::with_capacity(Language::ALL.len());
        for language in Language::ALL {
            let tree = trees
                .remove(&language)
                .ok_or(CatalogError::MissingLanguage(language))?;
            ordered.push(tree);
        }

        Ok(Self { trees: ordered })
    }

    /// The full tree of one language.
    pub fn tree(&self, language: Language) -> &TranslationTree {
        &self.trees[language.index()]
    }

    /// Walk `path` segment by segment through the tree of `language`.
    pub fn lookup<'a>(&'a self, language: Language, path: &str) -> Lookup<'a> {
        let mut children = self.tree(language);
        let mut segments = path.split('.').peekable();

        while let Some(key) = segments.next() {
            let Some(node) = children.get(key) else {
                return Lookup::Missing;
            };

            match node {
                TranslationNode::Tree(next) => {
                    if segments.peek().is_none() {
                        return Lookup::NotLeaf;
                    }
                    children = next;
                }
                TranslationNode::Leaf(value) => {
                    // A leaf with segments left over means the rest of the path is absent.
                    return if segments.peek().is_none() {
                        Lookup::Found(value)
                    } else {
                        Lookup::Missing
                    };
                }
            }
        }

        Lookup::Missing
    }

    /// Dotted paths of every leaf in one language, sorted.
    pub fn leaf_paths(&self, language: Language) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(self.tree(language), "", &mut paths);
        paths
    }

    /// Dotted paths of every sub-tree in one language, sorted.
    pub fn tree_paths(&self, language: Language) -> Vec<String> {
        let mut paths = Vec::new();
        collect_tree_paths(self.tree(language), "", &mut paths);
        paths
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn collect_leaf_paths(tree: &TranslationTree, prefix: &str, out: &mut Vec<String>) {
    for (key, node) in tree {
        let path = join_path(prefix, key);
        match node {
            TranslationNode::Leaf(_) => out.push(path),
            TranslationNode::Tree(children) => collect_leaf_paths(children, &path, out),
        }
    }
}

fn collect_tree_paths(tree: &TranslationTree, prefix: &str, out: &mut Vec<String>) {
    for (key, node) in tree {
        if let TranslationNode::Tree(children) = node {
            let path = join_path(prefix, key);
            out.push(path.clone());
            collect_tree_paths(children, &path, out);
        }
    }
}

fn parse_root(language: Language, value: Value) -> Result<TranslationTree, CatalogError> {
    match value {
        Value::Object(map) => parse_object(language, map, ""),
        _ => Err(CatalogError::RootNotObject { language }),
    }
}

fn parse_object(
    language: Language,
    map: serde_json::Map<String, Value>,
    prefix: &str,
) -> Result<TranslationTree, CatalogError> {
    let mut tree = TranslationTree::new();

    for (key, value) in map {
        if !key_regex().is_match(&key) {
            return Err(CatalogError::InvalidKey {
                language,
                path: if prefix.is_empty() { "<root>".to_string() } else { prefix.to_string() },
                key,
            });
        }

        let path = join_path(prefix, &key);
        let node = match value {
            Value::String(text) => TranslationNode::Leaf(text),
            Value::Object(children) => TranslationNode::Tree(parse_object(language, children, &path)?),
            _ => return Err(CatalogError::InvalidValue { language, path }),
        };
        tree.insert(key, node);
    }

    Ok(tree)
}
