//! File-backed translation catalog
//!
//! One JSON file per locale (`<dir>/<locale>.json`). Nested objects are
//! flattened into dotted keys, so `{"categories": {"excavation": "..."}}`
//! is addressed as `categories.excavation`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ChantierError, Result};

use super::Translate;

/// A single catalog leaf
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEntry {
    Text(String),
    List(Vec<Value>),
}

impl CatalogEntry {
    /// Empty strings and lists not starting with a string count as missing
    fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::List(items) => !matches!(items.first(), Some(Value::String(_))),
        }
    }
}

/// Translation catalog with a locale fallback chain
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: HashMap<String, HashMap<String, CatalogEntry>>,
    fallback_chain: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.json` file in `dir` as a locale named after the file stem
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(ChantierError::CatalogDirNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut catalog = Self::new();
        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        for path in paths {
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!(path = %path.display(), "skipping catalog file with non UTF-8 name");
                continue;
            };
            let locale = locale.to_string();
            catalog.load_file(&locale, &path)?;
        }

        Ok(catalog)
    }

    /// Load one locale file
    pub fn load_file(&mut self, locale: &str, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content).map_err(|e| ChantierError::Json {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.add_locale_json(locale, &value);
        debug!(
            locale,
            path = %path.display(),
            entries = self.locales.get(locale).map_or(0, HashMap::len),
            "loaded catalog locale"
        );
        Ok(())
    }

    /// Merge a nested JSON document into `locale`
    pub fn add_locale_json(&mut self, locale: &str, value: &Value) {
        let entries = self.locales.entry(locale.to_string()).or_default();
        flatten_into(entries, String::new(), value);
    }

    /// Insert a single text entry
    pub fn insert(&mut self, locale: &str, key: impl Into<String>, value: impl Into<String>) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(key.into(), CatalogEntry::Text(value.into()));
    }

    /// Locales tried, in order, after the requested one
    pub fn set_fallback_chain(&mut self, chain: Vec<String>) {
        self.fallback_chain = chain;
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Registered locales, sorted
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Look up an entry in `locale`, then along the fallback chain
    pub fn get(&self, locale: &str, key: &str) -> Option<&CatalogEntry> {
        std::iter::once(locale)
            .chain(
                self.fallback_chain
                    .iter()
                    .map(String::as_str)
                    .filter(|l| *l != locale),
            )
            .find_map(|l| {
                self.locales
                    .get(l)
                    .and_then(|entries| entries.get(key))
                    .filter(|entry| !entry.is_blank())
            })
    }

    /// Keys from `reference_keys` that no locale in the chain provides
    pub fn missing_keys(&self, locale: &str, reference_keys: &[String]) -> Vec<String> {
        let mut missing: Vec<String> = reference_keys
            .iter()
            .filter(|key| self.get(locale, key).is_none())
            .cloned()
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }

    /// Borrowing translator bound to one locale
    pub fn translator<'a>(&'a self, locale: &'a str) -> LocaleTranslator<'a> {
        LocaleTranslator {
            catalog: self,
            locale,
        }
    }
}

fn flatten_into(entries: &mut HashMap<String, CatalogEntry>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten_into(entries, key, v);
            }
        }
        Value::String(s) if !prefix.is_empty() => {
            entries.insert(prefix, CatalogEntry::Text(s.clone()));
        }
        Value::Array(items) if !prefix.is_empty() => {
            entries.insert(prefix, CatalogEntry::List(items.clone()));
        }
        // numbers, booleans and null are not translations
        _ => {}
    }
}

/// [`Catalog`] view for a single locale
#[derive(Debug, Clone, Copy)]
pub struct LocaleTranslator<'a> {
    catalog: &'a Catalog,
    locale: &'a str,
}

impl LocaleTranslator<'_> {
    pub fn locale(&self) -> &str {
        self.locale
    }
}

impl Translate for LocaleTranslator<'_> {
    fn translate(&self, key: &str) -> String {
        match self.catalog.get(self.locale, key) {
            Some(CatalogEntry::Text(s)) if !s.is_empty() => s.clone(),
            _ => key.to_string(),
        }
    }

    fn translate_list(&self, key: &str) -> Option<Vec<String>> {
        let Some(CatalogEntry::List(items)) = self.catalog.get(self.locale, key) else {
            return None;
        };

        Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        )
    }
}
