//! Translation seam between canonical data and display strings.
//!
//! Everything that shows a label to the user goes through [`Translate`].
//! A missing entry is never an error: string lookups echo the key back,
//! list lookups return `None`.

mod catalog;

pub use catalog::{Catalog, CatalogEntry, LocaleTranslator};

/// Key-based translation capability
pub trait Translate {
    /// Translate `key`, returning `key` itself when no entry exists
    fn translate(&self, key: &str) -> String;

    /// Translate `key` as a list of strings
    ///
    /// Returns `None` when the catalog has no list for the key.
    fn translate_list(&self, _key: &str) -> Option<Vec<String>> {
        None
    }
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Translator with no entries at all
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translate for Identity {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// True when `translated` is an actual translation of `key`
pub(crate) fn is_translated(key: &str, translated: &str) -> bool {
    translated != key
}
