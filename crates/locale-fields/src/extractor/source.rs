//! Field sources: where raw per-locale fields come from.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::FieldSet;

/// A backing catalog of raw per-locale fields.
///
/// `load_fields` may be expensive but must be deterministic for a given
/// locale. The extractor calls it at most once per locale it caches.
pub trait FieldSource {
    /// Value type of the fields.
    type Value: Clone + PartialEq;

    /// Failure raised by the source, passed through to extractor callers.
    type Error;

    /// Whether the catalog has any data for `locale`.
    fn has_data(&self, locale: &str) -> Result<bool, Self::Error>;

    /// Load the raw fields of `locale`.
    fn load_fields(&self, locale: &str) -> Result<FieldSet<Self::Value>, Self::Error>;
}

/// A [`FieldSource`] assembled from a loader closure and a predicate closure.
pub struct FnSource<L, P, V, E> {
    load: L,
    has_data: P,
    _types: PhantomData<fn() -> (V, E)>,
}

impl<L, P, V, E> FnSource<L, P, V, E>
where
    L: Fn(&str) -> Result<FieldSet<V>, E>,
    P: Fn(&str) -> Result<bool, E>,
{
    /// Wrap a loader and a "has data" predicate.
    pub fn new(load: L, has_data: P) -> Self {
        Self {
            load,
            has_data,
            _types: PhantomData,
        }
    }
}

impl<L, P, V, E> FieldSource for FnSource<L, P, V, E>
where
    L: Fn(&str) -> Result<FieldSet<V>, E>,
    P: Fn(&str) -> Result<bool, E>,
    V: Clone + PartialEq,
{
    type Value = V;
    type Error = E;

    fn has_data(&self, locale: &str) -> Result<bool, E> {
        (self.has_data)(locale)
    }

    fn load_fields(&self, locale: &str) -> Result<FieldSet<V>, E> {
        (self.load)(locale)
    }
}

/// Errors from [`MemoryCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Fields were requested for a locale the catalog does not hold.
    #[error("no fields for locale '{locale}'")]
    MissingLocale { locale: String },
}

/// An in-memory catalog keyed by locale.
///
/// A locale has data exactly when the catalog holds an entry for it, even
/// an empty one.
///
/// # Example
///
/// ```
/// use locale_fields::{FieldSet, FieldSource, MemoryCatalog};
///
/// let mut catalog = MemoryCatalog::new();
/// catalog.insert("en", [("decimal", 46)].into_iter().collect::<FieldSet<u8>>());
///
/// assert!(catalog.has_data("en").unwrap());
/// assert!(!catalog.has_data("fr").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryCatalog<V> {
    locales: BTreeMap<String, FieldSet<V>>,
}

impl<V> Default for MemoryCatalog<V> {
    fn default() -> Self {
        Self {
            locales: BTreeMap::new(),
        }
    }
}

impl<V> MemoryCatalog<V> {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the fields of a locale, replacing any previous entry.
    pub fn insert(&mut self, locale: impl Into<String>, fields: FieldSet<V>) {
        self.locales.insert(locale.into(), fields);
    }

    /// Locales held by the catalog, in order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Raw fields of a locale.
    pub fn get(&self, locale: &str) -> Option<&FieldSet<V>> {
        self.locales.get(locale)
    }

    /// Number of locales held.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// True when the catalog holds no locales.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl<V, L: Into<String>> FromIterator<(L, FieldSet<V>)> for MemoryCatalog<V> {
    fn from_iter<I: IntoIterator<Item = (L, FieldSet<V>)>>(iter: I) -> Self {
        Self {
            locales: iter.into_iter().map(|(l, f)| (l.into(), f)).collect(),
        }
    }
}

impl<V: Clone + PartialEq> FieldSource for MemoryCatalog<V> {
    type Value = V;
    type Error = CatalogError;

    fn has_data(&self, locale: &str) -> Result<bool, CatalogError> {
        Ok(self.locales.contains_key(locale))
    }

    fn load_fields(&self, locale: &str) -> Result<FieldSet<V>, CatalogError> {
        self.locales
            .get(locale)
            .cloned()
            .ok_or_else(|| CatalogError::MissingLocale {
                locale: locale.to_string(),
            })
    }
}
