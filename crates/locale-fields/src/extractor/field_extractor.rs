//! Memoizing per-locale field extraction.

use std::collections::{BTreeMap, BTreeSet};

use bon::Builder;
use tracing::{debug, trace};

use crate::extractor::dedupe::own_fields;
use crate::extractor::error::ExtractError;
use crate::extractor::hierarchy::{HierarchyResolver, SubtagHierarchy};
use crate::extractor::source::{FieldSource, FnSource};
use crate::types::FieldSet;

/// A resolver usable from any thread.
pub type BoxedResolver = Box<dyn HierarchyResolver + Send + Sync>;

/// Extracts the minimal field set of each locale and memoizes it.
///
/// For every requested locale the extractor resolves the ancestor chain,
/// keeps the chain members that are available and have data, loads their
/// raw fields and strips everything each member inherits unchanged from
/// the members before it. The resulting field sets are cached per locale
/// for the lifetime of the extractor, ancestors included, so a locale is
/// loaded from the source at most once.
///
/// The cache is plain mutable state behind `&mut self`. Wrap the extractor
/// in a [`SharedExtractor`](crate::SharedExtractor) to call it from several
/// threads.
///
/// # Example
///
/// ```
/// use locale_fields::{FieldExtractor, FieldSet, MemoryCatalog};
///
/// let catalog: MemoryCatalog<i32> = [
///     ("en", [("a", 1), ("b", 2)].into_iter().collect::<FieldSet<_>>()),
///     ("en-GB", [("a", 1), ("b", 3)].into_iter().collect::<FieldSet<_>>()),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut extractor = FieldExtractor::builder()
///     .source(catalog)
///     .available_locales(["en".to_string(), "en-GB".to_string()])
///     .build();
///
/// let fields = extractor.extract(["en-GB"]).unwrap();
/// assert_eq!(fields["en"].len(), 2);
/// assert_eq!(fields["en-GB"].names().collect::<Vec<_>>(), vec!["b"]);
/// ```
#[derive(Builder)]
pub struct FieldExtractor<S: FieldSource> {
    /// Backing catalog of raw fields.
    source: S,

    /// Locales that may appear in an ancestor chain.
    #[builder(with = FromIterator::from_iter)]
    available_locales: BTreeSet<String>,

    /// Ancestor chain resolution, by subtag truncation unless overridden.
    #[builder(default = Box::new(SubtagHierarchy) as BoxedResolver)]
    resolver: BoxedResolver,

    /// Minimal field set per locale. Entries may be empty.
    #[builder(skip)]
    cache: BTreeMap<String, FieldSet<S::Value>>,

    /// Filtered chain of every cached locale, ending with the locale.
    #[builder(skip)]
    chains: BTreeMap<String, Vec<String>>,
}

/// Build an extractor from a loader closure, a "has data" predicate and
/// the list of available locales.
///
/// Ancestor chains are resolved with [`SubtagHierarchy`].
pub fn build_extractor<L, P, V, E>(
    load: L,
    has_data: P,
    available_locales: impl IntoIterator<Item = impl Into<String>>,
) -> FieldExtractor<FnSource<L, P, V, E>>
where
    L: Fn(&str) -> Result<FieldSet<V>, E>,
    P: Fn(&str) -> Result<bool, E>,
    V: Clone + PartialEq,
{
    FieldExtractor::builder()
        .source(FnSource::new(load, has_data))
        .available_locales(available_locales.into_iter().map(Into::into))
        .build()
}

impl<S: FieldSource> FieldExtractor<S> {
    /// Extract the minimal field sets for `locales`.
    ///
    /// The result holds each requested locale and each member of its
    /// ancestor chain, mapped to its minimal field set. Locales without data,
    /// locales outside the available list and locales whose minimal field
    /// set is empty are left out.
    ///
    /// The first source or resolver failure is returned as is. Locales
    /// processed before the failure stay cached; the failing locale is not
    /// cached and is retried on the next call.
    pub fn extract<I>(
        &mut self,
        locales: I,
    ) -> Result<BTreeMap<String, FieldSet<S::Value>>, ExtractError<S::Error>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut touched = BTreeSet::new();
        for locale in locales {
            touched.extend(self.populate(locale.as_ref())?);
        }

        Ok(touched
            .into_iter()
            .filter_map(|locale| {
                let fields = self.cache.get(&locale).filter(|f| !f.is_empty())?;
                Some((locale, fields.clone()))
            })
            .collect())
    }

    /// Cached minimal field set of a locale, empty sets included.
    pub fn cached(&self, locale: &str) -> Option<&FieldSet<S::Value>> {
        self.cache.get(locale)
    }

    /// Locales currently in the cache, in order.
    pub fn cached_locales(&self) -> impl Iterator<Item = &str> {
        self.cache.keys().map(String::as_str)
    }

    /// Drop every cached field set.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.chains.clear();
    }

    /// Whether `locale` is in the available list.
    pub fn is_available(&self, locale: &str) -> bool {
        self.available_locales.contains(locale)
    }

    /// The backing field source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Populate the cache for one locale and return the chain members whose
    /// entries belong in the result.
    fn populate(&mut self, locale: &str) -> Result<Vec<String>, ExtractError<S::Error>> {
        if let Some(chain) = self.chains.get(locale) {
            debug!(locale, "field cache hit");
            return Ok(chain.clone());
        }

        if !self.source.has_data(locale).map_err(ExtractError::Source)? {
            debug!(locale, "no data for locale, skipping");
            return Ok(Vec::new());
        }

        let chain = self.filtered_chain(locale)?;
        if chain.is_empty() {
            debug!(locale, "no available locale in ancestor chain");
            return Ok(chain);
        }
        debug!(locale, chain = ?chain, "populating field cache");

        let mut inherited = FieldSet::new();
        for (depth, member) in chain.iter().enumerate() {
            if let Some(cached) = self.cache.get(member) {
                trace!(locale = member.as_str(), "reusing cached ancestor");
                inherited.merge_from(cached);
                continue;
            }

            trace!(locale = member.as_str(), "loading fields");
            let raw = self
                .source
                .load_fields(member)
                .map_err(ExtractError::Source)?;
            let own = own_fields(&inherited, &raw);
            inherited.merge_from(&raw);
            self.cache.insert(member.clone(), own);
            self.chains.insert(member.clone(), chain[..=depth].to_vec());
        }

        Ok(chain)
    }

    /// The ancestor chain of `locale`, restricted to available locales that
    /// are cached or have data.
    fn filtered_chain(&self, locale: &str) -> Result<Vec<String>, ExtractError<S::Error>> {
        let mut chain = Vec::new();
        for member in self.resolver.resolve(locale)? {
            if !self.available_locales.contains(&member) {
                continue;
            }
            if self.cache.contains_key(&member)
                || member == locale
                || self.source.has_data(&member).map_err(ExtractError::Source)?
            {
                chain.push(member);
            }
        }
        Ok(chain)
    }
}
