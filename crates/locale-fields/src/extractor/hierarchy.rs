//! Ancestor chain resolution for locales.
//!
//! A resolver turns a locale into its chain of ancestors, most general
//! first and the locale itself last. Resolvers must be deterministic: the
//! extractor relies on an ancestor's own chain being a prefix of its
//! descendants' chains when it reuses cached ancestors.

use std::collections::{BTreeSet, HashMap};

use crate::extractor::error::HierarchyError;

/// Resolves the ancestor chain of a locale.
pub trait HierarchyResolver {
    /// Return the chain for `locale`, most general first, ending with
    /// `locale` itself.
    fn resolve(&self, locale: &str) -> Result<Vec<String>, HierarchyError>;
}

impl<F> HierarchyResolver for F
where
    F: Fn(&str) -> Result<Vec<String>, HierarchyError>,
{
    fn resolve(&self, locale: &str) -> Result<Vec<String>, HierarchyError> {
        self(locale)
    }
}

/// Default resolver: each subtag prefix of the identifier is a parent.
///
/// Identifiers are opaque: anything that is not `-` or `_` delimited, such
/// as `root`, is its own single-member chain. Members keep the caller's
/// spelling so they can be matched against available locales verbatim.
///
/// # Example
///
/// ```
/// use locale_fields::{HierarchyResolver, SubtagHierarchy};
///
/// let chain = SubtagHierarchy.resolve("en-GB-oxendict").unwrap();
/// assert_eq!(chain, vec!["en", "en-GB", "en-GB-oxendict"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtagHierarchy;

impl HierarchyResolver for SubtagHierarchy {
    fn resolve(&self, locale: &str) -> Result<Vec<String>, HierarchyError> {
        let mut chain = vec![locale.to_string()];
        let mut current = locale;
        while let Some(parent) = truncate_parent(current) {
            chain.push(parent.to_string());
            current = parent;
        }
        chain.reverse();
        Ok(chain)
    }
}

/// Resolver driven by an explicit parent table.
///
/// Locales with a registered parent follow it; all others fall back to
/// dropping their last subtag. This covers parent overrides such as
/// `en-150 -> en-001 -> en` that truncation alone cannot express.
///
/// # Example
///
/// ```
/// use locale_fields::{ExplicitHierarchy, HierarchyResolver};
///
/// let resolver = ExplicitHierarchy::new()
///     .with_parent("en-150", "en-001")
///     .with_parent("en-001", "en");
///
/// let chain = resolver.resolve("en-150").unwrap();
/// assert_eq!(chain, vec!["en", "en-001", "en-150"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExplicitHierarchy {
    parents: HashMap<String, String>,
}

impl ExplicitHierarchy {
    /// Create a resolver with no parent overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `parent` as the parent of `locale`.
    pub fn with_parent(mut self, locale: impl Into<String>, parent: impl Into<String>) -> Self {
        self.parents.insert(locale.into(), parent.into());
        self
    }

    /// The parent of `locale`, if it has one.
    pub fn parent_of<'a>(&'a self, locale: &'a str) -> Option<&'a str> {
        self.parents
            .get(locale)
            .map(String::as_str)
            .or_else(|| truncate_parent(locale))
    }
}

impl HierarchyResolver for ExplicitHierarchy {
    fn resolve(&self, locale: &str) -> Result<Vec<String>, HierarchyError> {
        let mut chain = vec![locale.to_string()];
        let mut seen = BTreeSet::from([locale]);
        let mut current = locale;

        while let Some(parent) = self.parent_of(current) {
            chain.push(parent.to_string());
            if !seen.insert(parent) {
                chain.reverse();
                return Err(HierarchyError::Cycle { chain });
            }
            current = parent;
        }

        chain.reverse();
        Ok(chain)
    }
}

/// Drop the last `-` or `_` delimited subtag.
fn truncate_parent(locale: &str) -> Option<&str> {
    locale
        .rfind(['-', '_'])
        .map(|index| &locale[..index])
        .filter(|parent| !parent.is_empty())
}
