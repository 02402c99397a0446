//! Thread-safe wrapper around [`FieldExtractor`].

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use crate::extractor::error::ExtractError;
use crate::extractor::field_extractor::FieldExtractor;
use crate::extractor::source::FieldSource;
use crate::types::FieldSet;

/// A [`FieldExtractor`] behind a mutex.
///
/// Each `extract` call holds the lock for its whole check-then-populate
/// sequence, so concurrent callers never load the same locale twice.
/// Results are the same as calling the inner extractor sequentially.
pub struct SharedExtractor<S: FieldSource> {
    inner: Mutex<FieldExtractor<S>>,
}

impl<S: FieldSource> SharedExtractor<S> {
    /// Wrap an extractor.
    pub fn new(extractor: FieldExtractor<S>) -> Self {
        Self {
            inner: Mutex::new(extractor),
        }
    }

    /// Extract the minimal field sets for `locales`.
    ///
    /// See [`FieldExtractor::extract`].
    pub fn extract<I>(
        &self,
        locales: I,
    ) -> Result<BTreeMap<String, FieldSet<S::Value>>, ExtractError<S::Error>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.with_extractor(|extractor| extractor.extract(locales))
    }

    /// Run `f` with exclusive access to the extractor.
    pub fn with_extractor<T>(&self, f: impl FnOnce(&mut FieldExtractor<S>) -> T) -> T {
        // A panic inside a source leaves only fully inserted cache entries.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Unwrap the inner extractor.
    pub fn into_inner(self) -> FieldExtractor<S> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: FieldSource> From<FieldExtractor<S>> for SharedExtractor<S> {
    fn from(extractor: FieldExtractor<S>) -> Self {
        Self::new(extractor)
    }
}
