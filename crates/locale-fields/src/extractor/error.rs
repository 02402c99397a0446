//! Error types for hierarchy resolution and field extraction.

use thiserror::Error;

/// Errors raised while resolving a locale's ancestor chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// A parent table leads back to a locale already in the chain.
    #[error("cyclic parent chain: {}", chain.join(" -> "))]
    Cycle { chain: Vec<String> },
}

/// An error surfaced by [`FieldExtractor::extract`](crate::FieldExtractor::extract).
///
/// Failures of the field source are carried unchanged in `Source`.
#[derive(Debug, Error)]
pub enum ExtractError<E> {
    /// The field source failed to answer `has_data` or `load_fields`.
    #[error(transparent)]
    Source(E),

    /// The ancestor chain of a requested locale could not be resolved.
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}

impl<E> ExtractError<E> {
    /// The field source error, if that is what failed.
    pub fn source_error(&self) -> Option<&E> {
        match self {
            ExtractError::Source(e) => Some(e),
            ExtractError::Hierarchy(_) => None,
        }
    }
}
