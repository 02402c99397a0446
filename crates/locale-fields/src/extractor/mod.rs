//! Minimal per-locale field extraction.
//!
//! This module strips the fields a locale inherits unchanged from its
//! ancestors and memoizes the result per locale. The pieces are:
//! - [`dedupe_hierarchy`], the pure diff over one ancestor chain
//! - [`HierarchyResolver`] implementations that produce ancestor chains
//! - [`FieldSource`] implementations that load raw fields
//! - [`FieldExtractor`], which ties them together behind a cache

mod dedupe;
mod error;
mod field_extractor;
mod hierarchy;
mod shared;
mod source;

pub use dedupe::{dedupe_hierarchy, merge_hierarchy};
pub use error::{ExtractError, HierarchyError};
pub use field_extractor::{BoxedResolver, FieldExtractor, build_extractor};
pub use hierarchy::{ExplicitHierarchy, HierarchyResolver, SubtagHierarchy};
pub use shared::SharedExtractor;
pub use source::{CatalogError, FieldSource, FnSource, MemoryCatalog};
