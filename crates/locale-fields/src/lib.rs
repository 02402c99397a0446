//! Minimal per-locale field sets.
//!
//! Locale data catalogs repeat most of a language's fields in every
//! regional variant. This crate keeps, for each locale, only the fields
//! that differ from its ancestors, and memoizes the result per locale. It
//! also collapses plural-category maps down to the categories whose value
//! differs from `other`.

pub mod extractor;
pub mod plural;
mod suggest;
pub mod types;

pub use extractor::{
    BoxedResolver, CatalogError, ExplicitHierarchy, ExtractError, FieldExtractor, FieldSource,
    FnSource, HierarchyError, HierarchyResolver, MemoryCatalog, SharedExtractor, SubtagHierarchy,
    build_extractor, dedupe_hierarchy, merge_hierarchy,
};
pub use plural::{
    OTHER, PluralError, PluralRuleMap, collapse_plural_rules, is_collapsed, plural_category,
    select_plural,
};
pub use suggest::compute_suggestions;
pub use types::{FieldSet, PLURAL_CATEGORIES, PluralCategory};
