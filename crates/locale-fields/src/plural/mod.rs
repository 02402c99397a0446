//! Plural-category value maps.
//!
//! A plural map carries one value per plural category, with `other` as the
//! mandatory default. [`collapse_plural_rules`] reduces a map to the
//! categories that actually differ from `other`; [`select_plural`] reads a
//! (possibly collapsed) map back using CLDR plural rules.

mod collapse;
mod error;
mod select;

pub use collapse::{OTHER, PluralRuleMap, collapse_plural_rules, is_collapsed};
pub use error::PluralError;
pub use select::{plural_category, select_plural};
