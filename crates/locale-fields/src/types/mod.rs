mod field_set;
mod plural_category;

pub use field_set::FieldSet;
pub use plural_category::{PLURAL_CATEGORIES, PluralCategory};
