//! Field deduplication across a locale hierarchy.

use crate::types::FieldSet;

/// Strip every field that a locale inherits unchanged from its ancestors.
///
/// `hierarchy` holds one field set per locale, ordered most general first.
/// The result has the same length and order. The first entry is returned
/// as is. Every later entry keeps only the fields whose value differs from
/// the merge of all entries before it; a field absent from that merge is
/// always kept.
///
/// Merging the result left to right reproduces the merge of the input, so
/// no information is lost.
///
/// # Example
///
/// ```
/// use locale_fields::{FieldSet, dedupe_hierarchy};
///
/// let en: FieldSet<i32> = [("a", 1), ("b", 2)].into_iter().collect();
/// let en_gb: FieldSet<i32> = [("a", 1), ("b", 3)].into_iter().collect();
/// let oxendict: FieldSet<i32> = [("a", 1), ("b", 3), ("c", 4)].into_iter().collect();
///
/// let deduped = dedupe_hierarchy(&[en.clone(), en_gb, oxendict]);
/// assert_eq!(deduped[0], en);
/// assert_eq!(deduped[1].names().collect::<Vec<_>>(), vec!["b"]);
/// assert_eq!(deduped[2].names().collect::<Vec<_>>(), vec!["c"]);
/// ```
pub fn dedupe_hierarchy<V>(hierarchy: &[FieldSet<V>]) -> Vec<FieldSet<V>>
where
    V: Clone + PartialEq,
{
    let mut inherited: FieldSet<V> = FieldSet::new();
    let mut deduped = Vec::with_capacity(hierarchy.len());

    for fields in hierarchy {
        deduped.push(own_fields(&inherited, fields));
        inherited.merge_from(fields);
    }

    deduped
}

/// The fields of `fields` that are not inherited unchanged from `inherited`.
pub(crate) fn own_fields<V>(inherited: &FieldSet<V>, fields: &FieldSet<V>) -> FieldSet<V>
where
    V: Clone + PartialEq,
{
    fields
        .iter()
        .filter(|(name, value)| inherited.get(name) != Some(*value))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Merge a hierarchy of field sets left to right, later entries winning.
///
/// This is the inverse of [`dedupe_hierarchy`]: merging a deduplicated
/// hierarchy yields the same fields as merging the raw one.
pub fn merge_hierarchy<V: Clone>(hierarchy: &[FieldSet<V>]) -> FieldSet<V> {
    hierarchy.iter().fold(FieldSet::new(), |mut merged, fields| {
        merged.merge_from(fields);
        merged
    })
}
