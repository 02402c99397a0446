use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// The data fields attributed to one locale at one level of specificity.
///
/// A `FieldSet` maps field names to values of any shape. Equality is
/// structural: two sets are equal when they hold the same names mapped to
/// values that compare equal under `V: PartialEq`, however deeply nested.
/// Iteration is ordered by field name.
///
/// # Example
///
/// ```
/// use locale_fields::FieldSet;
///
/// let mut fields: FieldSet<String> = FieldSet::new();
/// fields.insert("decimal", ".");
/// fields.insert("group", ",");
///
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields.get("group").map(String::as_str), Some(","));
/// assert_eq!(fields.names().collect::<Vec<_>>(), vec!["decimal", "group"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet<V>(BTreeMap<String, V>);

impl<V> Default for FieldSet<V> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<V> FieldSet<V> {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.0.get(name)
    }

    /// Set a field, returning its previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<V>) -> Option<V> {
        self.0.insert(name.into(), value.into())
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<V> {
        self.0.remove(name)
    }

    /// Check whether a field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the set has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate `(name, value)` pairs in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, V> {
        self.0.iter()
    }
}

impl<V: Clone> FieldSet<V> {
    /// Overlay `other` onto this set. Fields of `other` replace fields with
    /// the same name.
    pub fn merge_from(&mut self, other: &FieldSet<V>) {
        self.0
            .extend(other.0.iter().map(|(name, value)| (name.clone(), value.clone())));
    }
}

impl<V> From<BTreeMap<String, V>> for FieldSet<V> {
    fn from(map: BTreeMap<String, V>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for FieldSet<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for FieldSet<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl<V> IntoIterator for FieldSet<V> {
    type Item = (String, V);
    type IntoIter = btree_map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a FieldSet<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = btree_map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
