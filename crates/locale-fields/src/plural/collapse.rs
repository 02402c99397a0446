use std::collections::BTreeMap;

use crate::plural::error::PluralError;

/// Name of the mandatory fallback category.
pub const OTHER: &str = "other";

/// Values keyed by plural category name.
///
/// `other` is mandatory. Other keys are usually drawn from
/// [`PLURAL_CATEGORIES`](crate::PLURAL_CATEGORIES) but are not limited to it.
pub type PluralRuleMap<T> = BTreeMap<String, T>;

/// Drop every plural category whose value equals the `other` value.
///
/// The result holds `other` unchanged plus each category whose value
/// differs from it. The input is not modified.
///
/// # Errors
///
/// Returns [`PluralError::MissingOther`] when `rules` has no `other` entry.
///
/// # Example
///
/// ```
/// use locale_fields::{PluralRuleMap, collapse_plural_rules};
///
/// let rules: PluralRuleMap<&str> = [("other", "X"), ("one", "X"), ("few", "Y")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v))
///     .collect();
///
/// let collapsed = collapse_plural_rules(&rules).unwrap();
/// assert_eq!(collapsed.keys().collect::<Vec<_>>(), vec!["few", "other"]);
/// ```
pub fn collapse_plural_rules<T>(rules: &PluralRuleMap<T>) -> Result<PluralRuleMap<T>, PluralError>
where
    T: Clone + PartialEq,
{
    let other = rules.get(OTHER).ok_or(PluralError::MissingOther)?;

    Ok(rules
        .iter()
        .filter(|&(category, value)| category == OTHER || value != other)
        .map(|(category, value)| (category.clone(), value.clone()))
        .collect())
}

/// Whether `rules` is already collapsed: it has `other` and no category
/// repeats the `other` value.
pub fn is_collapsed<T: PartialEq>(rules: &PluralRuleMap<T>) -> bool {
    rules.get(OTHER).is_some_and(|other| {
        rules
            .iter()
            .all(|(category, value)| category == OTHER || value != other)
    })
}
