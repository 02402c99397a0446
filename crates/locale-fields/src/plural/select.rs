//! CLDR plural category resolution.
//!
//! Plural rules are cached per thread per language subtag so that
//! `PluralRules` instances are not rebuilt on every call. Regional and
//! extension subtags are ignored: `en`, `en-US` and `en-GB-u-ca-gregory`
//! share one entry.

use std::cell::RefCell;
use std::collections::BTreeMap;

use icu_locale_core::Locale;
use icu_locale_core::subtags::Language;
use icu_plurals::{PluralRuleType, PluralRules};

use crate::plural::collapse::{OTHER, PluralRuleMap};
use crate::plural::error::PluralError;
use crate::types::PluralCategory;

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language subtag.
    static PLURAL_RULES_CACHE: RefCell<BTreeMap<Language, PluralRules>> = const { RefCell::new(BTreeMap::new()) };
}

/// Parse the language subtag out of a tag such as `pt-BR`.
fn parse_language(language: &str) -> Result<Language, PluralError> {
    Locale::try_from_str(language)
        .map(|locale| locale.id.language)
        .map_err(|e| PluralError::InvalidLanguage {
            language: language.to_string(),
            reason: e.to_string(),
        })
}

fn build_rules(language: Language) -> Result<PluralRules, PluralError> {
    PluralRules::try_new(Locale::from(language).into(), PluralRuleType::Cardinal.into()).map_err(
        |e| PluralError::Rules {
            language: language.to_string(),
            reason: e.to_string(),
        },
    )
}

/// Get the CLDR cardinal plural category of `n` in `language`.
///
/// # Example
///
/// ```
/// use locale_fields::{PluralCategory, plural_category};
///
/// assert_eq!(plural_category("en", 1).unwrap(), PluralCategory::One);
/// assert_eq!(plural_category("en", 2).unwrap(), PluralCategory::Other);
/// assert_eq!(plural_category("ru", 5).unwrap(), PluralCategory::Many);
/// ```
pub fn plural_category(language: &str, n: i64) -> Result<PluralCategory, PluralError> {
    let language = parse_language(language)?;
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(rules) = cache.get(&language) {
            return Ok(rules.category_for(n).into());
        }
        let rules = build_rules(language)?;
        let category = rules.category_for(n).into();
        cache.insert(language, rules);
        Ok(category)
    })
}

/// Pick the value for `n` from a plural map, falling back to `other` when
/// the map has no entry for the resolved category.
///
/// Collapsed maps rely on this fallback: a category dropped because it
/// repeated `other` resolves to `other` again.
pub fn select_plural<'a, T>(
    rules: &'a PluralRuleMap<T>,
    language: &str,
    n: i64,
) -> Result<&'a T, PluralError> {
    let category = plural_category(language, n)?;
    rules
        .get(category.as_str())
        .or_else(|| rules.get(OTHER))
        .ok_or(PluralError::MissingOther)
}
