use std::fmt;
use std::str::FromStr;

use icu_plurals::PluralCategory as IcuCategory;
use serde::{Deserialize, Serialize};

use crate::plural::PluralError;
use crate::suggest::compute_suggestions;

/// A CLDR plural category.
///
/// `Other` is the universal fallback: every plural map carries it, and a
/// category missing from a map resolves to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Other,
    Zero,
    One,
    Two,
    Few,
    Many,
}

/// Every recognized plural category in canonical order, `other` first.
///
/// Consumers that enumerate all categories use this order. It does not
/// restrict which keys may appear in a plural map.
pub const PLURAL_CATEGORIES: [PluralCategory; 6] = [
    PluralCategory::Other,
    PluralCategory::Zero,
    PluralCategory::One,
    PluralCategory::Two,
    PluralCategory::Few,
    PluralCategory::Many,
];

impl PluralCategory {
    /// The CLDR name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Other => "other",
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluralCategory {
    type Err = PluralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PLURAL_CATEGORIES
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| PluralError::UnknownCategory {
                name: s.to_string(),
                suggestions: compute_suggestions(
                    s,
                    PLURAL_CATEGORIES.iter().copied().map(PluralCategory::as_str),
                ),
            })
    }
}

impl From<IcuCategory> for PluralCategory {
    fn from(category: IcuCategory) -> Self {
        match category {
            IcuCategory::Zero => PluralCategory::Zero,
            IcuCategory::One => PluralCategory::One,
            IcuCategory::Two => PluralCategory::Two,
            IcuCategory::Few => PluralCategory::Few,
            IcuCategory::Many => PluralCategory::Many,
            IcuCategory::Other => PluralCategory::Other,
        }
    }
}
