//! Error types for plural maps and plural rules.

use thiserror::Error;

/// Errors from plural-map transforms and plural rule lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluralError {
    /// A plural map lacks the mandatory `other` entry.
    #[error("plural map has no 'other' entry")]
    MissingOther,

    /// A category name is not one of the recognized plural categories.
    #[error("unknown plural category '{name}'{}", format_suggestions(suggestions))]
    UnknownCategory {
        name: String,
        suggestions: Vec<String>,
    },

    /// The language tag could not be parsed.
    #[error("invalid language '{language}': {reason}")]
    InvalidLanguage { language: String, reason: String },

    /// Plural rules could not be loaded for the language.
    #[error("no plural rules for '{language}': {reason}")]
    Rules { language: String, reason: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}
