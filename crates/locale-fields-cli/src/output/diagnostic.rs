//! Miette diagnostic wrapper for JSON parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for malformed JSON input.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid JSON: {message}")]
#[diagnostic(code(locale_fields::json))]
pub struct JsonDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl JsonDiagnostic {
    /// Create a diagnostic from a serde_json error with source context.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        let offset = byte_offset(content, err.line(), err.column());

        let help = if err.is_data() {
            Some("expected an object keyed by locale or name".to_string())
        } else {
            None
        };

        JsonDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help,
        }
    }
}

/// Convert a 1-based line and column to a byte offset clamped to the content.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1);

    // miette panics on spans past the end of the source.
    offset.min(content.len())
}
