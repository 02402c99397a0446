//! Reading JSON input files.

use std::fs::read_to_string;
use std::path::Path;

use locale_fields::MemoryCatalog;
use miette::{miette, IntoDiagnostic, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::output::JsonDiagnostic;

/// Read and deserialize a JSON file, reporting parse errors with a labelled
/// source span.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read {:?}: {}", path, e))?;

    serde_json::from_str(&content)
        .map_err(|e| JsonDiagnostic::from_json_error(path, &content, &e).into())
}

/// Load a catalog of raw per-locale fields: `{locale: {field: value}}`.
pub fn load_catalog(path: &Path) -> Result<MemoryCatalog<Value>> {
    let catalog: MemoryCatalog<Value> = read_json(path)?;
    debug!(path = %path.display(), locales = catalog.len(), "loaded catalog");
    Ok(catalog)
}
