//! Table formatting utilities for CLI output.

use std::collections::BTreeMap;

use comfy_table::{presets, ContentArrangement, Table};
use locale_fields::FieldSet;
use serde_json::Value;

use crate::commands::ChainMember;

/// Longest rendered value before it is shortened.
const MAX_VALUE_WIDTH: usize = 40;

/// Format minimal field sets as an ASCII table, one row per field.
pub fn format_fields_table(result: &BTreeMap<String, FieldSet<Value>>) -> Table {
    let mut table = new_table(vec!["Locale", "Field", "Value"]);

    for (locale, fields) in result {
        for (name, value) in fields {
            table.add_row(vec![locale.clone(), name.clone(), render_value(value)]);
        }
    }

    table
}

/// Collapse results for a single plural map.
pub struct CollapsedEntry {
    /// Name of the plural map.
    pub name: String,
    /// Categories left after collapsing, `other` included.
    pub kept: Vec<String>,
    /// Categories dropped because they repeated `other`.
    pub dropped: Vec<String>,
}

/// Format collapse results as an ASCII table.
pub fn format_collapse_table(entries: &[CollapsedEntry]) -> Table {
    let mut table = new_table(vec!["Name", "Kept", "Dropped"]);

    for entry in entries {
        table.add_row(vec![
            entry.name.clone(),
            entry.kept.join(", "),
            entry.dropped.join(", "),
        ]);
    }

    table
}

/// Format a resolved ancestor chain as an ASCII table.
pub fn format_chain_table(members: &[ChainMember]) -> Table {
    let mut table = new_table(vec!["Depth", "Locale", "Data"]);

    for (depth, member) in members.iter().enumerate() {
        let data = match member.has_data {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        };
        table.add_row(vec![depth.to_string(), member.locale.clone(), data.to_string()]);
    }

    table
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Render a JSON value on one line, shortening long values.
fn render_value(value: &Value) -> String {
    let rendered = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if rendered.chars().count() > MAX_VALUE_WIDTH {
        let head: String = rendered.chars().take(MAX_VALUE_WIDTH - 1).collect();
        format!("{head}…")
    } else {
        rendered
    }
}
