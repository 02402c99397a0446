//! Implementation of the `locale-fields collapse` command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;
use locale_fields::{collapse_plural_rules, PluralRuleMap};
use miette::{miette, IntoDiagnostic, Result};
use serde_json::Value;

use crate::catalog::read_json;
use crate::output::table::{format_collapse_table, CollapsedEntry};

/// Arguments for the collapse command.
#[derive(Debug, Args)]
pub struct CollapseArgs {
    /// JSON file mapping names to plural maps ({"name": {"other": ..., "one": ...}})
    #[arg(long)]
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Collapse every plural map, naming the entry that lacks "other".
pub fn collapse_all(
    maps: &BTreeMap<String, PluralRuleMap<Value>>,
) -> Result<BTreeMap<String, PluralRuleMap<Value>>> {
    maps.iter()
        .map(|(name, rules)| {
            collapse_plural_rules(rules)
                .map(|collapsed| (name.clone(), collapsed))
                .map_err(|e| miette!("Cannot collapse '{}': {}", name, e))
        })
        .collect()
}

/// Run the collapse command.
pub fn run_collapse(args: CollapseArgs) -> Result<i32> {
    let maps: BTreeMap<String, PluralRuleMap<Value>> = read_json(&args.file)?;
    let collapsed = collapse_all(&maps)?;

    if args.json {
        let output = serde_json::to_string_pretty(&collapsed).into_diagnostic()?;
        println!("{}", output);
    } else {
        let entries: Vec<CollapsedEntry> = maps
            .iter()
            .map(|(name, rules)| CollapsedEntry {
                name: name.clone(),
                kept: collapsed[name].keys().cloned().collect(),
                dropped: rules
                    .keys()
                    .filter(|category| !collapsed[name].contains_key(*category))
                    .cloned()
                    .collect(),
            })
            .collect();
        println!("{}", format_collapse_table(&entries));
    }

    Ok(exitcode::OK)
}
