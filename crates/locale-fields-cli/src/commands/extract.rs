//! Implementation of the `locale-fields extract` command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;
use locale_fields::{compute_suggestions, FieldExtractor, FieldSet, MemoryCatalog};
use miette::{miette, IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde_json::Value;

use crate::catalog::load_catalog;
use crate::commands::{build_resolver, parse_parent};
use crate::output::table::format_fields_table;

/// Arguments for the extract command.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// JSON catalog mapping each locale to its raw fields
    #[arg(long, env = "LOCALE_FIELDS_CATALOG")]
    pub catalog: PathBuf,

    /// Locales to extract (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub locale: Vec<String>,

    /// Locales allowed in ancestor chains (comma-separated). Defaults to
    /// every locale in the catalog.
    #[arg(long, value_delimiter = ',')]
    pub available: Vec<String>,

    /// Parent overrides in locale=parent format (repeatable)
    #[arg(long = "parent", value_parser = parse_parent)]
    pub parents: Vec<(String, String)>,

    /// Exit with non-zero code if a requested locale yields no fields
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the extract command.
pub fn run_extract(args: ExtractArgs) -> Result<i32> {
    let catalog = load_catalog(&args.catalog)?;

    for warning in missing_locale_warnings(&catalog, &args.locale) {
        eprintln!(
            "{} {}",
            "warning:".if_supports_color(Stream::Stderr, |t| t.yellow()),
            warning
        );
    }

    let available: Vec<String> = if args.available.is_empty() {
        catalog.locales().map(str::to_string).collect()
    } else {
        args.available.clone()
    };

    let mut extractor = FieldExtractor::builder()
        .source(catalog)
        .available_locales(available)
        .resolver(build_resolver(&args.parents))
        .build();

    let result = extractor
        .extract(&args.locale)
        .map_err(|e| miette!("Extraction failed: {}", e))?;

    print_result(&result, args.json)?;

    let any_missing = args.locale.iter().any(|l| !result.contains_key(l));
    if args.strict && any_missing {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// One message per requested locale absent from the catalog.
fn missing_locale_warnings(catalog: &MemoryCatalog<Value>, locales: &[String]) -> Vec<String> {
    locales
        .iter()
        .filter(|locale| catalog.get(locale.as_str()).is_none())
        .map(|locale| {
            let suggestions = compute_suggestions(locale, catalog.locales());
            if suggestions.is_empty() {
                format!("no data for '{}'", locale)
            } else {
                format!(
                    "no data for '{}' (did you mean: {}?)",
                    locale,
                    suggestions.join(", ")
                )
            }
        })
        .collect()
}

fn print_result(result: &BTreeMap<String, FieldSet<Value>>, json: bool) -> Result<()> {
    if json {
        let output = serde_json::to_string_pretty(result).into_diagnostic()?;
        println!("{}", output);
    } else {
        println!("{}", format_fields_table(result));
    }
    Ok(())
}
