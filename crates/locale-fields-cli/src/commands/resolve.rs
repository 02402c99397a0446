//! Implementation of the `locale-fields resolve` command.

use std::path::PathBuf;

use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;

use crate::catalog::load_catalog;
use crate::commands::{build_resolver, parse_parent};
use crate::output::table::format_chain_table;

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Locale to resolve (e.g., en-GB-oxendict)
    pub locale: String,

    /// JSON catalog used to mark which chain members have data
    #[arg(long, env = "LOCALE_FIELDS_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Parent overrides in locale=parent format (repeatable)
    #[arg(long = "parent", value_parser = parse_parent)]
    pub parents: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One member of a resolved chain.
#[derive(Debug, Serialize)]
pub struct ChainMember {
    pub locale: String,
    /// `None` when no catalog was given.
    pub has_data: Option<bool>,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> Result<i32> {
    let chain = build_resolver(&args.parents)
        .resolve(&args.locale)
        .map_err(|e| miette!("{}", e))?;

    let catalog = args.catalog.as_deref().map(load_catalog).transpose()?;

    let members: Vec<ChainMember> = chain
        .into_iter()
        .map(|locale| ChainMember {
            has_data: catalog.as_ref().map(|c| c.get(&locale).is_some()),
            locale,
        })
        .collect();

    if args.json {
        let output = serde_json::to_string_pretty(&members).into_diagnostic()?;
        println!("{}", output);
    } else {
        println!("{}", format_chain_table(&members));
    }

    Ok(exitcode::OK)
}
