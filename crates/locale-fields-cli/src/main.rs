//! locale-fields CLI entry point.
//!
//! Provides command-line tools for working with JSON locale catalogs:
//! - `locale-fields extract` - Print the minimal field set of each locale
//! - `locale-fields collapse` - Collapse plural maps to their distinct categories
//! - `locale-fields resolve` - Show a locale's ancestor chain

mod catalog;
mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_collapse, run_extract, run_resolve, CollapseArgs, ExtractArgs, ResolveArgs,
};
use tracing_subscriber::EnvFilter;

/// Locale field extraction tools.
#[derive(Debug, Parser)]
#[command(name = "locale-fields")]
#[command(about = "Minimal per-locale field sets from JSON locale catalogs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract minimal field sets for locales
    Extract(ExtractArgs),
    /// Collapse plural maps to the categories that differ from "other"
    Collapse(CollapseArgs),
    /// Show the ancestor chain of a locale
    Resolve(ResolveArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install a stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "locale_fields=debug,locale_fields_cli=debug"
        } else {
            "warn"
        })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .try_init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Extract(args) => run_extract(args),
        Commands::Collapse(args) => run_collapse(args),
        Commands::Resolve(args) => run_resolve(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
