//! usl - Universal Source Locator
//!
//! Usage:
//!   usl LOCATOR                  # Dump every non-empty attribute
//!   usl LOCATOR name class ...   # Print the requested attribute values

mod output;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser as _;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use usl_core::{Parser, config};

use crate::output::OutputFormat;

#[derive(clap::Parser)]
#[command(name = "usl", version)]
#[command(about = "Resolve source locators into their components", long_about = None)]
struct Cli {
    /// Source locator: local path, SCP address, provider shortcut or URL
    locator: String,

    /// Attributes to print, in order (all non-empty attributes when omitted)
    attributes: Vec<String>,

    /// Parser configuration file (defaults to the per-user usl.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Log parsing decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version print to stdout and are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "usl=debug,usl_core=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => config::load(path)?,
        None => config::load_default()?,
    };
    let parser = Parser::new(config).context("Invalid parser configuration")?;

    let locator = parser.parse(&cli.locator)?;
    tracing::debug!(source = %locator, "parsed locator");

    let attributes = locator.attributes();
    let mut stdout = io::stdout().lock();

    if cli.attributes.is_empty() {
        output::dump(&mut stdout, &attributes, cli.format)?;
    } else {
        output::print(&mut stdout, &attributes, &cli.attributes, cli.format)?;
    }

    stdout.flush()?;
    Ok(())
}
