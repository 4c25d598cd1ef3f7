//! Emporium CLI - calendar spread metrics over quote files.
//!
//! # Usage
//!
//! ```bash
//! # Leg and calendar spreads
//! emporium spreads --input quotes.csv
//!
//! # Calendar cost and gap using strike_relative
//! emporium calendar --input quotes.csv --strike-column strike_relative
//!
//! # Everything, written to a file
//! emporium screen --input quotes.csv --output screened.csv
//!
//! # Inspect a quote file
//! emporium columns --input quotes.csv --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::{CliConfig, Settings};

fn main() {
    if let Err(err) = run() {
        output::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.quiet);

    let file_config = CliConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(file_config, cli.format, cli.quiet);

    // Execute command
    match cli.command {
        Commands::Spreads(args) => commands::spreads::execute(args, &settings)?,
        Commands::Calendar(args) => commands::calendar::execute(args, &settings)?,
        Commands::Screen(args) => commands::screen::execute(args, &settings)?,
        Commands::Columns(args) => commands::columns::execute(args, &settings)?,
    }

    Ok(())
}

/// Logs to stderr. `RUST_LOG` sets the filter unless `--quiet` is given.
fn init_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
