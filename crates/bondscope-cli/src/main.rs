//! Bondscope CLI - bond portfolio risk analytics from the command line.
//!
//! # Usage
//!
//! ```bash
//! # List the bonds available for selection
//! bondscope universe
//!
//! # Per-bond yield, duration and convexity
//! bondscope metrics -b B1,B2,B3,B4,B5
//!
//! # Value-weighted portfolio analytics
//! bondscope portfolio -b B1 -b B2 -b B3 -b B4 -b B5
//!
//! # Price impact of a +50bp parallel shock
//! bondscope simulate --all --shock 0.5
//!
//! # Portfolio value from -2% to +2%
//! bondscope ladder --all --format csv
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use error::CliError;
use output::{print_error, print_info};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = Context::from_cli(&cli)?;
    tracing::debug!(bonds = ctx.universe.len(), format = ?ctx.format, "context ready");

    match cli.command {
        Commands::Universe => commands::universe::execute(&ctx)?,
        Commands::Metrics(args) => commands::metrics::execute(args, &ctx)?,
        Commands::Portfolio(args) => commands::portfolio::execute(args, &ctx)?,
        Commands::Simulate(args) => commands::simulate::execute(args, &ctx)?,
        Commands::Ladder(args) => commands::ladder::execute(args, &ctx)?,
        Commands::Config => commands::config::execute(&ctx)?,
    }

    Ok(())
}

/// Logs go to stderr. `RUST_LOG` applies unless `-v` or `-q` is given.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = match (quiet, verbose) {
        (true, _) => EnvFilter::new("error"),
        (false, 0) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        (false, 1) => EnvFilter::new("warn,bondscope=debug"),
        (false, _) => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn report(err: &anyhow::Error) -> ExitCode {
    print_error(&format!("{err:#}"));

    match err.downcast_ref::<CliError>() {
        Some(cli_err @ CliError::SelectionTooSmall { available, .. }) => {
            if !available.is_empty() {
                print_info(&format!(
                    "Select more bonds with -b <ID>. Available: {}",
                    available.join(", ")
                ));
            }
            ExitCode::from(cli_err.exit_code())
        }
        Some(cli_err) => ExitCode::from(cli_err.exit_code()),
        None => ExitCode::FAILURE,
    }
}
