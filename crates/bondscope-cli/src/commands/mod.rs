//! CLI command implementations.

pub mod config;
pub mod ladder;
pub mod metrics;
pub mod portfolio;
pub mod simulate;
pub mod universe;

pub use ladder::LadderArgs;
pub use metrics::MetricsArgs;
pub use portfolio::PortfolioArgs;
pub use simulate::SimulateArgs;

use clap::builder::RangedU64ValueParser;
use clap::Args;

use bondscope_config::AppConfig;
use bondscope_core::{BondRecord, BondUniverse};

use crate::cli::{Cli, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::print_warning;

/// State shared by every command: configuration, universe and output mode.
pub struct Context {
    pub config: AppConfig,
    pub universe: BondUniverse,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    /// Loads configuration and the bond universe for a parsed command line.
    ///
    /// `--universe` wins over `universe_file` in the configuration, which
    /// wins over the built-in table.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let config = AppConfig::load(cli.config.as_deref())?;

        let universe = match cli.universe.as_ref().or(config.universe_file.as_ref()) {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading bond universe");
                BondUniverse::from_csv_path(path)?
            }
            None => {
                tracing::debug!("using built-in bond universe");
                BondUniverse::embedded()
            }
        };

        let format = cli
            .format
            .unwrap_or_else(|| config.default_format.into());

        Ok(Self {
            config,
            universe,
            format,
            quiet: cli.quiet,
        })
    }
}

/// Bond selection flags shared by the analysis commands.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Bond id to include (repeatable, or comma-separated)
    #[arg(short = 'b', long = "bond", value_delimiter = ',')]
    pub bonds: Vec<String>,

    /// Select every bond in the universe
    #[arg(long, conflicts_with = "bonds")]
    pub all: bool,

    /// Minimum number of bonds required [default: from config]
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub min_selection: Option<usize>,
}

impl SelectionArgs {
    /// Resolves the requested ids against the universe.
    ///
    /// Unknown ids are reported and skipped. The result keeps the
    /// universe's order.
    ///
    /// # Errors
    ///
    /// [`CliError::SelectionTooSmall`] when fewer bonds than the minimum
    /// remain.
    pub fn select(&self, ctx: &Context) -> CliResult<Vec<BondRecord>> {
        let required = self.min_selection.unwrap_or(ctx.config.min_selection);

        let selected = if self.all {
            ctx.universe.records().to_vec()
        } else {
            let unknown: Vec<&str> = self
                .bonds
                .iter()
                .map(String::as_str)
                .filter(|id| !ctx.universe.contains(id))
                .collect();
            if !unknown.is_empty() {
                tracing::debug!(?unknown, "unknown bond ids");
                if !ctx.quiet {
                    print_warning(&format!("Ignoring unknown bond id(s): {}", unknown.join(", ")));
                }
            }
            ctx.universe.select(&self.bonds)
        };

        if selected.len() < required {
            let available = ctx
                .universe
                .records()
                .iter()
                .filter(|b| !selected.iter().any(|s| s.id == b.id))
                .map(|b| b.id.to_string())
                .collect();
            return Err(CliError::SelectionTooSmall {
                selected: selected.len(),
                required,
                available,
            });
        }

        tracing::debug!(count = selected.len(), "bonds selected");
        Ok(selected)
    }
}
