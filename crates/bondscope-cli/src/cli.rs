//! CLI argument definitions.

use std::path::PathBuf;

use bondscope_config::OutputFormatSetting;
use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{LadderArgs, MetricsArgs, PortfolioArgs, SimulateArgs};

/// Bondscope - bond portfolio risk analytics
#[derive(Parser)]
#[command(name = "bondscope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: from config, else table]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file [default: ./bondscope.toml if present]
    #[arg(short, long, env = "BONDSCOPE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// CSV bond universe to use instead of the built-in one
    #[arg(short, long, global = true)]
    pub universe: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the bonds available for selection
    Universe,

    /// Yield, duration and convexity for selected bonds
    Metrics(MetricsArgs),

    /// Value-weighted portfolio analytics for selected bonds
    Portfolio(PortfolioArgs),

    /// Project prices under a parallel rate shock
    Simulate(SimulateArgs),

    /// Portfolio value across a range of rate shocks
    Ladder(LadderArgs),

    /// Print the effective configuration
    Config,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}

impl From<OutputFormatSetting> for OutputFormat {
    fn from(setting: OutputFormatSetting) -> Self {
        match setting {
            OutputFormatSetting::Table => Self::Table,
            OutputFormatSetting::Json => Self::Json,
            OutputFormatSetting::Csv => Self::Csv,
            OutputFormatSetting::Minimal => Self::Minimal,
        }
    }
}
