//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::bands::BandsArgs;
use crate::cli::commands::chart::ChartArgs;
use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::config::ConfigCommands;
use crate::cli::commands::cups::CupsArgs;
use crate::cli::commands::measure::MeasureArgs;
use crate::cli::commands::size::SizeArgs;
use crate::core::{Config, Region, Unit};

#[derive(Parser, Debug)]
#[command(
    name = "cupholder",
    version,
    about = "Convert body measurements into bra sizes for CN, US, JP and UK sizing systems"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate a bra size from underbust and bust measurements
    Size(SizeArgs),

    /// Show the measurements a bra size stands for
    Measure(MeasureArgs),

    /// List band sizes for a region
    Bands(BandsArgs),

    /// List cup names for a region
    Cups(CupsArgs),

    /// Print a size chart (bust measurement per band and cup)
    Chart(ChartArgs),

    /// List supported regions and their sizing rules
    Regions,

    /// Show or change saved defaults
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Sizing region (CN, US, US_CLASSIC, JP, UK)
    #[arg(long, short = 'r', global = true, env = "CUPHOLDER_REGION")]
    pub region: Option<Region>,

    /// Measurement unit (cm or inch)
    #[arg(long, short = 'u', global = true, env = "CUPHOLDER_UNIT")]
    pub unit: Option<Unit>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Config file path (defaults to the platform config directory)
    #[arg(long, global = true, env = "CUPHOLDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalOpts {
    /// Region and unit after applying flag > env > config file > default
    pub fn effective(&self, config: &Config) -> (Region, Unit) {
        (
            self.region.unwrap_or(config.region),
            self.unit.unwrap_or(config.unit),
        )
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty for single results, TSV for lists
    #[default]
    Auto,
    /// Human-readable, colored output
    Pretty,
    /// JSON
    Json,
    /// YAML
    Yaml,
    /// Tab-separated values
    Tsv,
}
