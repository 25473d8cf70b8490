//! `cupholder config` command - saved defaults

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::load_config;
use crate::cli::output::{effective_format, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, ConfigPatch, Region, Unit};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show saved defaults
    Show,

    /// Change saved defaults
    Set(SetArgs),

    /// Restore built-in defaults
    Reset,

    /// Print the config file location
    Path,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Default region
    #[arg(long)]
    pub default_region: Option<Region>,

    /// Default unit
    #[arg(long)]
    pub default_unit: Option<Unit>,
}

pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show => run_show(global),
        ConfigCommands::Set(args) => run_set(args, global),
        ConfigCommands::Reset => run_reset(global),
        ConfigCommands::Path => {
            println!("{}", config_path(global)?.display());
            Ok(())
        }
    }
}

fn config_path(global: &GlobalOpts) -> Result<std::path::PathBuf> {
    Config::resolve_path(global.config.as_deref()).into_diagnostic()
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    let format = effective_format(global.format, false);
    if print_structured(&config, format)? {
        return Ok(());
    }

    match format {
        OutputFormat::Tsv => {
            println!("region\t{}", config.region);
            println!("unit\t{}", config.unit);
        }
        _ => {
            println!("{}: {}", style("Region").bold(), config.region);
            println!("{}: {}", style("Unit").bold(), config.unit);
        }
    }
    Ok(())
}

fn run_set(args: SetArgs, global: &GlobalOpts) -> Result<()> {
    if args.default_region.is_none() && args.default_unit.is_none() {
        return Err(miette::miette!(
            "Nothing to set: pass --default-region and/or --default-unit"
        ));
    }

    let path = config_path(global)?;
    let mut config = Config::load(&path).into_diagnostic()?;
    config.apply(ConfigPatch {
        region: args.default_region,
        unit: args.default_unit,
    });
    config.save(&path).into_diagnostic()?;

    println!(
        "{} Saved defaults: region {}, unit {}",
        style("✓").green(),
        config.region,
        config.unit
    );
    Ok(())
}

fn run_reset(global: &GlobalOpts) -> Result<()> {
    let path = config_path(global)?;
    Config::default().save(&path).into_diagnostic()?;
    println!("{} Restored default settings", style("✓").green());
    Ok(())
}
