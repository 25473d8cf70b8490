//! `cupholder cups` command - cup options for a region

use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::resolve_settings;
use crate::cli::output::{effective_format, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{cup_options, Region, DEFAULT_MAX_CUPS};

#[derive(clap::Args, Debug)]
pub struct CupsArgs {
    /// Number of cup positions to enumerate
    #[arg(long, short = 'n', default_value_t = DEFAULT_MAX_CUPS)]
    pub max_cups: usize,
}

#[derive(Serialize)]
struct CupsReport {
    region: Region,
    cups: Vec<String>,
}

pub fn run(args: CupsArgs, global: &GlobalOpts) -> Result<()> {
    let (region, _) = resolve_settings(global)?;
    let report = CupsReport {
        region,
        cups: cup_options(region, args.max_cups),
    };

    let format = effective_format(global.format, true);
    if print_structured(&report, format)? {
        return Ok(());
    }

    match format {
        OutputFormat::Pretty => {
            println!("{}", report.cups.join(" "));
            println!();
            println!(
                "{} cup(s) for {}",
                style(report.cups.len()).cyan(),
                region
            );
        }
        _ => {
            for cup in &report.cups {
                println!("{}", cup);
            }
        }
    }
    Ok(())
}
