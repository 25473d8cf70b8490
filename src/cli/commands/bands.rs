//! `cupholder bands` command - band options for a region

use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::{format_measurement, format_value, resolve_settings};
use crate::cli::output::{effective_format, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{band_options, band_to_underbust_range, Measurement, Region};

#[derive(clap::Args, Debug)]
pub struct BandsArgs {
    /// Smallest underbust to consider (default 30 cm)
    #[arg(long)]
    pub min: Option<f64>,

    /// Largest underbust to consider (default 200 cm)
    #[arg(long)]
    pub max: Option<f64>,

    /// Show only the count
    #[arg(long)]
    pub count: bool,
}

#[derive(Serialize)]
struct BandsReport {
    region: Region,
    bands: Vec<i32>,
}

pub fn run(args: BandsArgs, global: &GlobalOpts) -> Result<()> {
    let (region, unit) = resolve_settings(global)?;
    let min = args.min.map(|v| Measurement::new(v, unit));
    let max = args.max.map(|v| Measurement::new(v, unit));

    let bands = band_options(region, min, max);
    tracing::debug!(%region, count = bands.len(), "listed band options");

    if args.count {
        println!("{}", bands.len());
        return Ok(());
    }

    let report = BandsReport { region, bands };
    let format = effective_format(global.format, true);
    if print_structured(&report, format)? {
        return Ok(());
    }

    match format {
        OutputFormat::Pretty => {
            if report.bands.is_empty() {
                println!("No bands found.");
                return Ok(());
            }
            for band in &report.bands {
                let range = band_to_underbust_range(*band, region);
                println!(
                    "  {:>4}  {} – {}",
                    style(band).cyan(),
                    format_measurement(range.min, unit),
                    format_measurement(range.max, unit)
                );
            }
            println!();
            println!(
                "{} band(s) found for {}",
                style(report.bands.len()).cyan(),
                region
            );
        }
        _ => {
            for band in &report.bands {
                let range = band_to_underbust_range(*band, region);
                println!(
                    "{}\t{}\t{}",
                    band,
                    format_value(range.min.value_in(unit)),
                    format_value(range.max.value_in(unit))
                );
            }
        }
    }
    Ok(())
}
