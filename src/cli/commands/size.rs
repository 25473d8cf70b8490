//! `cupholder size` command - measurements to bra size

use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::{format_measurement, resolve_settings};
use crate::cli::output::{effective_format, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{calculate_bra_size, BraSize, Measurement, Region, Unit};

#[derive(clap::Args, Debug)]
pub struct SizeArgs {
    /// Underbust circumference (in the selected unit)
    pub underbust: f64,

    /// Bust circumference (in the selected unit)
    pub bust: f64,
}

#[derive(Serialize)]
struct SizeReport {
    region: Region,
    underbust: Measurement,
    bust: Measurement,
    #[serde(flatten)]
    size: BraSize,
    label: String,
}

pub fn run(args: SizeArgs, global: &GlobalOpts) -> Result<()> {
    let (region, unit) = resolve_settings(global)?;
    let underbust = Measurement::new(args.underbust, unit);
    let bust = Measurement::new(args.bust, unit);

    let size = calculate_bra_size(underbust, bust, region);
    let report = SizeReport {
        region,
        underbust,
        bust,
        label: size.to_string(),
        size,
    };

    let format = effective_format(global.format, false);
    if print_structured(&report, format)? {
        return Ok(());
    }

    match format {
        OutputFormat::Tsv => {
            println!("{}\t{}\t{}", report.size.band, report.size.cup, report.label);
        }
        _ => print_pretty(&report, unit),
    }
    Ok(())
}

fn print_pretty(report: &SizeReport, unit: Unit) {
    println!("{}", style("─".repeat(40)).dim());
    println!(
        "{}: {}",
        style("Size").bold(),
        style(&report.label).cyan().bold()
    );
    println!("{}: {}", style("Band").bold(), report.size.band);
    println!("{}: {}", style("Cup").bold(), report.size.cup);
    println!("{}", style("─".repeat(40)).dim());
    println!(
        "{}: {}",
        style("Underbust").bold(),
        format_measurement(report.underbust, unit)
    );
    println!(
        "{}: {}",
        style("Bust").bold(),
        format_measurement(report.bust, unit)
    );
    match report.region.brand() {
        Some(brand) => println!(
            "{}: {} ({})",
            style("Region").bold(),
            report.region,
            style(brand).dim()
        ),
        None => println!("{}: {}", style("Region").bold(), report.region),
    }
}
