//! `cupholder measure` command - bra size to measurement ranges

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::{format_measurement, resolve_settings};
use crate::cli::output::{effective_format, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::cup_name;
use crate::core::{
    band_to_underbust_range, bra_size_to_measurements, cup_to_bust_range, BodyMeasurements,
    BraSize, Region, SizeRange, Unit,
};

#[derive(clap::Args, Debug)]
pub struct MeasureArgs {
    /// Bra size, e.g. 75C, 34DD or "34 1A"
    pub size: String,
}

#[derive(Serialize)]
struct MeasureReport {
    region: Region,
    size: BraSize,
    measurements: BodyMeasurements,
    underbust_range: SizeRange,
    bust_range: SizeRange,
}

pub fn run(args: MeasureArgs, global: &GlobalOpts) -> Result<()> {
    let size: BraSize = args.size.parse().into_diagnostic()?;
    let (region, unit) = resolve_settings(global)?;

    if !cup_name::is_known(&size.cup, region.config().cup_names) {
        tracing::warn!(
            cup = %size.cup,
            %region,
            "cup is not part of this region's chart, reading it as the smallest cup"
        );
    }

    let report = MeasureReport {
        region,
        measurements: bra_size_to_measurements(size.band, &size.cup, region),
        underbust_range: band_to_underbust_range(size.band, region),
        bust_range: cup_to_bust_range(size.band, &size.cup, region),
        size,
    };

    let format = effective_format(global.format, false);
    if print_structured(&report, format)? {
        return Ok(());
    }

    match format {
        OutputFormat::Tsv => {
            println!("measurement\tmin\tmedian\tmax");
            for (name, range) in [
                ("underbust", &report.underbust_range),
                ("bust", &report.bust_range),
            ] {
                println!(
                    "{}\t{}\t{}\t{}",
                    name,
                    format_measurement(range.min, unit),
                    format_measurement(range.median, unit),
                    format_measurement(range.max, unit)
                );
            }
        }
        _ => print_pretty(&report, unit),
    }
    Ok(())
}

fn print_pretty(report: &MeasureReport, unit: Unit) {
    println!("{}", style("─".repeat(40)).dim());
    println!(
        "{}: {} ({})",
        style("Size").bold(),
        style(report.size.to_string()).cyan().bold(),
        report.region
    );
    println!("{}", style("─".repeat(40)).dim());
    let rows = [
        ("Underbust", report.measurements.underbust, &report.underbust_range),
        ("Bust", report.measurements.bust, &report.bust_range),
    ];
    for (name, median, range) in rows {
        println!(
            "{}: {}  ({} – {})",
            style(name).bold(),
            style(format_measurement(median, unit)).yellow(),
            format_measurement(range.min, unit),
            format_measurement(range.max, unit)
        );
    }
}
