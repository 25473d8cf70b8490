//! `cupholder regions` command - list sizing systems

use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::format_measurement;
use crate::cli::output::{effective_format, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Region, RegionConfig};

#[derive(Serialize)]
struct RegionEntry {
    region: Region,
    #[serde(flatten)]
    config: &'static RegionConfig,
}

fn reference_label(config: &RegionConfig) -> &'static str {
    if config.use_band_for_difference {
        "band"
    } else {
        "underbust"
    }
}

pub fn run(global: &GlobalOpts) -> Result<()> {
    let entries: Vec<RegionEntry> = Region::ALL
        .into_iter()
        .map(|region| RegionEntry {
            region,
            config: region.config(),
        })
        .collect();

    let format = effective_format(global.format, true);
    if print_structured(&entries, format)? {
        return Ok(());
    }

    match format {
        OutputFormat::Pretty => {
            for entry in &entries {
                let config = entry.config;
                let unit = config.first_cup_threshold.unit;
                println!(
                    "{} {}",
                    style(entry.region).cyan().bold(),
                    style(config.brand.unwrap_or("")).dim()
                );
                println!("  Bands: {}", config.band.describe());
                println!(
                    "  Cups: first cup at {}, {} per cup, measured from {}",
                    format_measurement(config.first_cup_threshold, unit),
                    format_measurement(config.cup_step, unit),
                    reference_label(config)
                );
            }
        }
        _ => {
            for entry in &entries {
                let config = entry.config;
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    entry.region,
                    config.band.describe(),
                    config.first_cup_threshold,
                    config.cup_step,
                    reference_label(config),
                    config.brand.unwrap_or("")
                );
            }
        }
    }
    Ok(())
}
