//! `cupholder chart` command - bust measurement per band and cup

use miette::Result;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::helpers::{format_value, resolve_settings};
use crate::cli::output::{effective_format, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{band_options, cup_options, cup_to_bust_range, Measurement, Region, Unit};

#[derive(clap::Args, Debug)]
pub struct ChartArgs {
    /// Number of cups (columns)
    #[arg(long, short = 'c', default_value_t = 8)]
    pub cups: usize,

    /// Number of bands (rows), starting at the region's first chart band
    #[arg(long, short = 'b', default_value_t = 10)]
    pub bands: usize,
}

#[derive(Serialize)]
struct ChartRow {
    band: i32,
    busts: Vec<Measurement>,
}

#[derive(Serialize)]
struct Chart {
    region: Region,
    cups: Vec<String>,
    rows: Vec<ChartRow>,
}

/// Build the chart: band options from the region's band start, first cups
fn build_chart(region: Region, cup_count: usize, band_count: usize) -> Chart {
    let config = region.config();
    let start = config.band_start().unwrap_or(i32::MIN);
    let cups = cup_options(region, cup_count);

    let rows = band_options(region, None, None)
        .into_iter()
        .filter(|band| *band >= start)
        .take(band_count)
        .map(|band| ChartRow {
            band,
            busts: cups
                .iter()
                .map(|cup| cup_to_bust_range(band, cup, region).median)
                .collect(),
        })
        .collect();

    Chart { region, cups, rows }
}

pub fn run(args: ChartArgs, global: &GlobalOpts) -> Result<()> {
    let (region, unit) = resolve_settings(global)?;
    let chart = build_chart(region, args.cups, args.bands);

    let format = effective_format(global.format, false);
    if print_structured(&chart, format)? {
        return Ok(());
    }

    match format {
        OutputFormat::Tsv => {
            println!("band\t{}", chart.cups.join("\t"));
            for row in &chart.rows {
                let cells: Vec<String> = row.busts.iter().map(|m| cell(*m, unit)).collect();
                println!("{}\t{}", row.band, cells.join("\t"));
            }
        }
        _ => {
            println!("{}", render_table(&chart, unit));
            println!("Bust measurements in {} for {}", unit, region);
        }
    }
    Ok(())
}

fn cell(m: Measurement, unit: Unit) -> String {
    format_value(m.value_in(unit))
}

fn render_table(chart: &Chart, unit: Unit) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Band".to_string()];
    header.extend(chart.cups.iter().cloned());
    builder.push_record(header);

    for row in &chart.rows {
        let mut record = vec![row.band.to_string()];
        record.extend(row.busts.iter().map(|m| cell(*m, unit)));
        builder.push_record(record);
    }

    builder.build().with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cm;

    #[test]
    fn test_chart_starts_at_band_start() {
        let chart = build_chart(Region::Cn, 4, 3);
        assert_eq!(chart.cups, ["AA", "A", "B", "C"]);
        let bands: Vec<i32> = chart.rows.iter().map(|r| r.band).collect();
        assert_eq!(bands, [70, 75, 80]);
    }

    #[test]
    fn test_chart_cells_are_bust_medians() {
        let chart = build_chart(Region::Cn, 4, 3);
        let row = &chart.rows[2];
        assert_eq!(row.band, 80);
        assert_eq!(row.busts[0], cm(87.5));
        assert_eq!(row.busts[3], cm(95.0));
    }

    #[test]
    fn test_render_table_has_header() {
        let chart = build_chart(Region::Jp, 3, 2);
        let table = render_table(&chart, Unit::Cm);
        assert!(table.contains("Band"));
        assert!(table.contains("AAA"));
        assert!(table.contains("65"));
    }
}
