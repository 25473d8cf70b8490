//! Shared helper functions for CLI commands

use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::{Config, Measurement, Region, Unit};

/// Round for display, dropping a trailing ".0"
///
/// Values are shown to one decimal, which is finer than any chart step.
pub fn format_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Format a measurement in the requested unit, e.g. "80 cm" or "31.5 in"
pub fn format_measurement(m: Measurement, unit: Unit) -> String {
    format!("{} {}", format_value(m.value_in(unit)), unit.symbol())
}

/// Load the config file named by the global options
pub fn load_config(global: &GlobalOpts) -> Result<Config> {
    let path = Config::resolve_path(global.config.as_deref()).into_diagnostic()?;
    Config::load(&path).into_diagnostic()
}

/// Region and unit for a command, after config and overrides
pub fn resolve_settings(global: &GlobalOpts) -> Result<(Region, Unit)> {
    // Both set on the command line: the config file is irrelevant
    if let (Some(region), Some(unit)) = (global.region, global.unit) {
        return Ok((region, unit));
    }
    let config = load_config(global)?;
    Ok(global.effective(&config))
}
