//! Band strategies - band number <-> underbust measurement
//!
//! Each sizing system has its own rounding rule for turning an underbust
//! measurement into a band number:
//! - Metric: the band is the underbust in cm, rounded to the nearest step.
//! - Modern inch: the band is the underbust in inches, rounded up to the
//!   next even number.
//! - Classic inch: the underbust in whole inches plus 4 (even) or 5 (odd).
//!
//! In every system the band number reads back as a length in the system's
//! own unit.

use serde::Serialize;

use crate::core::measurement::{cm, inch, Measurement, Unit};

/// Band rounding rule for a sizing system
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BandStrategy {
    /// Band = underbust in cm, rounded to the nearest `step_cm`
    Metric {
        step_cm: f64,
        band_start: Option<i32>,
    },
    /// Band = underbust in inches, rounded up to an even number
    ModernInch { band_start: Option<i32> },
    /// Band = underbust in whole inches + 4 if even, + 5 if odd
    ClassicInch { band_start: Option<i32> },
}

/// Band step shared by the inch systems (bands go 30, 32, 34, ...)
const INCH_BAND_STEP: f64 = 2.0;

impl BandStrategy {
    pub const fn metric(step_cm: f64, band_start: i32) -> Self {
        BandStrategy::Metric {
            step_cm,
            band_start: Some(band_start),
        }
    }

    pub const fn modern_inch(band_start: i32) -> Self {
        BandStrategy::ModernInch {
            band_start: Some(band_start),
        }
    }

    pub const fn classic_inch(band_start: i32) -> Self {
        BandStrategy::ClassicInch {
            band_start: Some(band_start),
        }
    }

    /// Distance between adjacent bands
    pub fn band_step(&self) -> Measurement {
        match self {
            BandStrategy::Metric { step_cm, .. } => cm(*step_cm),
            BandStrategy::ModernInch { .. } | BandStrategy::ClassicInch { .. } => {
                inch(INCH_BAND_STEP)
            }
        }
    }

    /// Smallest band shown in charts, if the system defines one
    pub fn band_start(&self) -> Option<i32> {
        match self {
            BandStrategy::Metric { band_start, .. }
            | BandStrategy::ModernInch { band_start }
            | BandStrategy::ClassicInch { band_start } => *band_start,
        }
    }

    /// Unit band numbers are expressed in
    pub fn unit(&self) -> Unit {
        match self {
            BandStrategy::Metric { .. } => Unit::Cm,
            BandStrategy::ModernInch { .. } | BandStrategy::ClassicInch { .. } => Unit::Inch,
        }
    }

    /// The length a band number stands for
    pub fn band_to_measurement(&self, band: i32) -> Measurement {
        Measurement::new(f64::from(band), self.unit())
    }

    /// Band number for an underbust measurement
    pub fn measurement_to_band(&self, underbust: Measurement) -> i32 {
        match self {
            BandStrategy::Metric { step_cm, .. } => {
                ((underbust.to_cm() / step_cm).round() * step_cm).round() as i32
            }
            BandStrategy::ModernInch { .. } => {
                ((underbust.to_inch() / INCH_BAND_STEP).ceil() * INCH_BAND_STEP) as i32
            }
            BandStrategy::ClassicInch { .. } => {
                let whole = underbust.to_inch().round() as i32;
                let extra = if whole % 2 == 0 { 4 } else { 5 };
                whole + extra
            }
        }
    }

    /// Short label for listings
    pub fn describe(&self) -> String {
        match self {
            BandStrategy::Metric { step_cm, .. } => format!("metric ({} cm steps)", step_cm),
            BandStrategy::ModernInch { .. } => "inch, rounded up to even".to_string(),
            BandStrategy::ClassicInch { .. } => "inch, +4/+5 classic".to_string(),
        }
    }
}
