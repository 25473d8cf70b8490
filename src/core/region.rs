//! Region registry - the sizing system used in each market
//!
//! One [`RegionConfig`] per [`Region`], held in statics and looked up through
//! an exhaustive match, so every supported region has exactly one entry and
//! the table can never change at runtime.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::core::band::BandStrategy;
use crate::core::cup::LinearCupStrategy;
use crate::core::measurement::{cm, inch, Measurement};

/// A sizing system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    #[default]
    Cn,
    Us,
    UsClassic,
    Jp,
    Uk,
}

impl Region {
    /// Every supported region, in registry order
    pub const ALL: [Region; 5] = [
        Region::Cn,
        Region::Us,
        Region::UsClassic,
        Region::Jp,
        Region::Uk,
    ];

    /// Sizing parameters for this region
    pub fn config(self) -> &'static RegionConfig {
        match self {
            Region::Cn => &CN,
            Region::Us => &US,
            Region::UsClassic => &US_CLASSIC,
            Region::Jp => &JP,
            Region::Uk => &UK,
        }
    }

    /// Brand whose chart this region follows
    pub fn brand(self) -> Option<&'static str> {
        self.config().brand
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Cn => "CN",
            Region::Us => "US",
            Region::UsClassic => "US_CLASSIC",
            Region::Jp => "JP",
            Region::Uk => "UK",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned for a region tag outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown region '{0}' (expected one of CN, US, US_CLASSIC, JP, UK)")]
pub struct ParseRegionError(pub String);

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| ParseRegionError(s.to_string()))
    }
}

/// Everything that varies between sizing systems
#[derive(Debug, Clone, Serialize)]
pub struct RegionConfig {
    /// Band rounding rule (also carries band step and display start)
    pub band: BandStrategy,

    /// Difference covered by one cup
    pub cup_step: Measurement,

    /// Smallest difference that earns the first non-minimal cup
    pub first_cup_threshold: Measurement,

    /// Where cup enumeration starts, when it differs from the threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cup_generation_start: Option<Measurement>,

    /// Cup names, smallest first
    pub cup_names: &'static [&'static str],

    /// Difference <-> cup rule
    pub cup: LinearCupStrategy,

    /// true: difference is taken against the band value;
    /// false: against the raw underbust
    pub use_band_for_difference: bool,

    /// Brand whose chart this region follows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<&'static str>,
}

impl RegionConfig {
    pub fn band_step(&self) -> Measurement {
        self.band.band_step()
    }

    pub fn band_start(&self) -> Option<i32> {
        self.band.band_start()
    }

    /// First point of cup enumeration
    pub fn generation_start(&self) -> Measurement {
        self.cup_generation_start.unwrap_or(self.first_cup_threshold)
    }
}

// ============================================================================
// Cup name lists
// ============================================================================

const CN_CUP_NAMES: &[&str] = &[
    "AA", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q",
    "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

// No E or F: DD and DDD take their place
const US_CUP_NAMES: &[&str] = &[
    "AA", "A", "B", "C", "D", "DD", "DDD", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P",
    "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

// Doubled letters between the singles, no I
const UK_CUP_NAMES: &[&str] = &[
    "AA", "A", "B", "C", "D", "DD", "E", "F", "FF", "G", "GG", "H", "HH", "J", "JJ", "K", "KK",
    "L", "LL", "M", "MM", "N", "NN", "O", "OO", "P", "PP", "Q", "R", "S", "T", "U", "V", "W",
    "X", "Y", "Z",
];

const JP_CUP_NAMES: &[&str] = &[
    "AAA", "AA", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P",
    "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

// ============================================================================
// Shared strategies
// ============================================================================

const METRIC_BAND_70: BandStrategy = BandStrategy::metric(5.0, 70);
const METRIC_BAND_65: BandStrategy = BandStrategy::metric(5.0, 65);
const MODERN_INCH_BAND: BandStrategy = BandStrategy::modern_inch(28);
const CLASSIC_INCH_BAND: BandStrategy = BandStrategy::classic_inch(28);

const CN_CUP: LinearCupStrategy = LinearCupStrategy::new(cm(10.0), cm(2.5), "AA", cm(7.5));
const JP_CUP: LinearCupStrategy = LinearCupStrategy::new(cm(6.5), cm(2.5), "AAA", cm(5.0));
const INCH_CUP: LinearCupStrategy = LinearCupStrategy::new(inch(-1.0), inch(1.0), "AA", inch(-1.0));

// ============================================================================
// Registry
// ============================================================================

static CN: RegionConfig = RegionConfig {
    band: METRIC_BAND_70,
    cup_step: CN_CUP.cup_step,
    first_cup_threshold: CN_CUP.first_cup_threshold,
    cup_generation_start: Some(cm(7.5)),
    cup_names: CN_CUP_NAMES,
    cup: CN_CUP,
    use_band_for_difference: false,
    brand: Some("Naitangpai"),
};

static US: RegionConfig = RegionConfig {
    band: MODERN_INCH_BAND,
    cup_step: INCH_CUP.cup_step,
    first_cup_threshold: INCH_CUP.first_cup_threshold,
    cup_generation_start: None,
    cup_names: US_CUP_NAMES,
    cup: INCH_CUP,
    use_band_for_difference: true,
    brand: Some("Victoria Secret"),
};

static US_CLASSIC: RegionConfig = RegionConfig {
    band: CLASSIC_INCH_BAND,
    cup_step: INCH_CUP.cup_step,
    first_cup_threshold: INCH_CUP.first_cup_threshold,
    cup_generation_start: None,
    cup_names: US_CUP_NAMES,
    cup: INCH_CUP,
    use_band_for_difference: true,
    brand: Some("Skims"),
};

static JP: RegionConfig = RegionConfig {
    band: METRIC_BAND_65,
    cup_step: JP_CUP.cup_step,
    first_cup_threshold: JP_CUP.first_cup_threshold,
    cup_generation_start: Some(cm(5.0)),
    cup_names: JP_CUP_NAMES,
    cup: JP_CUP,
    use_band_for_difference: false,
    brand: Some("WACOAL"),
};

static UK: RegionConfig = RegionConfig {
    band: MODERN_INCH_BAND,
    cup_step: INCH_CUP.cup_step,
    first_cup_threshold: INCH_CUP.first_cup_threshold,
    cup_generation_start: None,
    cup_names: UK_CUP_NAMES,
    cup: INCH_CUP,
    use_band_for_difference: true,
    brand: Some("Curvy Kate"),
};
