//! Size conversion - measurements to bra sizes and back
//!
//! Forward: underbust -> band, then bust minus a reference (band value or raw
//! underbust, per region) -> cup. Backward: band and cup resolve to
//! measurement ranges independently.
//!
//! Nothing here fails. Out-of-table input degrades to the nearest plausible
//! answer: unknown cup names read as the smallest cup, and a cup whose
//! difference comes out negative gets a fixed 10 cm bust range above the band.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;

use crate::core::measurement::{cm, Measurement};
use crate::core::region::Region;

/// Lower bound of the default underbust scan for band options
pub const DEFAULT_BAND_MIN_UNDERBUST: Measurement = cm(30.0);

/// Upper bound of the default underbust scan for band options
pub const DEFAULT_BAND_MAX_UNDERBUST: Measurement = cm(200.0);

/// Resolution of the underbust scan for band options
pub const BAND_SCAN_STEP: Measurement = cm(0.5);

/// Default number of cup positions enumerated for cup options
pub const DEFAULT_MAX_CUPS: usize = 100;

/// Bust range used when a cup resolves to a negative difference
const FALLBACK_RANGE_WIDTH: Measurement = cm(10.0);
const FALLBACK_RANGE_MEDIAN: Measurement = cm(5.0);

/// A band number plus cup name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BraSize {
    pub band: i32,
    pub cup: String,
}

impl BraSize {
    pub fn new(band: i32, cup: impl Into<String>) -> Self {
        Self {
            band,
            cup: cup.into(),
        }
    }
}

impl std::fmt::Display for BraSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.band, self.cup)
    }
}

/// Errors parsing a size label such as `34DD`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBraSizeError {
    #[error("Size '{0}' does not start with a band number")]
    MissingBand(String),

    #[error("Size '{0}' has no cup after the band number")]
    MissingCup(String),
}

impl FromStr for BraSize {
    type Err = ParseBraSizeError;

    /// Parses `<band><cup>`. Cup names may themselves begin with digits
    /// (`1A`), so the band is split at the first non-digit and a separator
    /// (`34 1A`, `34-1A`) is accepted between them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (band, cup) = match s.find(|c: char| matches!(c, ' ' | '-' | '/')) {
            Some(pos) => (&s[..pos], s[pos + 1..].trim()),
            None => {
                let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
                s.split_at(split)
            }
        };

        let band: i32 = band
            .trim()
            .parse()
            .map_err(|_| ParseBraSizeError::MissingBand(s.to_string()))?;
        if cup.is_empty() {
            return Err(ParseBraSizeError::MissingCup(s.to_string()));
        }

        Ok(BraSize::new(band, cup.to_ascii_uppercase()))
    }
}

/// A measurement range around a representative value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: Measurement,
    pub max: Measurement,
    pub median: Measurement,
}

impl SizeRange {
    /// Range of `median` +/- `half_width`
    pub fn around(median: Measurement, half_width: Measurement) -> Self {
        Self {
            min: median.subtract(half_width),
            max: median.add(half_width),
            median,
        }
    }

    /// Whether `value` lies within [min, max]
    pub fn contains(&self, value: Measurement) -> bool {
        let v = value.to_cm();
        self.min.to_cm() <= v && v <= self.max.to_cm()
    }
}

/// Representative underbust and bust for a size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    pub underbust: Measurement,
    pub bust: Measurement,
}

/// Band number for an underbust measurement
pub fn underbust_to_band(underbust: Measurement, region: Region) -> i32 {
    region.config().band.measurement_to_band(underbust)
}

/// Cup name for a bust difference
pub fn calculate_cup(difference: Measurement, region: Region) -> String {
    let config = region.config();
    config
        .cup
        .measurement_to_cup_name(difference, config.cup_names)
}

/// Bra size for an underbust and bust measurement
pub fn calculate_bra_size(underbust: Measurement, bust: Measurement, region: Region) -> BraSize {
    let config = region.config();
    let band = underbust_to_band(underbust, region);
    let reference = if config.use_band_for_difference {
        config.band.band_to_measurement(band)
    } else {
        underbust
    };
    let difference = bust.subtract(reference);
    let cup = calculate_cup(difference, region);

    tracing::debug!(
        %region,
        %underbust,
        %bust,
        band,
        %reference,
        %difference,
        cup = %cup,
        "calculated bra size"
    );

    BraSize { band, cup }
}

/// Underbust range a band covers
pub fn band_to_underbust_range(band: i32, region: Region) -> SizeRange {
    let config = region.config();
    let median = config.band.band_to_measurement(band);
    SizeRange::around(median, config.band_step().divide(2.0))
}

/// Bust range a cup covers on a given band
pub fn cup_to_bust_range(band: i32, cup: &str, region: Region) -> SizeRange {
    let config = region.config();
    let difference = config.cup.cup_name_to_measurement(cup, config.cup_names);
    let base = config.band.band_to_measurement(band);

    if difference.to_cm() < 0.0 {
        tracing::debug!(
            %region,
            band,
            cup,
            %difference,
            "negative cup difference, using fallback bust range"
        );
        return SizeRange {
            min: base,
            max: base.add(FALLBACK_RANGE_WIDTH),
            median: base.add(FALLBACK_RANGE_MEDIAN),
        };
    }

    let half_width = cm(config.cup_step.to_cm() / 2.0);
    SizeRange::around(base.add(difference), half_width)
}

/// Representative measurements for a size
///
/// Band and cup are resolved independently; the pair is not checked for
/// coming from one consistent body.
pub fn bra_size_to_measurements(band: i32, cup: &str, region: Region) -> BodyMeasurements {
    let underbust = band_to_underbust_range(band, region).median;
    let bust = cup_to_bust_range(band, cup, region).median;
    tracing::debug!(%region, band, cup, %underbust, %bust, "resolved size to measurements");
    BodyMeasurements { underbust, bust }
}

/// Cup names the region can produce, smallest first
///
/// Walks `max_cups` points from the region's generation start in cup steps
/// and keeps each distinct name in first-seen order. With a large enough
/// `max_cups` this includes synthesized names past Z.
pub fn cup_options(region: Region, max_cups: usize) -> Vec<String> {
    let config = region.config();
    let start = config.generation_start();
    let mut seen = HashSet::new();
    let mut cups = Vec::new();

    for i in 0..max_cups {
        let difference = start.add(config.cup_step.multiply(i as f64));
        let cup = config
            .cup
            .measurement_to_cup_name(difference, config.cup_names);
        if seen.insert(cup.clone()) {
            cups.push(cup);
        }
    }

    cups
}

/// Band numbers whose band value falls within an underbust range
///
/// Scans the range in [`BAND_SCAN_STEP`] increments. Bounds default to
/// [`DEFAULT_BAND_MIN_UNDERBUST`] and [`DEFAULT_BAND_MAX_UNDERBUST`].
/// The result is sorted ascending without duplicates, and empty when a
/// bound is not finite or the range is inverted.
pub fn band_options(
    region: Region,
    min_underbust: Option<Measurement>,
    max_underbust: Option<Measurement>,
) -> Vec<i32> {
    let config = region.config();
    let min = min_underbust.unwrap_or(DEFAULT_BAND_MIN_UNDERBUST);
    let max = max_underbust.unwrap_or(DEFAULT_BAND_MAX_UNDERBUST);
    let (min_cm, max_cm) = (min.to_cm(), max.to_cm());
    let step_cm = BAND_SCAN_STEP.to_cm();

    if !min_cm.is_finite() || !max_cm.is_finite() || max_cm < min_cm {
        return Vec::new();
    }

    // Index-based stepping keeps the scan free of accumulated drift
    let steps = ((max_cm - min_cm) / step_cm).floor() as u64;
    let mut bands: Vec<i32> = (0..=steps)
        .map(|k| cm(min_cm + k as f64 * step_cm))
        .take_while(|underbust| underbust.to_cm() <= max_cm)
        .map(|underbust| config.band.measurement_to_band(underbust))
        .filter(|band| {
            let band_cm = config.band.band_to_measurement(*band).to_cm();
            (min_cm..=max_cm).contains(&band_cm)
        })
        .collect();

    bands.sort_unstable();
    bands.dedup();
    bands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::measurement::{inch, Unit};

    #[test]
    fn test_cn_scenario() {
        let size = calculate_bra_size(cm(80.0), cm(95.0), Region::Cn);
        assert_eq!(size, BraSize::new(80, "C"));
    }

    #[test]
    fn test_us_scenario() {
        let size = calculate_bra_size(inch(30.0), inch(33.0), Region::Us);
        assert_eq!(size, BraSize::new(30, "DD"));
    }

    #[test]
    fn test_cn_uses_raw_underbust() {
        // Band rounds 78 -> 80 but the cup is measured from 78
        let size = calculate_bra_size(cm(78.0), cm(93.0), Region::Cn);
        assert_eq!(size, BraSize::new(80, "C"));
    }

    #[test]
    fn test_us_uses_band_value() {
        // Band rounds 29 -> 30; cup is measured from 30, not 29
        let size = calculate_bra_size(inch(29.0), inch(33.0), Region::Us);
        assert_eq!(size, BraSize::new(30, "DD"));
    }

    #[test]
    fn test_classic_band_adds_inches() {
        let size = calculate_bra_size(inch(30.0), inch(36.0), Region::UsClassic);
        assert_eq!(size.band, 34);
        // 36 - 34 = 2 inches -> index 4 -> D
        assert_eq!(size.cup, "D");
    }

    #[test]
    fn test_small_difference_gets_smallest_cup() {
        assert_eq!(calculate_bra_size(cm(75.0), cm(80.0), Region::Cn).cup, "AA");
        assert_eq!(calculate_bra_size(cm(75.0), cm(80.0), Region::Jp).cup, "AAA");
        assert_eq!(calculate_bra_size(inch(32.0), inch(30.0), Region::Uk).cup, "AA");
    }

    #[test]
    fn test_band_range_is_symmetric() {
        let range = band_to_underbust_range(80, Region::Cn);
        assert_eq!(range.median, cm(80.0));
        assert_eq!(range.min, cm(77.5));
        assert_eq!(range.max, cm(82.5));

        let range = band_to_underbust_range(34, Region::Us);
        assert_eq!(range.median.unit, Unit::Inch);
        assert_eq!(range.min, inch(33.0));
        assert_eq!(range.max, inch(35.0));
    }

    #[test]
    fn test_cup_range() {
        let range = cup_to_bust_range(80, "C", Region::Cn);
        assert_eq!(range.median, cm(95.0));
        assert_eq!(range.min, cm(93.75));
        assert_eq!(range.max, cm(96.25));

        let range = cup_to_bust_range(30, "DD", Region::Us);
        assert_eq!(range.median, inch(33.0));
        assert_eq!(range.min, inch(32.5));
        assert_eq!(range.max, inch(33.5));
    }

    #[test]
    fn test_negative_difference_falls_back() {
        // US "A" is -1 inch over the band
        let range = cup_to_bust_range(34, "A", Region::Us);
        let base = inch(34.0);
        assert_eq!(range.min, base);
        assert_eq!(range.max, base.add(cm(10.0)));
        assert_eq!(range.median, base.add(cm(5.0)));
    }

    #[test]
    fn test_zero_difference_is_not_fallback() {
        // US "B" sits exactly on the band
        let range = cup_to_bust_range(34, "B", Region::Us);
        assert_eq!(range.median, inch(34.0));
        assert_eq!(range.min, inch(33.5));
    }

    #[test]
    fn test_size_to_measurements() {
        let body = bra_size_to_measurements(80, "C", Region::Cn);
        assert_eq!(body.underbust, cm(80.0));
        assert_eq!(body.bust, cm(95.0));
    }

    #[test]
    fn test_cup_options_cn() {
        let cups = cup_options(Region::Cn, 10);
        assert_eq!(cups, ["AA", "A", "B", "C", "D", "E", "F", "G", "H", "I"]);
    }

    #[test]
    fn test_cup_options_jp_starts_below_threshold() {
        let cups = cup_options(Region::Jp, 4);
        assert_eq!(cups, ["AAA", "AA", "A", "B"]);
    }

    #[test]
    fn test_cup_options_us_starts_at_threshold() {
        let cups = cup_options(Region::Us, 8);
        assert_eq!(cups, ["A", "B", "C", "D", "DD", "DDD", "G", "H"]);
    }

    #[test]
    fn test_cup_options_extend_past_z() {
        let cups = cup_options(Region::Cn, DEFAULT_MAX_CUPS);
        assert_eq!(cups.len(), DEFAULT_MAX_CUPS);
        assert_eq!(cups[26], "Z");
        assert_eq!(cups[27], "1A");
        assert_eq!(cups[99], "3U");
    }

    #[test]
    fn test_band_options_cn() {
        let bands = band_options(Region::Cn, None, None);
        assert_eq!(bands.first(), Some(&30));
        assert_eq!(bands.last(), Some(&200));
        assert_eq!(bands.len(), 35);
        assert!(bands.windows(2).all(|w| w[1] - w[0] == 5));
    }

    #[test]
    fn test_band_options_us() {
        let bands = band_options(Region::Us, None, None);
        assert_eq!(bands.first(), Some(&12));
        assert_eq!(bands.last(), Some(&78));
        assert!(bands.windows(2).all(|w| w[1] - w[0] == 2));
    }

    #[test]
    fn test_band_options_custom_bounds() {
        let bands = band_options(Region::Uk, Some(inch(27.5)), Some(inch(40.5)));
        assert_eq!(bands, [28, 30, 32, 34, 36, 38, 40]);

        let bands = band_options(Region::Jp, Some(cm(60.0)), Some(cm(80.0)));
        assert_eq!(bands, [60, 65, 70, 75, 80]);
    }

    #[test]
    fn test_band_options_empty_range() {
        assert!(band_options(Region::Cn, Some(cm(81.0)), Some(cm(84.0))).is_empty());
        assert!(band_options(Region::Cn, Some(cm(90.0)), Some(cm(80.0))).is_empty());
    }

    #[test]
    fn test_bra_size_display_and_parse() {
        assert_eq!(BraSize::new(30, "DD").to_string(), "30DD");
        assert_eq!("34DD".parse::<BraSize>().unwrap(), BraSize::new(34, "DD"));
        assert_eq!("75c".parse::<BraSize>().unwrap(), BraSize::new(75, "C"));
        assert_eq!("34 1A".parse::<BraSize>().unwrap(), BraSize::new(34, "1A"));
        assert_eq!("34-2B".parse::<BraSize>().unwrap(), BraSize::new(34, "2B"));
    }

    #[test]
    fn test_bra_size_parse_errors() {
        assert_eq!(
            "DD".parse::<BraSize>(),
            Err(ParseBraSizeError::MissingBand("DD".to_string()))
        );
        assert_eq!(
            "34".parse::<BraSize>(),
            Err(ParseBraSizeError::MissingCup("34".to_string()))
        );
    }

    #[test]
    fn test_range_contains() {
        let range = band_to_underbust_range(80, Region::Cn);
        assert!(range.contains(cm(78.0)));
        assert!(range.contains(inch(31.0)));
        assert!(!range.contains(cm(83.0)));
    }
}
