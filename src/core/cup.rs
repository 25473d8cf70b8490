//! Linear cup strategy - bust difference <-> cup name
//!
//! Every region sizes cups linearly: differences below the first-cup
//! threshold get the smallest cup, and each further `cup_step` moves one cup
//! up. The regions differ only in threshold, step, smallest-cup name and the
//! unit the threshold is stated in.

use serde::Serialize;

use crate::core::cup_name;
use crate::core::measurement::{Measurement, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearCupStrategy {
    /// Smallest difference that earns the first non-minimal cup
    pub first_cup_threshold: Measurement,
    /// Difference covered by one cup
    pub cup_step: Measurement,
    /// Cup reported below the threshold
    pub below_first_cup_name: &'static str,
    /// Difference reported back for the smallest cup
    pub below_first_cup_value: Measurement,
}

impl LinearCupStrategy {
    pub const fn new(
        first_cup_threshold: Measurement,
        cup_step: Measurement,
        below_first_cup_name: &'static str,
        below_first_cup_value: Measurement,
    ) -> Self {
        Self {
            first_cup_threshold,
            cup_step,
            below_first_cup_name,
            below_first_cup_value,
        }
    }

    /// Unit all comparisons are made in (the threshold's own unit)
    ///
    /// Thresholds such as "-1 inch" or "6.5 cm" are exact in their native
    /// unit; comparing there keeps boundaries where the sizing chart put them.
    pub fn native_unit(&self) -> Unit {
        self.first_cup_threshold.unit
    }

    /// Cup index for a bust difference
    pub fn measurement_to_cup_index(&self, difference: Measurement) -> usize {
        let unit = self.native_unit();
        let diff = difference.value_in(unit);
        let threshold = self.first_cup_threshold.value_in(unit);
        if diff < threshold {
            return 0;
        }
        let step = self.cup_step.value_in(unit);
        (((diff - threshold) / step).floor() as usize).saturating_add(1)
    }

    /// Cup name for a bust difference
    pub fn measurement_to_cup_name(&self, difference: Measurement, names: &[&str]) -> String {
        match self.measurement_to_cup_index(difference) {
            0 => self.below_first_cup_name.to_string(),
            index => cup_name::encode(index, names),
        }
    }

    /// Representative bust difference for a cup name
    ///
    /// Unrecognized names decode to the smallest cup.
    pub fn cup_name_to_measurement(&self, cup: &str, names: &[&str]) -> Measurement {
        let unit = self.native_unit();
        match cup_name::decode(cup, names) {
            0 => self.below_first_cup_value.convert(unit),
            index => {
                let threshold = self.first_cup_threshold.value_in(unit);
                let step = self.cup_step.value_in(unit);
                Measurement::new(threshold + (index - 1) as f64 * step, unit)
            }
        }
    }
}
