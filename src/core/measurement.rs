//! Measurement - a length value tagged with its unit
//!
//! Every value can be projected into either unit through the fixed factor
//! 1 inch = 2.54 cm, so arithmetic between mixed units is always defined.
//! Comparison and equality go through the centimeter projection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Add, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Absolute tolerance (in cm) for measurement equality
pub const EQUALITY_TOLERANCE_CM: f64 = 0.001;

/// Length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Cm,
    Inch,
}

impl Unit {
    /// Short suffix used when printing values
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Cm => "cm",
            Unit::Inch => "in",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Cm => write!(f, "cm"),
            Unit::Inch => write!(f, "inch"),
        }
    }
}

/// Error returned when a unit name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown unit '{0}' (expected cm or inch)")]
pub struct ParseUnitError(pub String);

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(Unit::Cm),
            "in" | "inch" | "inches" => Ok(Unit::Inch),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}

/// A length value with an explicit unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: Unit,
}

/// Shorthand for a centimeter measurement
pub const fn cm(value: f64) -> Measurement {
    Measurement::new(value, Unit::Cm)
}

/// Shorthand for an inch measurement
pub const fn inch(value: f64) -> Measurement {
    Measurement::new(value, Unit::Inch)
}

impl Measurement {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Value projected into centimeters
    pub fn to_cm(&self) -> f64 {
        match self.unit {
            Unit::Cm => self.value,
            Unit::Inch => self.value * CM_PER_INCH,
        }
    }

    /// Value projected into inches
    pub fn to_inch(&self) -> f64 {
        match self.unit {
            Unit::Cm => self.value / CM_PER_INCH,
            Unit::Inch => self.value,
        }
    }

    /// Value projected into the given unit
    pub fn value_in(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Cm => self.to_cm(),
            Unit::Inch => self.to_inch(),
        }
    }

    /// The same length re-expressed in another unit
    pub fn convert(&self, unit: Unit) -> Measurement {
        Measurement::new(self.value_in(unit), unit)
    }

    /// Sum keeping this measurement's unit; `other` is projected first
    pub fn add(&self, other: Measurement) -> Measurement {
        Measurement::new(self.value + other.value_in(self.unit), self.unit)
    }

    /// Difference keeping this measurement's unit; `other` is projected first
    pub fn subtract(&self, other: Measurement) -> Measurement {
        Measurement::new(self.value - other.value_in(self.unit), self.unit)
    }

    pub fn multiply(&self, factor: f64) -> Measurement {
        Measurement::new(self.value * factor, self.unit)
    }

    pub fn divide(&self, divisor: f64) -> Measurement {
        Measurement::new(self.value / divisor, self.unit)
    }

    /// Strict comparison through the centimeter projection
    pub fn less_than(&self, other: &Measurement) -> bool {
        self.to_cm() < other.to_cm()
    }

    /// Equality within [`EQUALITY_TOLERANCE_CM`]
    ///
    /// Repeated unit conversion drifts by a few ulps, so exact float
    /// equality would reject lengths that are physically the same.
    pub fn equals(&self, other: &Measurement) -> bool {
        (self.to_cm() - other.to_cm()).abs() < EQUALITY_TOLERANCE_CM
    }
}

impl Add for Measurement {
    type Output = Measurement;

    fn add(self, rhs: Measurement) -> Measurement {
        Measurement::add(&self, rhs)
    }
}

impl Sub for Measurement {
    type Output = Measurement;

    fn sub(self, rhs: Measurement) -> Measurement {
        Measurement::subtract(&self, rhs)
    }
}

// Tolerance-based, so not transitive over long chains; fine for sizing.
impl PartialEq for Measurement {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialOrd for Measurement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.equals(other) {
            Some(Ordering::Equal)
        } else {
            self.to_cm().partial_cmp(&other.to_cm())
        }
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.value, self.unit.symbol()),
            None => write!(f, "{} {}", self.value, self.unit.symbol()),
        }
    }
}
