//! cup-holder: bra size conversion
//!
//! Converts underbust and bust measurements into region-specific bra sizes
//! and back, for the CN, US, US classic, JP and UK sizing systems.

pub mod cli;
pub mod core;

pub use crate::core::{
    band_options, band_to_underbust_range, bra_size_to_measurements, calculate_bra_size,
    cup_options, cup_to_bust_range, cm, inch, BraSize, Measurement, Region, SizeRange, Unit,
};
