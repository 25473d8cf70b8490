//! Core module - the sizing engine and user configuration

pub mod band;
pub mod config;
pub mod converter;
pub mod cup;
pub mod cup_name;
pub mod measurement;
pub mod region;

pub use band::BandStrategy;
pub use config::{Config, ConfigError, ConfigPatch};
pub use cup::LinearCupStrategy;
pub use measurement::{cm, inch, Measurement, ParseUnitError, Unit};
pub use region::{ParseRegionError, Region, RegionConfig};

pub use converter::{
    band_options, band_to_underbust_range, bra_size_to_measurements, calculate_bra_size,
    calculate_cup, cup_options, cup_to_bust_range, underbust_to_band, BodyMeasurements, BraSize,
    ParseBraSizeError, SizeRange, DEFAULT_BAND_MAX_UNDERBUST, DEFAULT_BAND_MIN_UNDERBUST,
    DEFAULT_MAX_CUPS,
};
