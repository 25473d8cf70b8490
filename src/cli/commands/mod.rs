//! CLI command implementations

pub mod bands;
pub mod chart;
pub mod completions;
pub mod config;
pub mod cups;
pub mod measure;
pub mod regions;
pub mod size;
