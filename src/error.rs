//! Errors raised while validating a simulation configuration

use crate::canvas::Rgb;

/// A configuration the simulation refuses to run with
///
/// Raised before any canvas is allocated, so a failed construction never
/// leaves a partially built cross-section behind.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("canvas dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("palette needs at least 2 rock types, got {0}")]
    PaletteTooSmall(usize),
    #[error("palette color {0:?} is used by more than one rock type")]
    DuplicateColor(Rgb),
    #[error("rock type {name} uses reserved color {color:?}")]
    ReservedColor { name: String, color: Rgb },
    #[error("{name} probability must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("bottom margin {margin} must be below canvas height {height}")]
    MarginOutOfRange { margin: usize, height: usize },
    #[error("{name} thickness range {start}..={end} is empty or starts at zero")]
    InvalidThickness { name: &'static str, start: usize, end: usize },
    #[error("intrusion height window ({low}, {high}) is empty or exceeds canvas height {height}")]
    InvalidIntrusionWindow { low: usize, high: usize, height: usize },
    #[error("intrusion column band {start}..={end} lies outside canvas width {width}")]
    InvalidIntrusionBand { start: usize, end: usize, width: usize },
    #[error("iteration cap must be non-zero")]
    ZeroIterationCap,
    #[error("could not parse configuration")]
    Parse(#[from] toml::de::Error),
}
