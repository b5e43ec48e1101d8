//! Simulation configuration and its validation

use crate::canvas::Rgb;
use crate::constants::{DEFAULT_BOTTOM_MARGIN, DEFAULT_HEIGHT, DEFAULT_WIDTH, RESERVED_COLORS};
use crate::error::ConfigError;
use crate::palette::RockPalette;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Configuration for a stratigraphy simulation run
///
/// Every field has a documented default matching the reference
/// configuration. Use the `with_*` builders to change individual values,
/// or [`SimulationConfig::from_toml_str`] to load a configuration file in
/// which missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Canvas width in pixels (default 1000)
    pub width: usize,
    /// Canvas height in pixels (default 1000)
    pub height: usize,
    /// Deposition stops once the height cursor reaches this y-coordinate (default 300)
    pub bottom_margin: usize,
    /// Rock types layers are drawn from (default: limestone, sandstone, siltstone, breccia)
    pub palette: RockPalette,
    /// Thickness of the first layer laid on the canvas bottom (default 270..=300)
    pub foundation_thickness: RangeInclusive<usize>,
    /// Thickness of each layer deposited inside the loop (default 25..=75)
    pub deposition_thickness: RangeInclusive<usize>,
    /// Thickness of the closing layer; its lower bound is also the minimum
    /// cursor height at which that layer is drawn (default 270..=300)
    pub capping_thickness: RangeInclusive<usize>,
    /// Chance per iteration of the one-shot bend (default 0.10)
    pub bend_probability: f64,
    /// Chance per iteration of a fault (default 0.10)
    pub fault_probability: f64,
    /// Chance per iteration of the one-shot rotation (default 0.10)
    pub rotation_probability: f64,
    /// Chance per iteration of an intrusion inside the window (default 0.05)
    pub intrusion_probability: f64,
    /// Exclusive cursor window `(low, high)` in which intrusions may fire (default (300, 700))
    pub intrusion_window: (usize, usize),
    /// Columns an intrusion axis may be placed in (default 350..=650)
    pub intrusion_band: RangeInclusive<usize>,
    /// Upper bound on deposition iterations; see [`SimulationConfig::iteration_cap`]
    /// for the value used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            bottom_margin: DEFAULT_BOTTOM_MARGIN,
            palette: RockPalette::default(),
            foundation_thickness: 270..=300,
            deposition_thickness: 25..=75,
            capping_thickness: 270..=300,
            bend_probability: 0.1,
            fault_probability: 0.1,
            rotation_probability: 0.1,
            intrusion_probability: 0.05,
            intrusion_window: (300, 700),
            intrusion_band: 350..=650,
            max_iterations: None,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with the reference defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document and validate the result
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_bottom_margin(mut self, margin: usize) -> Self {
        self.bottom_margin = margin;
        self
    }

    pub fn with_palette(mut self, palette: RockPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_foundation_thickness(mut self, range: RangeInclusive<usize>) -> Self {
        self.foundation_thickness = range;
        self
    }

    pub fn with_deposition_thickness(mut self, range: RangeInclusive<usize>) -> Self {
        self.deposition_thickness = range;
        self
    }

    pub fn with_capping_thickness(mut self, range: RangeInclusive<usize>) -> Self {
        self.capping_thickness = range;
        self
    }

    /// Set the bend, fault, rotation and intrusion probabilities at once
    pub fn with_probabilities(mut self, bend: f64, fault: f64, rotation: f64, intrusion: f64) -> Self {
        self.bend_probability = bend;
        self.fault_probability = fault;
        self.rotation_probability = rotation;
        self.intrusion_probability = intrusion;
        self
    }

    /// Disable every deformation operator, leaving plain deposition
    pub fn without_deformation(self) -> Self {
        self.with_probabilities(0.0, 0.0, 0.0, 0.0)
    }

    pub fn with_intrusion_window(mut self, low: usize, high: usize) -> Self {
        self.intrusion_window = (low, high);
        self
    }

    pub fn with_intrusion_band(mut self, band: RangeInclusive<usize>) -> Self {
        self.intrusion_band = band;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Number of deposition iterations after which the run is closed
    ///
    /// Defaults to twice the number of thinnest layers that fit between the
    /// canvas bottom and the margin: `2 * ceil((height - bottom_margin) / min
    /// deposition thickness)`, i.e. 56 for the reference configuration. Every
    /// iteration deposits at least one layer, so an undisturbed run never gets
    /// near it; it only ends runs where faults keep pushing the cursor back
    /// down.
    pub fn iteration_cap(&self) -> usize {
        self.max_iterations.unwrap_or_else(|| {
            let span = self.height.saturating_sub(self.bottom_margin);
            let thinnest = (*self.deposition_thickness.start()).max(1);
            (2 * span.div_ceil(thinnest)).max(1)
        })
    }

    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions { width: self.width, height: self.height });
        }
        if self.bottom_margin >= self.height {
            return Err(ConfigError::MarginOutOfRange { margin: self.bottom_margin, height: self.height });
        }

        self.validate_palette()?;

        for (name, range) in [
            ("foundation", &self.foundation_thickness),
            ("deposition", &self.deposition_thickness),
            ("capping", &self.capping_thickness),
        ] {
            if *range.start() == 0 || range.start() > range.end() {
                return Err(ConfigError::InvalidThickness { name, start: *range.start(), end: *range.end() });
            }
        }

        for (name, value) in [
            ("bend", self.bend_probability),
            ("fault", self.fault_probability),
            ("rotation", self.rotation_probability),
            ("intrusion", self.intrusion_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }

        let (low, high) = self.intrusion_window;
        if low >= high || high > self.height {
            return Err(ConfigError::InvalidIntrusionWindow { low, high, height: self.height });
        }

        let band = &self.intrusion_band;
        if band.start() > band.end() || *band.end() >= self.width {
            return Err(ConfigError::InvalidIntrusionBand {
                start: *band.start(),
                end: *band.end(),
                width: self.width,
            });
        }

        if self.max_iterations == Some(0) {
            return Err(ConfigError::ZeroIterationCap);
        }
        Ok(())
    }

    fn validate_palette(&self) -> Result<(), ConfigError> {
        if self.palette.len() < 2 {
            return Err(ConfigError::PaletteTooSmall(self.palette.len()));
        }
        let mut seen: Vec<Rgb> = Vec::with_capacity(self.palette.len());
        for rock in &self.palette {
            if RESERVED_COLORS.contains(&rock.color) {
                return Err(ConfigError::ReservedColor { name: rock.name.clone(), color: rock.color });
            }
            if seen.contains(&rock.color) {
                return Err(ConfigError::DuplicateColor(rock.color));
            }
            seen.push(rock.color);
        }
        Ok(())
    }
}
