//! Constants used throughout the stratigraphy simulation

use crate::canvas::{rgb, Rgb, BLACK};

/// Canvas width of the reference configuration (pixels)
pub const DEFAULT_WIDTH: usize = 1000;

/// Canvas height of the reference configuration (pixels)
pub const DEFAULT_HEIGHT: usize = 1000;

/// Deposition stops once the height cursor reaches this y-coordinate
pub const DEFAULT_BOTTOM_MARGIN: usize = 300;

/// Unpainted canvas color, also used for layer outlines
pub const BACKGROUND: Rgb = BLACK;

/// Color of the 1-pixel outline drawn around every layer
pub const BORDER_COLOR: Rgb = BLACK;

/// Color of the vertical marker drawn at a fault plane
pub const FAULT_MARKER_COLOR: Rgb = BLACK;

/// Reserved color for intrusion dikes; never chosen for a layer
pub const INTRUSION_COLOR: Rgb = rgb(255, 0, 0);

/// Colors a palette may not contain
pub const RESERVED_COLORS: [Rgb; 2] = [BACKGROUND, INTRUSION_COLOR];

/// Bend factor is sampled uniformly from this half-open range
pub const BEND_FACTOR_RANGE: std::ops::Range<f64> = 0.1..0.3;

/// Cursor compensation after an upward bend
pub const BEND_UP_ADJUSTMENT: isize = 50;

/// Cursor compensation after a downward bend
pub const BEND_DOWN_ADJUSTMENT: isize = 75;

/// Fault plane angles (degrees): one of the two bands, chosen with equal odds
pub const FAULT_ANGLE_BANDS: [std::ops::Range<f64>; 2] = [15.0..35.0, 325.0..345.0];

/// Vertical throw of a fault (pixels, inclusive)
pub const FAULT_OFFSET_RANGE: std::ops::RangeInclusive<usize> = 15..=50;

/// Width of the marker line drawn along a fault plane
pub const FAULT_MARKER_WIDTH: usize = 2;

/// Gentle tilt band (degrees) and its cursor adjustment
pub const ROTATION_GENTLE_BAND: std::ops::Range<f64> = 15.0..25.0;
pub const ROTATION_GENTLE_ADJUSTMENT: isize = 100;

/// Steep tilt band (degrees) and its cursor adjustment
pub const ROTATION_STEEP_BAND: std::ops::Range<f64> = 25.0..35.0;
pub const ROTATION_STEEP_ADJUSTMENT: isize = 150;

/// Half-width of an intrusion dike (pixels, inclusive)
pub const INTRUSION_HALF_WIDTH_RANGE: std::ops::RangeInclusive<usize> = 25..=50;

/// Width of the marker line drawn along an intrusion axis
pub const INTRUSION_MARKER_WIDTH: usize = 3;

/// Vertical spacing of intrusion hatch lines
pub const INTRUSION_HATCH_SPACING: usize = 25;

/// How far hatch lines overhang the dike on each side
pub const INTRUSION_HATCH_OVERHANG: usize = 10;
