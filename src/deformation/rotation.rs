//! Permanent tectonic tilt

use crate::canvas::{rotate_about_center, Canvas};
use crate::constants::{
    ROTATION_GENTLE_ADJUSTMENT, ROTATION_GENTLE_BAND, ROTATION_STEEP_ADJUSTMENT, ROTATION_STEEP_BAND,
};
use rand::Rng;

/// Parameters of the one-shot rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationParams {
    /// Tilt in degrees, counter-clockwise
    pub angle: f64,
}

impl RotationParams {
    /// Pick the gentle [15, 25) or steep [25, 35) band with equal odds,
    /// then draw the angle uniformly within it
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let band = if rng.gen_bool(0.5) { ROTATION_GENTLE_BAND } else { ROTATION_STEEP_BAND };
        Self { angle: rng.gen_range(band) }
    }

    /// 100 for a gentle tilt, 150 otherwise
    pub fn cursor_adjustment(&self) -> isize {
        if ROTATION_GENTLE_BAND.contains(&self.angle) {
            ROTATION_GENTLE_ADJUSTMENT
        } else {
            ROTATION_STEEP_ADJUSTMENT
        }
    }
}

/// Rotate the canvas about its centre; the tilt is never undone
pub fn rotate(canvas: &Canvas, params: &RotationParams) -> (Canvas, isize) {
    (rotate_about_center(canvas, params.angle), params.cursor_adjustment())
}
