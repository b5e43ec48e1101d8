//! Faulting: a rotate, shift, derotate transform
//!
//! The canvas is turned so the fault plane becomes vertical, the right-hand
//! block is thrown down with wrap-around, a marker is drawn along the plane
//! and the canvas is turned back.

use crate::canvas::{rotate_about_center, shift_columns_wrapping, Canvas};
use crate::constants::{FAULT_ANGLE_BANDS, FAULT_MARKER_COLOR, FAULT_MARKER_WIDTH, FAULT_OFFSET_RANGE};
use rand::Rng;

/// Parameters of a single fault
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultParams {
    /// Fault plane angle in degrees, measured counter-clockwise
    pub angle: f64,
    /// Vertical throw of the right-hand block in pixels
    pub offset: usize,
}

impl FaultParams {
    /// Draw an angle in [15, 35) or [325, 345) and an offset in 15..=50
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let band = if rng.gen_bool(0.5) { &FAULT_ANGLE_BANDS[0] } else { &FAULT_ANGLE_BANDS[1] };
        let angle = rng.gen_range(band.clone());
        let offset = rng.gen_range(FAULT_OFFSET_RANGE);
        Self { angle, offset }
    }

    /// The height cursor moves by the full throw
    pub fn cursor_adjustment(&self) -> isize {
        self.offset as isize
    }
}

/// Fault the canvas, returning the new canvas and the cursor adjustment
///
/// Rotation is about the canvas centre in both directions.
pub fn fault(canvas: &Canvas, params: &FaultParams) -> (Canvas, isize) {
    let split = canvas.width() / 2;
    let bottom = canvas.height() as isize - 1;

    let mut rotated = rotate_about_center(canvas, params.angle);
    shift_columns_wrapping(&mut rotated, split, params.offset as isize);
    rotated.vertical_line(split as isize, 0, bottom, FAULT_MARKER_WIDTH, FAULT_MARKER_COLOR);
    let faulted = rotate_about_center(&rotated, -params.angle);

    (faulted, params.cursor_adjustment())
}
