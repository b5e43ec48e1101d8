//! Raster substrate for the simulation
//!
//! This module contains the pixel grid every operator reads and writes:
//! - RGB color values
//! - The fixed-size mutable canvas with clipped drawing primitives
//! - Whole-canvas remaps (rotation about the centre, wrapping column shifts)

pub mod raster;
pub mod warp;

pub use raster::{hex, rgb, Canvas, Rgb, BLACK, WHITE};

pub use warp::{rotate_about_center, shift_columns_wrapping};
