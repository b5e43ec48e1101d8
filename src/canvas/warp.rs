//! Whole-canvas remaps
//!
//! Every function here either returns a fresh canvas of identical
//! dimensions or rearranges pixels without changing the canvas size.
//! Pixels mapped from outside the source grid come back black.

use super::raster::{Canvas, Rgb};

/// Rotate the canvas about its centre by `degrees`
///
/// Positive angles turn the picture counter-clockwise as displayed
/// (y grows downward). The centre is `(width / 2, height / 2)` in integer
/// pixel coordinates. Sampling is nearest-neighbour: each destination pixel
/// is mapped back through the inverse rotation and takes the closest source
/// pixel, so no new colors are introduced.
pub fn rotate_about_center(canvas: &Canvas, degrees: f64) -> Canvas {
    let (width, height) = (canvas.width(), canvas.height());
    let mut rotated = Canvas::new(width, height);
    if width == 0 || height == 0 {
        return rotated;
    }

    let (sin, cos) = degrees.to_radians().sin_cos();
    let cx = (width / 2) as f64;
    let cy = (height / 2) as f64;
    let src = canvas.image();

    for (x, y, pixel) in rotated.image_mut().enumerate_pixels_mut() {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        // Inverse of the forward map [cos sin; -sin cos]
        let sx = (cos * dx - sin * dy + cx).round();
        let sy = (sin * dx + cos * dy + cy).round();
        if sx < 0.0 || sy < 0.0 {
            continue;
        }
        let (sx, sy) = (sx as u32, sy as u32);
        if sx < src.width() && sy < src.height() {
            *pixel = *src.get_pixel(sx, sy);
        }
    }
    rotated
}

/// Shift every column from `from_x` to the right edge down by `offset` rows
///
/// Rows leaving the bottom re-enter at the top (negative offsets shift up).
/// Nothing is discarded.
pub fn shift_columns_wrapping(canvas: &mut Canvas, from_x: usize, offset: isize) {
    let (width, height) = (canvas.width(), canvas.height());
    if height == 0 || from_x >= width {
        return;
    }
    let shift = offset.rem_euclid(height as isize) as usize;
    if shift == 0 {
        return;
    }

    let image = canvas.image_mut();
    let mut column: Vec<Rgb> = Vec::with_capacity(height);
    for x in from_x as u32..width as u32 {
        column.clear();
        column.extend((0..height as u32).map(|y| *image.get_pixel(x, y)));
        column.rotate_right(shift);
        for (y, &color) in column.iter().enumerate() {
            image.put_pixel(x, y as u32, color);
        }
    }
}
