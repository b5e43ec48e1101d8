//! Pixel grid and drawing primitives, backed by an [`image::RgbImage`]

use image::{imageops, RgbImage};
use std::fmt;

/// An RGB color
pub type Rgb = image::Rgb<u8>;

pub const BLACK: Rgb = rgb(0, 0, 0);
pub const WHITE: Rgb = rgb(255, 255, 255);

/// Create a color from its red, green and blue channels
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    image::Rgb([r, g, b])
}

/// `#rrggbb` notation, for logs and messages
pub fn hex(color: Rgb) -> String {
    let [r, g, b] = color.0;
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Serialize a color as `{ r, g, b }`
pub mod serde_rgb {
    use super::{rgb, Rgb};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Channels {
        r: u8,
        g: u8,
        b: u8,
    }

    pub fn serialize<S: Serializer>(color: &Rgb, serializer: S) -> Result<S::Ok, S::Error> {
        let [r, g, b] = color.0;
        Channels { r, g, b }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgb, D::Error> {
        let Channels { r, g, b } = Channels::deserialize(deserializer)?;
        Ok(rgb(r, g, b))
    }
}

/// A fixed-size grid of RGB pixels
///
/// `y = 0` is the top row. Drawing primitives take signed coordinates and
/// silently clip whatever falls outside the grid.
#[derive(Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with black
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, BLACK)
    }

    /// Create a canvas filled with a single color
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            image: RgbImage::from_pixel(width as u32, height as u32, color),
        }
    }

    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    /// The underlying image, e.g. for saving
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.image.pixels().copied()
    }

    /// One row of pixels, left to right
    ///
    /// Panics if `y` is outside the grid.
    pub fn row(&self, y: usize) -> impl Iterator<Item = Rgb> + '_ {
        assert!(y < self.height(), "row {y} outside {}x{} canvas", self.width(), self.height());
        (0..self.width()).map(move |x| *self.image.get_pixel(x as u32, y as u32))
    }

    /// Get the pixel at (x, y), or None outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width() && y < self.height() {
            Some(*self.image.get_pixel(x as u32, y as u32))
        } else {
            None
        }
    }

    /// Get the pixel at (x, y)
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        assert!(
            x < self.width() && y < self.height(),
            "pixel ({x}, {y}) outside {}x{} canvas",
            self.width(),
            self.height()
        );
        *self.image.get_pixel(x as u32, y as u32)
    }

    /// Set the pixel at (x, y); writes outside the grid are dropped
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        if x < self.width() && y < self.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Fill the rectangle spanned by two inclusive corners
    ///
    /// Corners may be given in any order and may lie outside the canvas.
    pub fn fill_rect(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, color: Rgb) {
        let Some((xa, xb)) = clip_span(x0, x1, self.width()) else { return };
        let Some((ya, yb)) = clip_span(y0, y1, self.height()) else { return };
        for y in ya..=yb {
            for x in xa..=xb {
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }
    }

    /// Draw a 1-pixel outline of the rectangle spanned by two inclusive corners
    pub fn stroke_rect(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, color: Rgb) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        self.fill_rect(left, top, right, top, color);
        self.fill_rect(left, bottom, right, bottom, color);
        self.fill_rect(left, top, left, bottom, color);
        self.fill_rect(right, top, right, bottom, color);
    }

    /// Draw a vertical line of the given thickness centred on column `x`
    pub fn vertical_line(&mut self, x: isize, y0: isize, y1: isize, thickness: usize, color: Rgb) {
        if thickness == 0 {
            return;
        }
        let left = x - (thickness as isize - 1) / 2;
        self.fill_rect(left, y0, left + thickness as isize - 1, y1, color);
    }

    /// Draw a horizontal line of the given thickness centred on row `y`
    pub fn horizontal_line(&mut self, y: isize, x0: isize, x1: isize, thickness: usize, color: Rgb) {
        if thickness == 0 {
            return;
        }
        let top = y - (thickness as isize - 1) / 2;
        self.fill_rect(x0, top, x1, top + thickness as isize - 1, color);
    }

    /// Copy out a `width` x `height` window whose top-left corner is (x, y)
    ///
    /// The window is clipped to the canvas.
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> Canvas {
        let view = imageops::crop_imm(&self.image, x as u32, y as u32, width as u32, height as u32);
        Canvas { image: view.to_image() }
    }

    /// A window of the given size centred on the canvas centre
    pub fn crop_center(&self, width: usize, height: usize) -> Canvas {
        let x = (self.width() / 2).saturating_sub(width / 2);
        let y = (self.height() / 2).saturating_sub(height / 2);
        self.crop(x, y, width, height)
    }

    /// Draw another canvas on top of this one with its top-left corner at (x, y)
    pub fn paste(&mut self, other: &Canvas, x: isize, y: isize) {
        imageops::replace(&mut self.image, &other.image, x as i64, y as i64);
    }

    /// Count pixels of the given color
    pub fn count(&self, color: Rgb) -> usize {
        self.image.pixels().filter(|&&p| p == color).count()
    }
}

impl PartialEq for Canvas {
    fn eq(&self, other: &Self) -> bool {
        self.image.dimensions() == other.image.dimensions() && self.image.as_raw() == other.image.as_raw()
    }
}

impl Eq for Canvas {}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// Order and clip an inclusive span to `0..len`
fn clip_span(a: isize, b: isize, len: usize) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let (lo, hi) = (a.min(b), a.max(b));
    if hi < 0 || lo >= len as isize {
        return None;
    }
    Some((lo.max(0) as usize, hi.min(len as isize - 1) as usize))
}
