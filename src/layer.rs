//! Layer stack builder: paints one full-width band per call

use crate::canvas::{Canvas, Rgb};
use crate::constants::BORDER_COLOR;
use crate::palette::{RockPalette, RockType};
use rand::Rng;

/// Paint a layer of `thickness` pixels directly above the height cursor
///
/// The rock is chosen uniformly from the palette minus `last_color`, so two
/// consecutive layers never share a color. The band spans the full canvas
/// width from `max(0, cursor - thickness)` down to `cursor` and is outlined
/// with a 1-pixel black border.
///
/// Returns the new cursor and the chosen rock type. The palette must hold
/// at least two distinct colors and `thickness` must be positive.
pub fn add_layer<'p, R: Rng + ?Sized>(
    canvas: &mut Canvas,
    cursor: usize,
    thickness: usize,
    last_color: Option<Rgb>,
    palette: &'p RockPalette,
    rng: &mut R,
) -> (usize, &'p RockType) {
    debug_assert!(thickness > 0, "layer thickness must be positive");

    let candidates = palette.candidates(last_color);
    debug_assert!(!candidates.is_empty(), "palette has no color other than the last one");
    let rock = candidates[rng.gen_range(0..candidates.len())];

    let top = cursor.saturating_sub(thickness);
    let right = canvas.width() as isize;
    canvas.fill_rect(0, top as isize, right, cursor as isize, rock.color);
    canvas.stroke_rect(0, top as isize, right, cursor as isize, BORDER_COLOR);

    (top, rock)
}
