//! Igneous intrusions cutting vertically through the stack

use crate::canvas::Canvas;
use crate::constants::{
    INTRUSION_COLOR, INTRUSION_HALF_WIDTH_RANGE, INTRUSION_HATCH_OVERHANG, INTRUSION_HATCH_SPACING,
    INTRUSION_MARKER_WIDTH,
};
use rand::Rng;
use std::ops::RangeInclusive;

/// Parameters of a single intrusion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntrusionParams {
    /// Column of the dike axis
    pub x: usize,
    /// Half-width of the filled dike
    pub half_width: usize,
}

impl IntrusionParams {
    /// Draw an axis column from `band` and a half-width in 25..=50
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, band: &RangeInclusive<usize>) -> Self {
        let half_width = rng.gen_range(INTRUSION_HALF_WIDTH_RANGE);
        let x = rng.gen_range(band.clone());
        Self { x, half_width }
    }
}

/// Draw an intrusion from the canvas bottom up to the height cursor
///
/// Draws in place: a marker along the axis, a filled dike of the sampled
/// half-width, and hatch lines every 25 rows overhanging the dike by 10
/// pixels on each side. The cursor is not changed.
pub fn intrude(canvas: &mut Canvas, cursor: usize, params: &IntrusionParams) {
    let width = canvas.width();
    let bottom = canvas.height() as isize;
    let top = cursor as isize;

    canvas.vertical_line(params.x as isize, bottom, top, INTRUSION_MARKER_WIDTH, INTRUSION_COLOR);

    let left = params.x.saturating_sub(params.half_width);
    let right = (params.x + params.half_width).min(width);
    canvas.fill_rect(left as isize, top, right as isize, bottom, INTRUSION_COLOR);

    let hatch_left = left.saturating_sub(INTRUSION_HATCH_OVERHANG);
    let hatch_right = (right + INTRUSION_HATCH_OVERHANG).min(width);
    for y in (cursor..canvas.height()).step_by(INTRUSION_HATCH_SPACING) {
        canvas.horizontal_line(y as isize, hatch_left as isize, hatch_right as isize, 1, INTRUSION_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::WHITE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn dike_spans_from_cursor_to_bottom() {
        let mut canvas = Canvas::filled(1000, 1000, WHITE);
        intrude(&mut canvas, 500, &IntrusionParams { x: 400, half_width: 30 });

        for y in 500..1000 {
            assert_eq!(canvas.pixel(400, y), INTRUSION_COLOR);
            assert_eq!(canvas.pixel(370, y), INTRUSION_COLOR);
            assert_eq!(canvas.pixel(430, y), INTRUSION_COLOR);
        }
        assert_eq!(canvas.pixel(400, 499), WHITE);
        assert_eq!(canvas.pixel(369 - INTRUSION_HATCH_OVERHANG, 600), WHITE);
    }

    #[test]
    fn hatch_lines_overhang_the_dike() {
        let mut canvas = Canvas::filled(1000, 1000, WHITE);
        intrude(&mut canvas, 500, &IntrusionParams { x: 400, half_width: 30 });

        // Hatch rows at 500, 525, 550, ...
        assert_eq!(canvas.pixel(365, 500), INTRUSION_COLOR);
        assert_eq!(canvas.pixel(365, 525), INTRUSION_COLOR);
        assert_eq!(canvas.pixel(440, 975), INTRUSION_COLOR);
        assert_eq!(canvas.pixel(365, 510), WHITE);
    }

    #[test]
    fn intrusion_near_edge_is_clipped() {
        let mut canvas = Canvas::filled(100, 100, WHITE);
        intrude(&mut canvas, 50, &IntrusionParams { x: 95, half_width: 25 });
        assert_eq!(canvas.pixel(99, 60), INTRUSION_COLOR);
        assert_eq!(canvas.pixel(70, 60), INTRUSION_COLOR);
    }

    #[test]
    fn later_intrusion_overwrites_earlier() {
        let mut canvas = Canvas::filled(1000, 1000, WHITE);
        intrude(&mut canvas, 600, &IntrusionParams { x: 400, half_width: 30 });
        let before = canvas.count(INTRUSION_COLOR);
        intrude(&mut canvas, 400, &IntrusionParams { x: 420, half_width: 30 });
        assert!(canvas.count(INTRUSION_COLOR) > before);
        assert_eq!(canvas.pixel(420, 450), INTRUSION_COLOR);
    }

    #[test]
    fn sampled_axis_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(21);
        let band = 350..=650;
        for _ in 0..100 {
            let params = IntrusionParams::sample(&mut rng, &band);
            assert!(band.contains(&params.x));
            assert!(INTRUSION_HALF_WIDTH_RANGE.contains(&params.half_width));
        }
    }
}
