//! Parabolic folding

use crate::canvas::Canvas;
use crate::constants::{BACKGROUND, BEND_DOWN_ADJUSTMENT, BEND_FACTOR_RANGE, BEND_UP_ADJUSTMENT};
use rand::Rng;
use std::fmt;

/// Which way the fold bows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BendDirection {
    Up,
    Down,
}

impl BendDirection {
    /// Cursor compensation for the vertical stretch a bend introduces
    pub fn cursor_adjustment(self) -> isize {
        match self {
            BendDirection::Up => BEND_UP_ADJUSTMENT,
            BendDirection::Down => BEND_DOWN_ADJUSTMENT,
        }
    }
}

impl fmt::Display for BendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BendDirection::Up => "up",
            BendDirection::Down => "down",
        })
    }
}

/// Parameters of a single bend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BendParams {
    /// Peak displacement is `factor * width / 4` at the centre column
    pub factor: f64,
    pub direction: BendDirection,
}

impl BendParams {
    /// Draw a factor in [0.1, 0.3) and a direction with equal odds
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let factor = rng.gen_range(BEND_FACTOR_RANGE);
        let direction = if rng.gen_bool(0.5) { BendDirection::Up } else { BendDirection::Down };
        Self { factor, direction }
    }
}

/// Vertical displacement of column `x` on a canvas of the given width
pub fn displacement(factor: f64, x: usize, width: usize) -> f64 {
    let x = x as f64;
    let w = width as f64;
    factor * x * (w - x) / w
}

/// Fold the canvas along a parabola peaking at mid-width
///
/// Each source pixel moves to `y ± d(x)` (truncated toward zero). Pixels
/// landing outside the canvas are dropped. When several sources land on the
/// same destination, the one scanned last (rows top to bottom, columns left
/// to right) wins. Destinations nothing lands on stay black.
pub fn bend(canvas: &Canvas, factor: f64, direction: BendDirection) -> Canvas {
    let (width, height) = (canvas.width(), canvas.height());
    let mut bent = Canvas::filled(width, height, BACKGROUND);

    let shifts: Vec<f64> = (0..width).map(|x| displacement(factor, x, width)).collect();

    for y in 0..height {
        for (x, &d) in shifts.iter().enumerate() {
            let new_y = match direction {
                BendDirection::Down => y as f64 + d,
                BendDirection::Up => y as f64 - d,
            };
            let new_y = new_y as i64;
            if (0..height as i64).contains(&new_y) {
                bent.set(x, new_y as usize, canvas.pixel(x, y));
            }
        }
    }
    bent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{rgb, Rgb, BLACK};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const RED: Rgb = rgb(255, 0, 0);

    #[test]
    fn displacement_is_zero_at_edges_and_peaks_mid_width() {
        assert_eq!(displacement(0.2, 0, 1000), 0.0);
        assert!(displacement(0.2, 999, 1000) < 0.2);
        assert!((displacement(0.2, 500, 1000) - 50.0).abs() < 1e-9);
        assert!(displacement(0.2, 400, 1000) < displacement(0.2, 500, 1000));
    }

    #[test]
    fn downward_bend_moves_centre_column_down() {
        let mut canvas = Canvas::new(100, 100);
        canvas.set(50, 10, RED);
        // d(50) = 0.4 * 50 * 50 / 100 = 10
        let bent = bend(&canvas, 0.4, BendDirection::Down);
        assert_eq!(bent.pixel(50, 20), RED);
        assert_eq!(bent.count(RED), 1);
    }

    #[test]
    fn upward_bend_moves_centre_column_up() {
        let mut canvas = Canvas::new(100, 100);
        canvas.set(50, 30, RED);
        let bent = bend(&canvas, 0.4, BendDirection::Up);
        assert_eq!(bent.pixel(50, 20), RED);
    }

    #[test]
    fn edge_column_is_unchanged() {
        let mut canvas = Canvas::new(100, 100);
        canvas.fill_rect(0, 40, 0, 60, RED);
        let bent = bend(&canvas, 0.3, BendDirection::Down);
        for y in 40..=60 {
            assert_eq!(bent.pixel(0, y), RED);
        }
    }

    #[test]
    fn pixels_pushed_off_canvas_are_dropped() {
        let canvas = Canvas::filled(100, 100, RED);
        let bent = bend(&canvas, 0.4, BendDirection::Down);
        // Centre column moves down by 10: its top 10 rows are now unpainted
        for y in 0..10 {
            assert_eq!(bent.pixel(50, y), BLACK);
        }
        assert_eq!(bent.pixel(50, 10), RED);
        assert_eq!(bent.pixel(50, 99), RED);
    }

    #[test]
    fn sampled_params_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let params = BendParams::sample(&mut rng);
            assert!(BEND_FACTOR_RANGE.contains(&params.factor));
        }
    }

    #[test]
    fn cursor_adjustment_depends_on_direction() {
        assert_eq!(BendDirection::Up.cursor_adjustment(), 50);
        assert_eq!(BendDirection::Down.cursor_adjustment(), 75);
    }
}
