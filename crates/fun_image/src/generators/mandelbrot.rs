//! Escape-time Mandelbrot field.
//!
//! The point `(x, y)` is read as `c = x + iy`. Starting from `z = 0`, the recurrence
//! `z ← z² + c` runs for at most [`MAX_ITERATIONS`] steps; the index of the first iterate
//! with `|z| ≥ ESCAPE_RADIUS` becomes the intensity. Points that never escape are
//! [`BLACK`], so the interior of the set is dark and the intensity range is `0..=254`.
use glam::DVec2;

use crate::image::{Intensity, BLACK};

/// Iteration cap; also the termination bound for every evaluation.
pub const MAX_ITERATIONS: u32 = 255;

/// Magnitude at which an orbit counts as escaped.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Escape iteration of `c`, or [`BLACK`] if the orbit stays bounded.
pub fn escape_time(c: DVec2) -> Intensity {
    let mut z = DVec2::ZERO;
    for iteration in 0..MAX_ITERATIONS {
        if z.x.hypot(z.y) >= ESCAPE_RADIUS {
            return iteration as Intensity;
        }
        z = DVec2::new(z.x * z.x - z.y * z.y, 2.0 * z.x * z.y) + c;
    }
    BLACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(Image::mandelbrot().evaluate(0.0, 0.0), 0);
    }

    #[test]
    fn far_point_escapes_after_one_step() {
        // z1 = 2 + 2i, |z1| ~ 2.83
        assert_eq!(Image::mandelbrot().evaluate(2.0, 2.0), 1);
    }

    #[test]
    fn escape_radius_is_inclusive() {
        // z1 = 2, exactly on the radius
        assert_eq!(escape_time(DVec2::new(2.0, 0.0)), 1);
    }

    #[test]
    fn bounded_orbits_are_black() {
        // -1 cycles between 0 and -1; i cycles with period two after a step.
        assert_eq!(escape_time(DVec2::new(-1.0, 0.0)), BLACK);
        assert_eq!(escape_time(DVec2::new(0.0, 1.0)), BLACK);
    }

    #[test]
    fn slow_escape_takes_several_iterations() {
        // 0.3 lies just outside the cusp, its orbit creeps out.
        let n = escape_time(DVec2::new(0.3, 0.0));
        assert!(n > 5 && n < MAX_ITERATIONS as Intensity, "got {n}");
    }

    #[test]
    fn never_reports_the_cap() {
        for i in -20..=20 {
            for j in -20..=20 {
                let v = escape_time(DVec2::new(i as f64 * 0.1, j as f64 * 0.1));
                assert!((0..MAX_ITERATIONS as Intensity).contains(&v));
            }
        }
    }
}
