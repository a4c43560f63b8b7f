//! Gradient-magnitude edge detection.
//!
//! Sobel-style 3x3 kernels over the eight unit-offset neighbours of the sample point:
//!
//! ```text
//! Gv = f(x-1,y+1) + 2 f(x,y+1) + f(x+1,y+1) - f(x-1,y-1) - 2 f(x,y-1) - f(x+1,y-1)
//! Gh = f(x+1,y-1) + 2 f(x+1,y) + f(x+1,y+1) - f(x-1,y-1) - 2 f(x-1,y) - f(x-1,y+1)
//! ```
//!
//! The result is a binary map: WHITE where `sqrt(Gv² + Gh²)` exceeds the threshold.
use std::sync::Arc;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::image::{Image, Intensity, BLACK, WHITE};

/// Parameters for edge detection.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeDetectParams {
    /// Magnitudes strictly above this are edges.
    pub threshold: f64,
}

/// Gradient magnitude of `image` at `p`.
pub fn gradient_magnitude(image: &Image, p: DVec2) -> f64 {
    let at = |dx: f64, dy: f64| i64::from(image.sample(p + DVec2::new(dx, dy)));

    let vertical = at(-1.0, 1.0) + 2 * at(0.0, 1.0) + at(1.0, 1.0)
        - at(-1.0, -1.0)
        - 2 * at(0.0, -1.0)
        - at(1.0, -1.0);
    let horizontal = at(1.0, -1.0) + 2 * at(1.0, 0.0) + at(1.0, 1.0)
        - at(-1.0, -1.0)
        - 2 * at(-1.0, 0.0)
        - at(-1.0, 1.0);

    ((vertical * vertical + horizontal * horizontal) as f64).sqrt()
}

/// WHITE if the gradient magnitude at `p` exceeds `threshold`, else BLACK.
#[inline]
pub fn detect(image: &Image, threshold: f64, p: DVec2) -> Intensity {
    if gradient_magnitude(image, p) > threshold {
        WHITE
    } else {
        BLACK
    }
}

impl Image {
    /// Binary edge map of the image.
    pub fn edge_detect(self, threshold: f64) -> Image {
        Image::EdgeDetect {
            input: Arc::new(self),
            params: EdgeDetectParams { threshold },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_step() -> Image {
        Image::from_fn(|p: DVec2| if p.x < 0.0 { BLACK } else { WHITE })
    }

    #[test]
    fn flat_field_has_no_edges() {
        for value in [0, 17, 255, 1000] {
            for threshold in [0.0, 0.5, 100.0] {
                let image = Image::constant(value).edge_detect(threshold);
                for (x, y) in [(0.0, 0.0), (12.5, -3.0), (-100.0, 44.0)] {
                    assert_eq!(image.evaluate(x, y), BLACK);
                }
            }
        }
    }

    #[test]
    fn step_produces_edge_along_boundary() {
        let image = vertical_step().edge_detect(100.0);
        assert_eq!(image.evaluate(0.0, 0.0), WHITE);
        assert_eq!(image.evaluate(-1.0, 0.0), WHITE);
        assert_eq!(image.evaluate(-5.0, 0.0), BLACK);
        assert_eq!(image.evaluate(5.0, 3.0), BLACK);
    }

    #[test]
    fn step_gradient_is_purely_horizontal() {
        // Right column WHITE, left column BLACK: Gh = 4 * 255, Gv = 0.
        let magnitude = gradient_magnitude(&vertical_step(), DVec2::new(0.0, 0.0));
        assert!((magnitude - 1020.0).abs() < 1e-9);
    }

    #[test]
    fn threshold_is_strict() {
        let image = vertical_step().edge_detect(1020.0);
        assert_eq!(image.evaluate(0.0, 0.0), BLACK);
        let image = vertical_step().edge_detect(1019.9);
        assert_eq!(image.evaluate(0.0, 0.0), WHITE);
    }

    #[test]
    fn horizontal_step_drives_vertical_gradient() {
        let image = Image::from_fn(|p: DVec2| if p.y > 0.0 { WHITE } else { BLACK });
        let magnitude = gradient_magnitude(&image, DVec2::ZERO);
        assert!((magnitude - 1020.0).abs() < 1e-9);
    }
}
