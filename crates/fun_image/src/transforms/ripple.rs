//! Concentric ripple distortion.
use std::sync::Arc;

use glam::DVec2;

use crate::image::Image;

/// Maximum displacement of a sample point along each axis.
pub const RIPPLE_AMPLITUDE: f64 = 20.0;

/// Pushes `p` outward or inward by a displacement that oscillates with its distance
/// from the origin, one period every 360 units.
///
/// Each axis moves away from zero when the displacement is positive; the direction is
/// picked from the sign of the original coordinate, with zero treated as negative.
#[inline]
pub fn displace(p: DVec2) -> DVec2 {
    let scale = p.length().to_radians().cos() * RIPPLE_AMPLITUDE;
    let shift = |v: f64| if v <= 0.0 { v - scale } else { v + scale };
    DVec2::new(shift(p.x), shift(p.y))
}

impl Image {
    /// Distorts the image with concentric waves around the origin.
    pub fn ripple(self) -> Image {
        Image::Ripple {
            input: Arc::new(self),
        }
    }
}
