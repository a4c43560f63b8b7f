//! Translation, scaling and rotation.
//!
//! Each transform maps the output coordinate back to the coordinate sampled from the
//! wrapped image, so `translate(dx, dy)` samples at `p - (dx, dy)` and scaling divides.
use std::sync::Arc;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::image::Image;

/// Parameters for a translation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranslateParams {
    /// Displacement applied to the image.
    pub offset: DVec2,
}

/// Parameters for a scale about the origin.
///
/// Only built through [`ScaleParams::new`], so both factors are always non-zero.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleParams {
    factor: DVec2,
}

impl ScaleParams {
    /// Fails with [`Error::InvalidParameter`] on a zero factor, which would divide by zero
    /// at every sample.
    pub fn new(x_scale: f64, y_scale: f64) -> Result<Self> {
        if x_scale == 0.0 {
            return Err(Error::InvalidParameter("x scale must be non-zero".into()));
        }
        if y_scale == 0.0 {
            return Err(Error::InvalidParameter("y scale must be non-zero".into()));
        }
        Ok(Self {
            factor: DVec2::new(x_scale, y_scale),
        })
    }

    /// Per-axis scale factors.
    pub fn factor(&self) -> DVec2 {
        self.factor
    }
}

/// Parameters for a rotation about the origin.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotateParams {
    /// Rotation angle in degrees.
    pub angle_degrees: f64,
    /// `(cos θ, sin θ)` of the angle in radians.
    pub rotation: DVec2,
}

impl RotateParams {
    pub fn new(angle_degrees: f64) -> Self {
        Self {
            angle_degrees,
            rotation: DVec2::from_angle(angle_degrees.to_radians()),
        }
    }

    /// Rotates `p` forward by the angle: `(x cos θ - y sin θ, x sin θ + y cos θ)`.
    #[inline]
    pub fn rotate(&self, p: DVec2) -> DVec2 {
        self.rotation.rotate(p)
    }
}

impl Image {
    /// Moves the image by `(dx, dy)`: samples the wrapped image at `(x - dx, y - dy)`.
    pub fn translate(self, dx: f64, dy: f64) -> Image {
        Image::Translate {
            input: Arc::new(self),
            params: TranslateParams {
                offset: DVec2::new(dx, dy),
            },
        }
    }

    /// Stretches the image away from the origin: samples at `(x / sx, y / sy)`.
    ///
    /// Fails with [`Error::InvalidParameter`] if either factor is zero.
    pub fn scale_at_origin(self, x_scale: f64, y_scale: f64) -> Result<Image> {
        let params = ScaleParams::new(x_scale, y_scale)?;
        Ok(Image::Scale {
            input: Arc::new(self),
            params,
        })
    }

    /// Scales about `(px, py)`, which stays fixed.
    pub fn scale_at_point(self, px: f64, py: f64, x_scale: f64, y_scale: f64) -> Result<Image> {
        self.try_anchor(px, py, |image| image.scale_at_origin(x_scale, y_scale))
    }

    /// Samples the wrapped image at `p` rotated forward by `angle_degrees`.
    ///
    /// With y pointing up, the rendered picture turns clockwise for positive angles.
    pub fn rotate_at_origin(self, angle_degrees: f64) -> Image {
        Image::Rotate {
            input: Arc::new(self),
            params: RotateParams::new(angle_degrees),
        }
    }

    /// Rotates about `(px, py)`, which stays fixed.
    pub fn rotate_at_point(self, px: f64, py: f64, angle_degrees: f64) -> Image {
        self.anchor(px, py, |image| image.rotate_at_origin(angle_degrees))
    }
}
