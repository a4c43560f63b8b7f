//! Transforms: combinators that wrap an [`Image`] into a new one.
//!
//! Transforms never touch the wrapped image; they only change where it is sampled
//! ([`affine`], [`ripple`]) or what is done with the sampled values ([`intensity`],
//! [`edge`]). Parameters are validated once here, when the wrapping image is built.
//!
//! Point-anchored variants are built from [`Image::anchor`]: move the anchor to the
//! origin, apply the origin-based transform, move back.
use crate::error::Result;
use crate::image::Image;

pub mod affine;
pub mod edge;
pub mod intensity;
pub mod ripple;

pub use affine::{RotateParams, ScaleParams, TranslateParams};
pub use edge::EdgeDetectParams;
pub use ripple::RIPPLE_AMPLITUDE;

impl Image {
    /// Applies `transform` relative to the point `(px, py)` instead of the origin.
    pub fn anchor<F>(self, px: f64, py: f64, transform: F) -> Image
    where
        F: FnOnce(Image) -> Image,
    {
        let at_origin = self.translate(-px, -py);
        transform(at_origin).translate(px, py)
    }

    /// Fallible form of [`Image::anchor`].
    pub fn try_anchor<F>(self, px: f64, py: f64, transform: F) -> Result<Image>
    where
        F: FnOnce(Image) -> Result<Image>,
    {
        let at_origin = self.translate(-px, -py);
        Ok(transform(at_origin)?.translate(px, py))
    }
}
