//! Intensity inversion.
use std::sync::Arc;

use crate::image::{Image, Intensity, WHITE};

/// `WHITE - value`, without clamping.
#[inline]
pub fn invert(value: Intensity) -> Intensity {
    WHITE - value
}

impl Image {
    /// Swaps dark and light: `WHITE - self(x, y)`.
    ///
    /// An involution only while the wrapped values stay inside `[0, 255]`.
    pub fn invert(self) -> Image {
        Image::Invert {
            input: Arc::new(self),
        }
    }
}
