//! Rasterization region and configuration.
use glam::IVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An inclusive integer rectangle in image space, y pointing up.
///
/// `top_left` is the first sample of the first row; `bottom_right` the last sample of the
/// last row. For a non-empty region `top_left.y >= bottom_right.y`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub top_left: IVec2,
    pub bottom_right: IVec2,
}

impl Region {
    pub fn new(
        top_left_x: i32,
        top_left_y: i32,
        bottom_right_x: i32,
        bottom_right_y: i32,
    ) -> Self {
        Self {
            top_left: IVec2::new(top_left_x, top_left_y),
            bottom_right: IVec2::new(bottom_right_x, bottom_right_y),
        }
    }

    /// Region covering `width` by `height` samples with its bottom-left corner at the origin.
    pub fn from_origin(width: u32, height: u32) -> Self {
        Self::new(
            0,
            height.min(i32::MAX as u32) as i32 - 1,
            width.min(i32::MAX as u32) as i32 - 1,
            0,
        )
    }

    /// Number of columns, `bottom_right.x - top_left.x + 1`, or zero if inverted.
    pub fn width(&self) -> usize {
        let w = i64::from(self.bottom_right.x) - i64::from(self.top_left.x) + 1;
        usize::try_from(w.max(0)).unwrap_or(usize::MAX)
    }

    /// Number of rows, `top_left.y - bottom_right.y + 1`, or zero if inverted.
    pub fn height(&self) -> usize {
        let h = i64::from(self.top_left.y) - i64::from(self.bottom_right.y) + 1;
        usize::try_from(h.max(0)).unwrap_or(usize::MAX)
    }

    /// Number of samples, or `None` if it does not fit in `usize`.
    pub fn len(&self) -> Option<usize> {
        self.width().checked_mul(self.height())
    }

    /// `true` if the region contains no samples.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Configuration for a [`crate::raster::Rasterizer`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterConfig {
    /// Sampled region.
    pub region: Region,
    /// Evaluate rows in parallel. Only honoured with the `parallel` feature.
    pub parallel: bool,
}

impl RasterConfig {
    /// Creates a new [`RasterConfig`] for the given region.
    pub fn new(region: Region) -> Self {
        Self {
            region,
            parallel: false,
        }
    }

    /// Sets the region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Enables or disables parallel row evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.region.width() == 0 {
            return Err(Error::InvalidConfig(
                "region must have bottom_right.x >= top_left.x".into(),
            ));
        }
        if self.region.height() == 0 {
            return Err(Error::InvalidConfig(
                "region must have top_left.y >= bottom_right.y".into(),
            ));
        }
        if self.region.len().is_none() {
            return Err(Error::InvalidConfig(format!(
                "region of {}x{} samples is too large",
                self.region.width(),
                self.region.height()
            )));
        }
        Ok(())
    }
}
