//! Raster adapter: turns a [`PixelGrid`] back into an [`Image`].
//!
//! Sample coordinates are truncated toward zero, then either wrapped with a floored
//! modulo ([`WrapMode::Tile`]) or checked against the grid bounds ([`WrapMode::Bounded`],
//! BLACK outside). Row lookup flips the vertical axis, `row = height - y - 1`, so the grid's
//! top row is the largest y, matching [`crate::raster::rasterize`].
use std::sync::Arc;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::image::{Image, Intensity, BLACK};
use crate::raster::PixelGrid;

/// How samples outside the grid are handled.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// BLACK outside `[0, width) x [0, height)`.
    #[default]
    Bounded,
    /// Repeat the grid over the whole plane.
    Tile,
}

impl From<bool> for WrapMode {
    fn from(tile: bool) -> Self {
        if tile {
            WrapMode::Tile
        } else {
            WrapMode::Bounded
        }
    }
}

/// A grid plus its wrap policy, as stored in [`Image::Raster`].
#[derive(Clone, Debug)]
pub struct RasterParams {
    grid: Arc<PixelGrid>,
    wrap: WrapMode,
}

impl RasterParams {
    /// Fails with [`Error::InvalidRaster`] when tiling an empty grid.
    pub fn new(grid: Arc<PixelGrid>, wrap: WrapMode) -> Result<Self> {
        if wrap == WrapMode::Tile && (grid.width() == 0 || grid.height() == 0) {
            return Err(Error::InvalidRaster(format!(
                "cannot tile a {}x{} grid",
                grid.width(),
                grid.height()
            )));
        }
        Ok(Self { grid, wrap })
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn wrap(&self) -> WrapMode {
        self.wrap
    }

    /// Value of the pixel covering `p`.
    #[inline]
    pub fn sample(&self, p: DVec2) -> Intensity {
        let width = self.grid.width() as i64;
        let height = self.grid.height() as i64;

        let mut x = p.x.trunc() as i64;
        let mut y = p.y.trunc() as i64;
        match self.wrap {
            WrapMode::Tile => {
                x = x.rem_euclid(width);
                y = y.rem_euclid(height);
            }
            WrapMode::Bounded => {
                if !(0..width).contains(&x) || !(0..height).contains(&y) {
                    return BLACK;
                }
            }
        }

        let row = (height - y) - 1;
        self.grid.get(x as usize, row as usize).unwrap_or(BLACK)
    }
}

impl Image {
    /// Adapts `grid` into an image with the given wrap policy.
    pub fn from_grid(grid: impl Into<Arc<PixelGrid>>, wrap: WrapMode) -> Result<Self> {
        let params = RasterParams::new(grid.into(), wrap)?;
        debug!(
            "Adapted {}x{} raster ({:?}).",
            params.grid.width(),
            params.grid.height(),
            params.wrap
        );
        Ok(Image::Raster { params })
    }
}

/// Adapts `grid` into an image, tiled or bounded, and reports its `(width, height)`.
pub fn from_raster(
    grid: impl Into<Arc<PixelGrid>>,
    tile: bool,
) -> Result<(Image, usize, usize)> {
    let grid = grid.into();
    let (width, height) = grid.size();
    let image = Image::from_grid(grid, WrapMode::from(tile))?;
    Ok((image, width, height))
}
