//! Conversions between images and discrete pixel grids.
//!
//! - [`PixelGrid`]: rectangular, row-major storage of intensities (top row first).
//! - [`rasterize`] / [`Rasterizer`]: sample an [`crate::image::Image`] over an integer region.
//! - [`from_raster`]: adapt a grid back into an image, bounded or tiled.
//!
//! Both directions share one axis convention: y grows upward in image space while row
//! indices grow downward in the grid.
pub mod adapter;
pub mod config;
pub mod pixel_grid;
pub mod rasterizer;

pub use adapter::{from_raster, RasterParams, WrapMode};
pub use config::{RasterConfig, Region};
pub use pixel_grid::PixelGrid;
pub use rasterizer::{rasterize, Rasterizer};
