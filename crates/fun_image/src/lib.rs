#![forbid(unsafe_code)]
//! fun_image: Procedural grayscale images as composable functions of the plane.
//!
//! Modules:
//! - image: the [`image::Image`] type, intensities, and custom sources
//! - generators: constant, grid, Mandelbrot, and random fields
//! - transforms: invert, translate, scale, rotate, anchor, ripple, edge detection
//! - compose: transform chains applied forward or backward
//! - raster: pixel grids, rasterization, and the raster adapter (bounded or tiled)
//!
//! ```
//! use fun_image::prelude::*;
//!
//! let lattice = Image::grid(1.0, 1.0, 10.0, 10.0)?;
//! let tilted = lattice.rotate_at_point(5.0, 5.0, 30.0).invert();
//! let grid = rasterize(0, 99, 99, 0, &tilted);
//! assert_eq!(grid.size(), (100, 100));
//!
//! let (image, width, height) = from_raster(grid, true)?;
//! assert_eq!(image.evaluate(0.0, 0.0), image.evaluate(width as f64, height as f64));
//! # Ok::<(), fun_image::error::Error>(())
//! ```
pub mod compose;
pub mod error;
pub mod generators;
pub mod image;
pub mod raster;
pub mod transforms;

/// Convenient re-exports for common types. Import with `use fun_image::prelude::*;`.
pub mod prelude {
    pub use crate::compose::{Chain, Transform};
    pub use crate::error::{Error, Result};
    pub use crate::generators::{GridParams, RandomField};
    pub use crate::image::{FnSource, Image, ImageSource, Intensity, BLACK, WHITE};
    pub use crate::raster::{
        from_raster, rasterize, PixelGrid, RasterConfig, Rasterizer, Region, WrapMode,
    };
    pub use crate::transforms::{EdgeDetectParams, RotateParams, ScaleParams, TranslateParams};
}
