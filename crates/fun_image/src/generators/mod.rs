//! Generators: images built from parameters alone, without an input image.
//!
//! - [`Image::constant`], [`Image::black`], [`Image::white`]
//! - [`Image::grid`]: periodic lattice of lines
//! - [`Image::mandelbrot`]: escape-time fractal
//! - [`Image::random_field`]: uniform noise drawn from an explicit RNG
use rand::Rng;

use crate::error::Result;
use crate::image::{Image, Intensity, BLACK, WHITE};

pub mod grid;
pub mod mandelbrot;
pub mod random;

pub use grid::GridParams;
pub use mandelbrot::{escape_time, ESCAPE_RADIUS, MAX_ITERATIONS};
pub use random::RandomField;

impl Image {
    /// An image with the same intensity everywhere.
    pub fn constant(value: Intensity) -> Self {
        Image::Constant { value }
    }

    /// The constant [`BLACK`] image.
    pub fn black() -> Self {
        Self::constant(BLACK)
    }

    /// The constant [`WHITE`] image.
    pub fn white() -> Self {
        Self::constant(WHITE)
    }

    /// A lattice of black lines on white, repeating every `cell_width` by `cell_height`.
    ///
    /// Fails with [`crate::error::Error::InvalidParameter`] if a cell size is zero or not
    /// finite.
    pub fn grid(
        x_thickness: f64,
        y_thickness: f64,
        cell_width: f64,
        cell_height: f64,
    ) -> Result<Self> {
        let params = GridParams::new(x_thickness, y_thickness, cell_width, cell_height)?;
        Ok(Image::Grid { params })
    }

    /// The Mandelbrot set, shaded by escape iteration.
    pub fn mandelbrot() -> Self {
        Image::Mandelbrot
    }

    /// Uniform noise in `[0, 255]`, drawn from `rng` on every evaluation.
    ///
    /// Clones of the returned image share the generator.
    pub fn random_field<R>(rng: R) -> Self
    where
        R: Rng + Send + 'static,
    {
        Image::Random {
            field: RandomField::new(rng),
        }
    }
}
