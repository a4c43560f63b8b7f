//! The [`Image`] abstraction: a pure function from the real plane to an [`Intensity`].
//!
//! Every generator and transform in the crate is one variant of [`Image`], carrying its
//! own parameters and wrapping its inputs behind an [`Arc`]. Evaluation dispatches through
//! [`Image::sample`], so composed images are rebuilt lazily at every call and never cache
//! sampled values.
use std::fmt;
use std::sync::Arc;

use glam::DVec2;

use crate::generators::{GridParams, RandomField};
use crate::raster::RasterParams;
use crate::transforms::{EdgeDetectParams, RotateParams, ScaleParams, TranslateParams};

pub mod source;

pub use source::{FnSource, ImageSource};

/// Single-channel brightness, nominally in `[0, 255]`.
///
/// Combinators never clamp, so values outside that range propagate unchanged.
pub type Intensity = i32;

/// Darkest nominal intensity.
pub const BLACK: Intensity = 0;
/// Brightest nominal intensity.
pub const WHITE: Intensity = 255;

/// An immutable image defined over the whole plane.
///
/// Cloning is cheap: wrapped inputs are shared, never copied. Parameter structs whose
/// values can be invalid ([`GridParams`], [`ScaleParams`]) only come out of validating
/// constructors, so a variant built by hand is as sound as one built by a method.
#[derive(Clone)]
#[non_exhaustive]
pub enum Image {
    Constant {
        /// Value returned everywhere.
        value: Intensity,
    },
    Grid {
        /// Line thickness and cell size of the lattice.
        params: GridParams,
    },
    Mandelbrot,
    Random {
        /// Shared entropy source.
        field: RandomField,
    },
    Raster {
        /// Backing grid and wrap policy.
        params: RasterParams,
    },
    Source {
        /// User supplied evaluator.
        source: Arc<dyn ImageSource>,
    },
    Invert {
        /// Image whose intensities are inverted.
        input: Arc<Image>,
    },
    Translate {
        /// Image to move.
        input: Arc<Image>,
        /// Offset parameters.
        params: TranslateParams,
    },
    Scale {
        /// Image to scale about the origin.
        input: Arc<Image>,
        /// Non-zero scale factors.
        params: ScaleParams,
    },
    Rotate {
        /// Image to rotate about the origin.
        input: Arc<Image>,
        /// Rotation parameters.
        params: RotateParams,
    },
    Ripple {
        /// Image to distort.
        input: Arc<Image>,
    },
    EdgeDetect {
        /// Image to differentiate.
        input: Arc<Image>,
        /// Gradient magnitude threshold.
        params: EdgeDetectParams,
    },
}

impl Image {
    /// Evaluates the image at `(x, y)`.
    #[inline]
    pub fn evaluate(&self, x: f64, y: f64) -> Intensity {
        self.sample(DVec2::new(x, y))
    }

    /// Evaluates the image at point `p`.
    pub fn sample(&self, p: DVec2) -> Intensity {
        match self {
            Image::Constant { value } => *value,
            Image::Grid { params } => params.sample(p),
            Image::Mandelbrot => crate::generators::mandelbrot::escape_time(p),
            Image::Random { field } => field.sample(),
            Image::Raster { params } => params.sample(p),
            Image::Source { source } => source.sample(p),
            Image::Invert { input } => crate::transforms::intensity::invert(input.sample(p)),
            Image::Translate { input, params } => input.sample(p - params.offset),
            Image::Scale { input, params } => input.sample(p / params.factor()),
            Image::Rotate { input, params } => input.sample(params.rotate(p)),
            Image::Ripple { input } => input.sample(crate::transforms::ripple::displace(p)),
            Image::EdgeDetect { input, params } => {
                crate::transforms::edge::detect(input, params.threshold, p)
            }
        }
    }

    /// Wraps a custom [`ImageSource`].
    pub fn source<S>(source: S) -> Self
    where
        S: ImageSource + 'static,
    {
        Image::Source {
            source: Arc::new(source),
        }
    }

    /// Wraps a closure evaluated at each sampled point.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(DVec2) -> Intensity + Send + Sync + 'static,
    {
        Self::source(FnSource::new(f))
    }

    /// Short name of the variant, used in logs and debug output.
    pub fn kind(&self) -> &'static str {
        match self {
            Image::Constant { .. } => "constant",
            Image::Grid { .. } => "grid",
            Image::Mandelbrot => "mandelbrot",
            Image::Random { .. } => "random",
            Image::Raster { .. } => "raster",
            Image::Source { .. } => "source",
            Image::Invert { .. } => "invert",
            Image::Translate { .. } => "translate",
            Image::Scale { .. } => "scale",
            Image::Rotate { .. } => "rotate",
            Image::Ripple { .. } => "ripple",
            Image::EdgeDetect { .. } => "edge_detect",
        }
    }

    /// The image this image wraps, if any.
    pub fn input(&self) -> Option<&Image> {
        match self {
            Image::Invert { input }
            | Image::Translate { input, .. }
            | Image::Scale { input, .. }
            | Image::Rotate { input, .. }
            | Image::Ripple { input }
            | Image::EdgeDetect { input, .. } => Some(&**input),
            Image::Constant { .. }
            | Image::Grid { .. }
            | Image::Mandelbrot
            | Image::Random { .. }
            | Image::Raster { .. }
            | Image::Source { .. } => None,
        }
    }

    /// Number of images in the wrapped chain, this one included.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self;
        while let Some(next) = current.input() {
            depth += 1;
            current = next;
        }
        depth
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Image::Constant { value } => f.debug_struct("Constant").field("value", value).finish(),
            Image::Grid { params } => f.debug_struct("Grid").field("params", params).finish(),
            Image::Raster { params } => f.debug_struct("Raster").field("params", params).finish(),
            _ => match self.input() {
                Some(input) => f.debug_tuple(self.kind()).field(input).finish(),
                None => f.write_str(self.kind()),
            },
        }
    }
}
