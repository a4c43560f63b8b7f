//! Composition chains of unary transforms.
//!
//! A [`Chain`] records [`Transform`]s in application order without touching any image.
//! [`Chain::then`] appends a step that runs after everything recorded so far,
//! [`Chain::after`] prepends one that runs before. [`Chain::apply`] folds the steps over a
//! seed image and returns the composed [`Image`]; nothing is sampled until that image is
//! evaluated.
//!
//! ```
//! use fun_image::prelude::*;
//!
//! let chain = Chain::new()
//!     .then(Transform::scale_at_point(-0.75, 0.1, 1000.0, 1000.0))
//!     .then(Transform::invert())
//!     .then(Transform::rotate_at_origin(45.0));
//! let image = chain.apply(Image::mandelbrot()).unwrap();
//! assert_eq!(image.depth(), 6);
//! ```
use std::fmt;
use std::sync::Arc;

use glam::DVec2;

use crate::error::Result;
use crate::image::Image;
use crate::transforms::{EdgeDetectParams, RotateParams, TranslateParams};

/// A reified unary transform, applied by [`Transform::apply`].
#[derive(Clone)]
#[non_exhaustive]
pub enum Transform {
    Invert,
    Translate {
        /// Translation parameters.
        params: TranslateParams,
    },
    ScaleAtOrigin {
        /// Scale factors, validated on application.
        factor: DVec2,
    },
    ScaleAtPoint {
        /// Fixed point of the scale.
        at: DVec2,
        /// Scale factors, validated on application.
        factor: DVec2,
    },
    RotateAtOrigin {
        /// Rotation parameters.
        params: RotateParams,
    },
    RotateAtPoint {
        /// Fixed point of the rotation.
        at: DVec2,
        /// Rotation parameters.
        params: RotateParams,
    },
    Ripple,
    EdgeDetect {
        /// Edge detection parameters.
        params: EdgeDetectParams,
    },
    Custom {
        /// Arbitrary image combinator.
        apply: Arc<dyn Fn(Image) -> Image + Send + Sync>,
    },
}

impl Transform {
    pub fn invert() -> Self {
        Transform::Invert
    }

    pub fn translate(dx: f64, dy: f64) -> Self {
        Transform::Translate {
            params: TranslateParams {
                offset: DVec2::new(dx, dy),
            },
        }
    }

    pub fn scale_at_origin(x_scale: f64, y_scale: f64) -> Self {
        Transform::ScaleAtOrigin {
            factor: DVec2::new(x_scale, y_scale),
        }
    }

    pub fn scale_at_point(px: f64, py: f64, x_scale: f64, y_scale: f64) -> Self {
        Transform::ScaleAtPoint {
            at: DVec2::new(px, py),
            factor: DVec2::new(x_scale, y_scale),
        }
    }

    pub fn rotate_at_origin(angle_degrees: f64) -> Self {
        Transform::RotateAtOrigin {
            params: RotateParams::new(angle_degrees),
        }
    }

    pub fn rotate_at_point(px: f64, py: f64, angle_degrees: f64) -> Self {
        Transform::RotateAtPoint {
            at: DVec2::new(px, py),
            params: RotateParams::new(angle_degrees),
        }
    }

    pub fn ripple() -> Self {
        Transform::Ripple
    }

    pub fn edge_detect(threshold: f64) -> Self {
        Transform::EdgeDetect {
            params: EdgeDetectParams { threshold },
        }
    }

    /// Wraps an arbitrary combinator.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(Image) -> Image + Send + Sync + 'static,
    {
        Transform::Custom { apply: Arc::new(f) }
    }

    /// Wraps `image`, validating parameters first.
    pub fn apply(&self, image: Image) -> Result<Image> {
        let out = match self {
            Transform::Invert => image.invert(),
            Transform::Translate { params } => image.translate(params.offset.x, params.offset.y),
            Transform::ScaleAtOrigin { factor } => image.scale_at_origin(factor.x, factor.y)?,
            Transform::ScaleAtPoint { at, factor } => {
                image.scale_at_point(at.x, at.y, factor.x, factor.y)?
            }
            Transform::RotateAtOrigin { params } => image.rotate_at_origin(params.angle_degrees),
            Transform::RotateAtPoint { at, params } => {
                image.rotate_at_point(at.x, at.y, params.angle_degrees)
            }
            Transform::Ripple => image.ripple(),
            Transform::EdgeDetect { params } => image.edge_detect(params.threshold),
            Transform::Custom { apply } => apply(image),
        };
        Ok(out)
    }

    /// Short name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Transform::Invert => "invert",
            Transform::Translate { .. } => "translate",
            Transform::ScaleAtOrigin { .. } => "scale_at_origin",
            Transform::ScaleAtPoint { .. } => "scale_at_point",
            Transform::RotateAtOrigin { .. } => "rotate_at_origin",
            Transform::RotateAtPoint { .. } => "rotate_at_point",
            Transform::Ripple => "ripple",
            Transform::EdgeDetect { .. } => "edge_detect",
            Transform::Custom { .. } => "custom",
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Translate { params } => f.debug_tuple("Translate").field(params).finish(),
            Transform::ScaleAtOrigin { factor } => {
                f.debug_tuple("ScaleAtOrigin").field(factor).finish()
            }
            Transform::ScaleAtPoint { at, factor } => f
                .debug_struct("ScaleAtPoint")
                .field("at", at)
                .field("factor", factor)
                .finish(),
            Transform::RotateAtOrigin { params } => {
                f.debug_tuple("RotateAtOrigin").field(params).finish()
            }
            Transform::RotateAtPoint { at, params } => f
                .debug_struct("RotateAtPoint")
                .field("at", at)
                .field("params", params)
                .finish(),
            Transform::EdgeDetect { params } => f.debug_tuple("EdgeDetect").field(params).finish(),
            _ => f.write_str(self.kind()),
        }
    }
}

/// An ordered sequence of transforms.
#[derive(Clone, Debug, Default)]
pub struct Chain {
    steps: Vec<Transform>,
}

impl Chain {
    /// Creates an empty chain, which applies as the identity.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends `transform` to run after the current steps.
    pub fn then(mut self, transform: impl Into<Transform>) -> Self {
        self.steps.push(transform.into());
        self
    }

    /// Prepends `transform` to run before the current steps.
    pub fn after(mut self, transform: impl Into<Transform>) -> Self {
        self.steps.insert(0, transform.into());
        self
    }

    /// Appends all steps of `other` to run after the current steps.
    pub fn then_chain(mut self, other: Chain) -> Self {
        self.steps.extend(other.steps);
        self
    }

    /// Recorded steps in application order.
    pub fn steps(&self) -> &[Transform] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Applies every step in order to `seed`.
    pub fn apply(&self, seed: Image) -> Result<Image> {
        self.steps
            .iter()
            .try_fold(seed, |image, transform| transform.apply(image))
    }
}

impl From<Transform> for Chain {
    fn from(transform: Transform) -> Self {
        Chain::new().then(transform)
    }
}

impl<F> From<F> for Transform
where
    F: Fn(Image) -> Image + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Transform::custom(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::image::{Intensity, WHITE};

    fn ramp() -> Image {
        Image::from_fn(|p: DVec2| p.x.round() as Intensity)
    }

    #[test]
    fn empty_chain_is_identity() {
        let image = Chain::new().apply(ramp()).unwrap();
        assert_eq!(image.evaluate(12.0, 0.0), 12);
        assert!(Chain::new().is_empty());
    }

    #[test]
    fn then_applies_in_recorded_order() {
        // translate first, then scale: samples at x/2 - 10
        let image = Chain::new()
            .then(Transform::translate(10.0, 0.0))
            .then(Transform::scale_at_origin(2.0, 1.0))
            .apply(ramp())
            .unwrap();
        assert_eq!(image.evaluate(40.0, 0.0), 10);
    }

    #[test]
    fn after_prepends() {
        // same steps, reversed order: samples at (x - 10) / 2
        let image = Chain::new()
            .then(Transform::translate(10.0, 0.0))
            .after(Transform::scale_at_origin(2.0, 1.0))
            .apply(ramp())
            .unwrap();
        assert_eq!(image.evaluate(40.0, 0.0), 15);
        assert_eq!(image.depth(), 3);
        assert_eq!(image.kind(), "translate");
    }

    #[test]
    fn custom_closures_compose() {
        let chain = Chain::new()
            .then(|image: Image| image.translate(1.0, 0.0))
            .then(Transform::invert());
        let image = chain.apply(ramp()).unwrap();
        assert_eq!(image.evaluate(5.0, 0.0), WHITE - 4);
        assert_eq!(chain.steps()[0].kind(), "custom");
    }

    #[test]
    fn then_chain_concatenates() {
        let first = Chain::from(Transform::translate(3.0, 0.0));
        let second = Chain::new().then(Transform::translate(4.0, 0.0));
        let chain = first.then_chain(second);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.apply(ramp()).unwrap().evaluate(10.0, 0.0), 3);
    }

    #[test]
    fn invalid_step_fails_the_whole_chain() {
        let chain = Chain::new()
            .then(Transform::invert())
            .then(Transform::scale_at_point(1.0, 1.0, 0.0, 2.0));
        assert!(matches!(
            chain.apply(ramp()),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn rotate_at_point_transform_matches_method() {
        let via_chain = Chain::from(Transform::rotate_at_point(2.0, 3.0, 30.0))
            .apply(ramp())
            .unwrap();
        let direct = ramp().rotate_at_point(2.0, 3.0, 30.0);
        for x in -5..5 {
            let (x, y) = (x as f64 * 1.7, 2.5);
            assert_eq!(via_chain.evaluate(x, y), direct.evaluate(x, y));
        }
    }
}
