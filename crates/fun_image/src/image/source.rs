//! Custom image sources.
//!
//! Implement [`ImageSource`] to feed externally defined functions into the image algebra,
//! or wrap a closure with [`FnSource`] / [`crate::image::Image::from_fn`].
use std::fmt;

use glam::DVec2;

use super::Intensity;

/// Trait for user-defined images sampled at a point of the real plane.
///
/// Implementors must be pure: sampling the same point twice yields the same value.
pub trait ImageSource: Send + Sync {
    fn sample(&self, p: DVec2) -> Intensity;
}

/// An [`ImageSource`] backed by a closure.
pub struct FnSource<F> {
    f: F,
}

impl<F> FnSource<F>
where
    F: Fn(DVec2) -> Intensity + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> ImageSource for FnSource<F>
where
    F: Fn(DVec2) -> Intensity + Send + Sync,
{
    #[inline]
    fn sample(&self, p: DVec2) -> Intensity {
        (self.f)(p)
    }
}

impl<F> fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}
