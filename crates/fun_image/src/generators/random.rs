//! Uniform random field.
//!
//! The only non-deterministic image. Its entropy comes from a caller supplied
//! [`Rng`]; there is no implicit global generator.
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use rand::Rng;

use crate::image::Intensity;

/// Shared random source behind [`crate::image::Image::Random`].
#[derive(Clone)]
pub struct RandomField {
    rng: Arc<Mutex<Box<dyn Rng + Send>>>,
}

impl RandomField {
    pub fn new<R>(rng: R) -> Self
    where
        R: Rng + Send + 'static,
    {
        Self {
            rng: Arc::new(Mutex::new(Box::new(rng))),
        }
    }

    /// Draws the next intensity, uniform over `0..=255`.
    pub fn sample(&self) -> Intensity {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        (rng.next_u32() >> 24) as Intensity
    }
}

impl fmt::Debug for RandomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomField").finish_non_exhaustive()
    }
}
