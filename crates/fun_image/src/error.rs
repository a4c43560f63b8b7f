//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid transform or generator parameters, malformed rasters, and invalid rasterizer
//! configuration. All of them are raised once, when a value is built, never per sample.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("invalid raster: {0}")]
    InvalidRaster(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category() {
        let err = Error::InvalidParameter("x scale must be non-zero".into());
        assert_eq!(err.to_string(), "invalid parameter: x scale must be non-zero");
    }

    #[test]
    fn raster_and_config_errors_render_messages() {
        let err = Error::InvalidRaster("cannot tile a 0x3 grid".into());
        assert_eq!(err.to_string(), "invalid raster: cannot tile a 0x3 grid");
        let err = Error::InvalidConfig("region is too large".into());
        assert_eq!(err.to_string(), "invalid configuration: region is too large");
    }
}
