//! Error type for render inputs.
//!
//! Only construction-time validation can fail. Path termination
//! (absorption, escaping to the sky, running out of bounces) is an
//! ordinary color outcome of the integrator, never an error.

use thiserror::Error;

/// Errors raised while validating render parameters and scene objects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("samples per pixel must be positive")]
    InvalidSampleCount,

    #[error("maximum bounce depth must be positive")]
    InvalidMaxDepth,

    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("metal fuzz must be finite, got {0}")]
    InvalidFuzz(f32),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
