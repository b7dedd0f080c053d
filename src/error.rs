//! Error types for sandbox configuration and particle lookup.
//!
//! Stepping, bouncing and dragging never fail; these only come out of
//! explicit validation and checked index access.

use core::fmt;

/// Errors reported by configuration validation and checked accessors.
#[derive(Debug, Clone, PartialEq)]
pub enum SandboxError {
    /// Simulation width and height must be positive and finite.
    InvalidBounds,
    /// Bounce factor must be in (0, 1].
    InvalidBounce,
    /// Particle radius must be non-negative and fit inside the bounds.
    InvalidRadius,
    /// Grab radius must be positive and finite.
    InvalidGrabRadius,
    /// Throw scale must be non-negative and finite.
    InvalidThrowScale,
    /// Sample window and minimum sample interval must be positive.
    InvalidSampleWindow,
    /// Gravity must be finite.
    InvalidGravity,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandboxError::InvalidBounds => {
                write!(f, "simulation bounds must be positive and finite")
            }
            SandboxError::InvalidBounce => write!(f, "bounce factor must be in (0, 1]"),
            SandboxError::InvalidRadius => {
                write!(f, "particle radius must be non-negative and fit the bounds")
            }
            SandboxError::InvalidGrabRadius => write!(f, "grab radius must be positive"),
            SandboxError::InvalidThrowScale => write!(f, "throw scale must be non-negative"),
            SandboxError::InvalidSampleWindow => write!(f, "sample window must be positive"),
            SandboxError::InvalidGravity => write!(f, "gravity must be finite"),
            SandboxError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
        }
    }
}

impl core::error::Error for SandboxError {}
