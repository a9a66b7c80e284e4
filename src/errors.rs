//! Envelope and configuration errors

use crate::float_types::Real;
use thiserror::Error;

/// Everything that can stop an envelope computation.
///
/// Every variant is a precondition violation: the computation is pure and
/// deterministic, so none of these are retried or corrected locally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvelopeError {
    /// (InvalidConfiguration) An input constraint was violated; enumeration never started
    #[error("(InvalidConfiguration) {field}: {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
    /// (UnsupportedConfiguration) No joint role exists for this joint index / DOF pair
    #[error("(UnsupportedConfiguration) joint {joint_index} of a {dof}-DOF arm has no joint role")]
    UnsupportedConfiguration { joint_index: usize, dof: usize },
    /// (OutOfBoundsPosition) An end-effector position rounded outside the ±30 cm grid
    #[error("(OutOfBoundsPosition) end effector at ({x}, {y}, {z}) cm lies outside the grid")]
    OutOfBoundsPosition { x: Real, y: Real, z: Real },
    /// The worker pool could not be started
    #[error("worker pool: {0}")]
    WorkerPool(String),
}

impl EnvelopeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading an [`EnvelopeConfig`](crate::config::EnvelopeConfig) from disk.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// File could not be read
    #[error("failed to read config: {0}")]
    Io(String),
    /// YAML did not deserialize
    #[error("failed to parse config: {0}")]
    Parse(String),
    /// Values parsed but were rejected by validation
    #[error(transparent)]
    Invalid(#[from] EnvelopeError),
}
