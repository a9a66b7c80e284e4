//! Run configuration for an envelope computation.
//!
//! Values can be built in code or loaded from a small YAML file:
//!
//! ```yaml
//! dof: 3
//! reach: 25.0
//! angle_increment: 45.0
//! max_angle: 90.0
//! mirror: duplicate
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigLoadError, EnvelopeError};
use crate::float_types::Real;
use crate::kinematics::MAX_DOF;
use crate::symmetry::MirrorPolicy;

/// Largest joint deflection accepted, in degrees.
pub const MAX_JOINT_ANGLE_DEG: Real = 180.0;

/// Arm geometry and sampling resolution.
///
/// Angles are in degrees, lengths in centimetres. Immutable once enumeration starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeConfig {
    /// Number of rotational joints
    pub dof: usize,
    /// Total arm length, split evenly across the links
    pub reach: Real,
    /// Angular step between samples of each joint
    pub angle_increment: Real,
    /// Each joint sweeps `[-max_angle, max_angle]`
    pub max_angle: Real,
    /// How the half sweep is reflected into the full envelope
    #[serde(default)]
    pub mirror: MirrorPolicy,
}

impl EnvelopeConfig {
    pub const fn new(dof: usize, reach: Real, angle_increment: Real, max_angle: Real) -> Self {
        Self {
            dof,
            reach,
            angle_increment,
            max_angle,
            mirror: MirrorPolicy::Duplicate,
        }
    }

    pub const fn with_mirror(mut self, mirror: MirrorPolicy) -> Self {
        self.mirror = mirror;
        self
    }

    /// Length of every link.
    pub fn link_length(&self) -> Real {
        self.reach / self.dof as Real
    }

    /// Check every input constraint.
    ///
    /// A DOF above the joint-role table is reported as
    /// [`EnvelopeError::UnsupportedConfiguration`], every other violation as
    /// [`EnvelopeError::InvalidConfiguration`].
    pub fn validate(&self) -> Result<(), EnvelopeError> {
        if self.dof == 0 {
            return Err(EnvelopeError::invalid("dof", "must be at least 1"));
        }
        if self.dof > MAX_DOF {
            return Err(EnvelopeError::UnsupportedConfiguration {
                joint_index: self.dof,
                dof: self.dof,
            });
        }
        positive("reach", self.reach)?;
        positive("angle_increment", self.angle_increment)?;
        positive("max_angle", self.max_angle)?;
        if self.max_angle > MAX_JOINT_ANGLE_DEG {
            return Err(EnvelopeError::invalid(
                "max_angle",
                format!("{} exceeds {MAX_JOINT_ANGLE_DEG} degrees", self.max_angle),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn positive(field: &'static str, value: Real) -> Result<(), EnvelopeError> {
    if !value.is_finite() {
        return Err(EnvelopeError::invalid(field, format!("{value} is not finite")));
    }
    if value <= 0.0 {
        return Err(EnvelopeError::invalid(field, format!("{value} must be positive")));
    }
    Ok(())
}
