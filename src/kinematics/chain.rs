//! The validated, immutable arm model shared by every worker.

use crate::config::EnvelopeConfig;
use crate::errors::EnvelopeError;
use crate::float_types::{Real, tolerance};
use crate::kinematics::role::JointRole;
use nalgebra::Matrix4;

/// Most samples a single joint range may be split into.
pub const MAX_ANGLE_STEPS: usize = 1 << 20;

/// Sample `[lo, hi]` every `increment` degrees, starting at `lo`.
///
/// `hi` is included only when a step lands on it (within [`tolerance`]).
/// At least one value is always produced. Values are computed from the step
/// index so rounding does not accumulate along the range.
///
/// Fails when the range would need more than [`MAX_ANGLE_STEPS`] samples.
pub fn angle_steps(lo: Real, hi: Real, increment: Real) -> Result<Vec<Real>, EnvelopeError> {
    let span = ((hi - lo + tolerance()) / increment).floor();
    // Compare as floats first: the cast below saturates rather than failing.
    if !(span < MAX_ANGLE_STEPS as Real) {
        return Err(EnvelopeError::invalid(
            "angle_increment",
            format!("{increment} splits [{lo}, {hi}] into more than {MAX_ANGLE_STEPS} steps"),
        ));
    }
    let count = (span.max(0.0) as usize)
        .checked_add(1)
        .filter(|&n| n <= MAX_ANGLE_STEPS)
        .ok_or_else(|| EnvelopeError::invalid("angle_increment", "step count overflows"))?;
    Ok((0..count).map(|k| lo + k as Real * increment).collect())
}

/// Everything a worker needs to enumerate its share of joint space.
///
/// Roles are resolved and per-joint transforms precomputed when the chain is
/// built, so any unsupported joint fails here, before enumeration starts.
#[derive(Clone, Debug)]
pub struct KinematicChain {
    roles: Vec<JointRole>,
    link_length: Real,
    /// First-joint angles (degrees) covering `[-max_angle, 0]`
    first_joint_angles: Vec<Real>,
    /// `transforms[j]` holds the transform of joint `j + 1` at every sampled angle
    transforms: Vec<Vec<Matrix4<Real>>>,
}

impl KinematicChain {
    pub fn new(config: &EnvelopeConfig) -> Result<Self, EnvelopeError> {
        config.validate()?;
        let roles = JointRole::chain(config.dof)?;
        let link_length = config.link_length();

        let first_joint_angles = angle_steps(-config.max_angle, 0.0, config.angle_increment)?;
        let joint_angles =
            angle_steps(-config.max_angle, config.max_angle, config.angle_increment)?;

        let transforms = roles
            .iter()
            .enumerate()
            .map(|(j, role)| {
                // Joint 1 only ever takes the half range.
                let angles = if j == 0 { &first_joint_angles } else { &joint_angles };
                angles
                    .iter()
                    .map(|deg| role.transform(deg.to_radians(), link_length))
                    .collect()
            })
            .collect();

        Ok(Self {
            roles,
            link_length,
            first_joint_angles,
            transforms,
        })
    }

    pub fn dof(&self) -> usize {
        self.roles.len()
    }

    pub fn roles(&self) -> &[JointRole] {
        &self.roles
    }

    pub const fn link_length(&self) -> Real {
        self.link_length
    }

    /// First-joint angles in degrees, one worker task each.
    pub fn first_joint_angles(&self) -> &[Real] {
        &self.first_joint_angles
    }

    /// Precomputed transforms of joint `joint_index` (from 1), one per sampled angle.
    pub fn joint_transforms(&self, joint_index: usize) -> &[Matrix4<Real>] {
        &self.transforms[joint_index - 1]
    }

    /// Number of end-effector samples a full half sweep produces.
    pub fn sample_count(&self) -> u128 {
        self.transforms.iter().map(|t| t.len() as u128).product()
    }
}
