//! Closed-form homogeneous transforms for each [`JointRole`].

use crate::errors::EnvelopeError;
use crate::float_types::Real;
use crate::kinematics::role::JointRole;
use nalgebra::Matrix4;

impl JointRole {
    /// Pose of the frame at the end of this joint's link, relative to the frame before the joint.
    ///
    /// `angle` is in radians, `link_length` in centimetres.
    #[rustfmt::skip]
    pub fn transform(self, angle: Real, link_length: Real) -> Matrix4<Real> {
        let (s, c) = angle.sin_cos();
        let d = link_length;
        match self {
            JointRole::Base => Matrix4::new(
                c, -s, 0.0, 0.0,
                s, c, 0.0, 0.0,
                0.0, 0.0, 1.0, d,
                0.0, 0.0, 0.0, 1.0,
            ),
            JointRole::TurnSide => Matrix4::new(
                c, -s, 0.0, -d * s,
                0.0, 0.0, -1.0, 0.0,
                s, c, 0.0, d * c,
                0.0, 0.0, 0.0, 1.0,
            ),
            JointRole::RepeatSide => Matrix4::new(
                c, -s, 0.0, -d * s,
                s, c, 0.0, d * c,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            JointRole::TurnUp => Matrix4::new(
                c, -s, 0.0, 0.0,
                0.0, 0.0, 1.0, d,
                -s, -c, 0.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }
}

/// Transform of joint `joint_index` (from 1) of a `dof`-joint arm at `angle` radians.
pub fn transform(
    joint_index: usize,
    dof: usize,
    angle: Real,
    link_length: Real,
) -> Result<Matrix4<Real>, EnvelopeError> {
    Ok(JointRole::for_joint(joint_index, dof)?.transform(angle, link_length))
}
