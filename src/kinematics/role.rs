//! Joint-axis convention of the arm.

use crate::errors::EnvelopeError;
use serde::{Deserialize, Serialize};

/// Largest DOF the role table covers.
pub const MAX_DOF: usize = 9;

/// How a joint orients the next link relative to the previous frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JointRole {
    /// Rotation about the chain axis, link along that axis
    Base,
    /// Turns the chain direction 90° to the side
    TurnSide,
    /// Continues in the plane of the previous side joint
    RepeatSide,
    /// Turns the chain direction back up
    TurnUp,
}

use JointRole::{Base, RepeatSide, TurnSide, TurnUp};

/// Role of every joint, indexed by `[dof - 1][joint_index - 1]`.
///
/// Anthropomorphic layout: shoulder-like side joints first, then alternating
/// side/up joints for the wrist once the arm has more than six joints.
const ROLE_TABLE: [&[JointRole]; MAX_DOF] = [
    &[Base],
    &[Base, TurnSide],
    &[Base, TurnSide, RepeatSide],
    &[Base, TurnSide, RepeatSide, RepeatSide],
    &[Base, TurnSide, RepeatSide, RepeatSide, TurnUp],
    &[Base, TurnSide, RepeatSide, TurnUp, TurnSide, TurnUp],
    &[Base, TurnSide, TurnUp, TurnSide, TurnUp, TurnSide, TurnUp],
    &[Base, TurnSide, TurnUp, TurnSide, TurnUp, TurnSide, TurnUp, TurnSide],
    &[Base, TurnSide, TurnUp, TurnSide, TurnUp, TurnSide, TurnUp, TurnSide, TurnUp],
];

impl JointRole {
    /// Look up the role of joint `joint_index` (counted from 1 at the base) in a `dof`-joint arm.
    pub fn for_joint(joint_index: usize, dof: usize) -> Result<Self, EnvelopeError> {
        let unsupported = EnvelopeError::UnsupportedConfiguration { joint_index, dof };
        if joint_index == 0 || dof == 0 {
            return Err(unsupported);
        }
        ROLE_TABLE
            .get(dof - 1)
            .and_then(|roles| roles.get(joint_index - 1))
            .copied()
            .ok_or(unsupported)
    }

    /// Roles of every joint of a `dof`-joint arm, base first.
    pub fn chain(dof: usize) -> Result<Vec<Self>, EnvelopeError> {
        (1..=dof).map(|joint| Self::for_joint(joint, dof)).collect()
    }
}
