//! Joint roles, per-joint homogeneous transforms and the validated kinematic chain.

pub mod chain;
pub mod role;
pub mod transform;

pub use chain::{KinematicChain, MAX_ANGLE_STEPS, angle_steps};
pub use role::{JointRole, MAX_DOF};
pub use transform::transform;
