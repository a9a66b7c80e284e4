//! Serial implementation of joint-space enumeration

use crate::enumerate::traits::EnumerationOps;
use crate::enumerate::{AngleEnumerator, WorkerGrid};
use crate::errors::EnvelopeError;
use crate::kinematics::KinematicChain;

/// Runs every first-joint task on the calling thread.
pub struct SerialEnumerationOps;

impl SerialEnumerationOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialEnumerationOps {
    fn default() -> Self {
        Self::new()
    }
}

impl EnumerationOps for SerialEnumerationOps {
    fn sweep(&self, chain: &KinematicChain) -> Result<Vec<WorkerGrid>, EnvelopeError> {
        (0..chain.first_joint_angles().len())
            .map(|step| AngleEnumerator::run_worker(chain, step))
            .collect()
    }
}
