//! Traits defining how first-joint tasks are scheduled

use crate::enumerate::WorkerGrid;
use crate::errors::EnvelopeError;
use crate::kinematics::KinematicChain;

/// Core enumeration trait.
pub trait EnumerationOps {
    /// Run one task per first-joint angle of `chain` and return every task's grid,
    /// in first-joint angle order.
    ///
    /// The first failing task fails the whole sweep; no partial results are returned.
    fn sweep(&self, chain: &KinematicChain) -> Result<Vec<WorkerGrid>, EnvelopeError>;
}
