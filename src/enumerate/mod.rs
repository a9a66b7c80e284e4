//! Joint-space enumeration.
//!
//! The first joint's half range is split into one task per angle step; each
//! task runs an [`AngleEnumerator`] over the remaining joints into a private
//! grid. [`EnumerationOps`] abstracts how the tasks are scheduled
//! (serial/parallel).

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use serial::SerialEnumerationOps;
pub use traits::EnumerationOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelEnumerationOps;

use crate::errors::EnvelopeError;
use crate::float_types::Real;
use crate::grid::OccupancyGrid;
use crate::kinematics::KinematicChain;
use nalgebra::{Matrix4, Point3};

/// One worker's output: the grid for a single first-joint angle.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkerGrid {
    /// First-joint angle in degrees
    pub first_angle: Real,
    pub grid: OccupancyGrid,
}

/// Recursive walk over joints `2..=dof`, composing transforms base to tip.
pub struct AngleEnumerator<'a> {
    chain: &'a KinematicChain,
    grid: OccupancyGrid,
}

impl<'a> AngleEnumerator<'a> {
    pub fn new(chain: &'a KinematicChain) -> Self {
        Self {
            chain,
            grid: OccupancyGrid::new(),
        }
    }

    /// Run the task for step `step` of the first joint.
    pub fn run_worker(chain: &'a KinematicChain, step: usize) -> Result<WorkerGrid, EnvelopeError> {
        let first_angle = chain.first_joint_angles()[step];
        let base = chain.joint_transforms(1)[step];

        let mut enumerator = Self::new(chain);
        enumerator.enumerate(2, &base)?;
        Ok(WorkerGrid {
            first_angle,
            grid: enumerator.into_grid(),
        })
    }

    /// Enumerate every angle of joint `joint_index` and beyond, with `accumulated`
    /// the pose at the end of joint `joint_index - 1`.
    ///
    /// Past the last joint, `accumulated` is the end-effector pose and gets counted.
    pub fn enumerate(
        &mut self,
        joint_index: usize,
        accumulated: &Matrix4<Real>,
    ) -> Result<(), EnvelopeError> {
        if joint_index > self.chain.dof() {
            return self.record(accumulated);
        }
        let chain = self.chain;
        for joint in chain.joint_transforms(joint_index) {
            let composed = accumulated * joint;
            self.enumerate(joint_index + 1, &composed)?;
        }
        Ok(())
    }

    fn record(&mut self, pose: &Matrix4<Real>) -> Result<(), EnvelopeError> {
        let position = Point3::new(pose[(0, 3)], pose[(1, 3)], pose[(2, 3)]);
        self.grid.accumulate(&position)
    }

    pub fn into_grid(self) -> OccupancyGrid {
        self.grid
    }
}
