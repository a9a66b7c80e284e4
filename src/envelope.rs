//! End-to-end envelope computation: validate, sweep, reduce, mirror.

use crate::config::EnvelopeConfig;
use crate::enumerate::EnumerationOps;
use crate::errors::EnvelopeError;
use crate::grid::OccupancyGrid;
use crate::kinematics::KinematicChain;
use crate::summary::{ResultSummary, summarize};
use crate::symmetry::{HalfEnvelope, mirror};

/// A computed work envelope.
#[derive(Clone, Debug)]
pub struct WorkEnvelope {
    config: EnvelopeConfig,
    half: HalfEnvelope,
    grid: OccupancyGrid,
}

impl WorkEnvelope {
    /// Compute with the default scheduler (parallel when the `parallel` feature is on).
    pub fn compute(config: &EnvelopeConfig) -> Result<Self, EnvelopeError> {
        #[cfg(not(feature = "parallel"))]
        let ops = crate::enumerate::SerialEnumerationOps::new();
        #[cfg(feature = "parallel")]
        let ops = crate::enumerate::ParallelEnumerationOps::new();

        Self::compute_with(config, &ops)
    }

    /// Compute using `ops` to schedule the first-joint tasks.
    pub fn compute_with<O: EnumerationOps>(
        config: &EnvelopeConfig,
        ops: &O,
    ) -> Result<Self, EnvelopeError> {
        let chain = KinematicChain::new(config)?;
        log::debug!(
            "enumerating {} DOF arm: link {} cm, {} first-joint tasks, {} samples",
            chain.dof(),
            chain.link_length(),
            chain.first_joint_angles().len(),
            chain.sample_count()
        );

        let workers = ops.sweep(&chain)?;
        let half = HalfEnvelope::from_workers(&workers);
        log::debug!(
            "sweep finished: {} hits over {} cells in the computed half",
            half.grid.total(),
            half.grid.occupied()
        );

        let grid = mirror(&half, config.mirror);
        Ok(Self {
            config: config.clone(),
            half,
            grid,
        })
    }

    pub const fn config(&self) -> &EnvelopeConfig {
        &self.config
    }

    /// Grid of the computed first-joint half, before mirroring.
    pub const fn half(&self) -> &HalfEnvelope {
        &self.half
    }

    /// The mirrored, full envelope grid.
    pub const fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn summary(&self) -> ResultSummary<'_> {
        summarize(&self.grid)
    }
}
