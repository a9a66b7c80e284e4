//! Parallel implementation of joint-space enumeration

use crate::enumerate::traits::EnumerationOps;
use crate::enumerate::{AngleEnumerator, WorkerGrid};
use crate::errors::EnvelopeError;
use crate::kinematics::KinematicChain;
use rayon::prelude::*;

/// Fork-join over first-joint tasks with rayon.
///
/// Each task owns its grid until it is returned; nothing is shared mutably.
/// With no explicit worker count the global rayon pool is used.
pub struct ParallelEnumerationOps {
    threads: Option<usize>,
}

impl ParallelEnumerationOps {
    pub const fn new() -> Self {
        Self { threads: None }
    }

    /// Run on a dedicated pool of `threads` workers.
    pub const fn with_threads(threads: usize) -> Self {
        Self {
            threads: Some(threads),
        }
    }

    fn run(chain: &KinematicChain) -> Result<Vec<WorkerGrid>, EnvelopeError> {
        (0..chain.first_joint_angles().len())
            .into_par_iter()
            .map(|step| AngleEnumerator::run_worker(chain, step))
            .collect()
    }
}

impl Default for ParallelEnumerationOps {
    fn default() -> Self {
        Self::new()
    }
}

impl EnumerationOps for ParallelEnumerationOps {
    fn sweep(&self, chain: &KinematicChain) -> Result<Vec<WorkerGrid>, EnvelopeError> {
        match self.threads {
            None => Self::run(chain),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EnvelopeError::WorkerPool(e.to_string()))?;
                pool.install(|| Self::run(chain))
            },
        }
    }
}
