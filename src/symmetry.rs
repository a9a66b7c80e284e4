//! Reconstruction of the full envelope from the `[-max_angle, 0]` first-joint sweep.
//!
//! A base rotation by `-q` is the Y-reflection of the rotation by `q`, so the
//! grid for `(0, max_angle]` is taken to be the computed grid reflected across
//! the `y = 0` plane.

use crate::enumerate::WorkerGrid;
use crate::float_types::{Real, tolerance};
use crate::grid::OccupancyGrid;
use serde::{Deserialize, Serialize};

/// How the reflected half is combined with the computed half.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MirrorPolicy {
    /// `half + reflect(half)`. Cells on `y = 0` are counted twice.
    /// Matches the historical output of the tool.
    #[default]
    Duplicate,
    /// Like [`Duplicate`](Self::Duplicate) but the `y = 0` plane is kept once.
    SinglePlane,
    /// `half + reflect(half)` minus the grid of the first-joint angle 0 task,
    /// which is the one angle present in both halves.
    SubtractZeroAngle,
}

/// The computed half of an envelope, before mirroring.
#[derive(Clone, Debug, PartialEq)]
pub struct HalfEnvelope {
    /// Sum of every worker grid
    pub grid: OccupancyGrid,
    /// Grid of the task whose first-joint angle is 0, if the steps landed on 0
    pub zero_angle: Option<OccupancyGrid>,
}

impl HalfEnvelope {
    /// Reduce worker grids into one half envelope.
    pub fn from_workers(workers: &[WorkerGrid]) -> Self {
        let grid = OccupancyGrid::merge(workers.iter().map(|w| &w.grid));
        let zero_angle = workers
            .iter()
            .find(|w| is_zero(w.first_angle))
            .map(|w| w.grid.clone());
        Self { grid, zero_angle }
    }
}

fn is_zero(angle: Real) -> bool {
    angle.abs() <= tolerance()
}

/// Reflect `half` across `y = 0` and combine according to `policy`.
pub fn mirror(half: &HalfEnvelope, policy: MirrorPolicy) -> OccupancyGrid {
    let mut full = half.grid.clone();
    full.merge_from(&half.grid.reflect_y());
    match policy {
        MirrorPolicy::Duplicate => {},
        MirrorPolicy::SinglePlane => full.copy_plane_y(&half.grid, 0),
        MirrorPolicy::SubtractZeroAngle => {
            // The zero-angle grid is one of the summands of `half.grid`, so this never underflows.
            if let Some(zero) = &half.zero_angle {
                full.subtract(zero);
            }
        },
    }
    full
}
