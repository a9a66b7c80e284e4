//! Extraction of reach points and hit counts from a finished grid.

use crate::float_types::Real;
use crate::grid::{CELL_SIZE, GRID_EXTENT, OccupancyGrid};
use serde::Serialize;
use std::fmt::Display;

/// Cells per axis that can be populated (multiples of [`CELL_SIZE`] in `[-30, 30]`).
pub const CELLS_PER_AXIS: usize = (2 * GRID_EXTENT / CELL_SIZE + 1) as usize;

/// A reachable cell and how densely joint space maps onto it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReachPoint {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    /// Natural log of the hit count
    pub weight: Real,
}

/// Unique and total counts of a grid, plus access to its points.
#[derive(Clone, Copy, Debug)]
pub struct ResultSummary<'a> {
    grid: &'a OccupancyGrid,
    pub unique_count: usize,
    pub total_count: u64,
}

/// Summarize a finished grid.
pub fn summarize(grid: &OccupancyGrid) -> ResultSummary<'_> {
    let (unique_count, total_count) = cell_coords()
        .map(|[x, y, z]| grid.count(x, y, z))
        .filter(|&count| count > 0)
        .fold((0, 0), |(unique, total), count| (unique + 1, total + count));
    ResultSummary {
        grid,
        unique_count,
        total_count,
    }
}

impl<'a> ResultSummary<'a> {
    /// Every non-empty cell, x fastest then y then z. Can be called any number of times.
    pub fn points(&self) -> ReachPoints<'a> {
        ReachPoints {
            grid: self.grid,
            coords: Box::new(cell_coords()),
        }
    }
}

impl Display for ResultSummary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} unique, {} total points found",
            self.unique_count, self.total_count
        )
    }
}

/// Lazy iterator over the non-empty cells of a grid.
pub struct ReachPoints<'a> {
    grid: &'a OccupancyGrid,
    coords: Box<dyn Iterator<Item = [i64; 3]> + 'a>,
}

impl Iterator for ReachPoints<'_> {
    type Item = ReachPoint;

    fn next(&mut self) -> Option<Self::Item> {
        for [x, y, z] in self.coords.by_ref() {
            let count = self.grid.count(x, y, z);
            if count > 0 {
                return Some(ReachPoint {
                    x,
                    y,
                    z,
                    weight: (count as Real).ln(),
                });
            }
        }
        None
    }
}

fn cell_coords() -> impl Iterator<Item = [i64; 3]> {
    let axis = || (0..CELLS_PER_AXIS as i64).map(|i| i * CELL_SIZE - GRID_EXTENT);
    axis().flat_map(move |z| axis().flat_map(move |y| axis().map(move |x| [x, y, z])))
}
