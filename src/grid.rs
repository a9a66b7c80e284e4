//! Fixed 61×61×61 occupancy grid over the ±30 cm cube.

use crate::errors::EnvelopeError;
use crate::float_types::Real;
use nalgebra::Point3;

/// Half-width of the grid cube in centimetres.
pub const GRID_EXTENT: i64 = 30;
/// Positions per axis (one per centimetre, both ends included).
pub const GRID_SIDE: usize = (2 * GRID_EXTENT + 1) as usize;
/// Edge of a populated cell; positions are rounded to multiples of this.
pub const CELL_SIZE: i64 = 5;

/// Hit counts per centimetre position.
///
/// Only multiples of [`CELL_SIZE`] are ever populated, but every centimetre
/// has a slot so indexing is a plain offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Vec<u64>,
}

impl Default for OccupancyGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl OccupancyGrid {
    /// Zero-initialized grid.
    pub fn new() -> Self {
        Self {
            cells: vec![0; GRID_SIDE * GRID_SIDE * GRID_SIDE],
        }
    }

    #[inline]
    const fn linearize(ix: usize, iy: usize, iz: usize) -> usize {
        (iz * GRID_SIDE + iy) * GRID_SIDE + ix
    }

    #[inline]
    fn index_of(coord: i64) -> Option<usize> {
        (-GRID_EXTENT..=GRID_EXTENT)
            .contains(&coord)
            .then(|| (coord + GRID_EXTENT) as usize)
    }

    /// Round a position to the nearest cell, in whole centimetres.
    ///
    /// Each coordinate is divided by the cell size, rounded half away from zero
    /// and scaled back. Fails if any coordinate lands outside the grid; the
    /// check runs on the rounded float so no integer conversion can overflow.
    pub fn quantize(position: &Point3<Real>) -> Result<[i64; 3], EnvelopeError> {
        let cells = [position.x, position.y, position.z].map(|v| (v / CELL_SIZE as Real).round());
        let limit = (GRID_EXTENT / CELL_SIZE) as Real;
        // NaN fails the comparison and is rejected too.
        if !cells.iter().all(|c| c.abs() <= limit) {
            let [x, y, z] = cells.map(|c| c * CELL_SIZE as Real);
            return Err(EnvelopeError::OutOfBoundsPosition { x, y, z });
        }
        Ok(cells.map(|c| c as i64 * CELL_SIZE))
    }

    /// Count one hit at the cell nearest `position`.
    pub fn accumulate(&mut self, position: &Point3<Real>) -> Result<(), EnvelopeError> {
        let [x, y, z] = Self::quantize(position)?;
        let i = Self::linearize(
            (x + GRID_EXTENT) as usize,
            (y + GRID_EXTENT) as usize,
            (z + GRID_EXTENT) as usize,
        );
        self.cells[i] += 1;
        Ok(())
    }

    /// Hits recorded at `(x, y, z)` cm. Positions off the grid read as zero.
    pub fn count(&self, x: i64, y: i64, z: i64) -> u64 {
        match (Self::index_of(x), Self::index_of(y), Self::index_of(z)) {
            (Some(ix), Some(iy), Some(iz)) => self.cells[Self::linearize(ix, iy, iz)],
            _ => 0,
        }
    }

    /// Elementwise add `other` into `self`.
    pub fn merge_from(&mut self, other: &Self) {
        self.cells
            .iter_mut()
            .zip(&other.cells)
            .for_each(|(a, b)| *a += b);
    }

    /// Elementwise sum of all `grids`. Order does not matter.
    pub fn merge<'a>(grids: impl IntoIterator<Item = &'a Self>) -> Self {
        grids.into_iter().fold(Self::new(), |mut acc, grid| {
            acc.merge_from(grid);
            acc
        })
    }

    /// Copy with the Y axis reversed: cell `(x, y, z)` moves to `(x, -y, z)`.
    pub fn reflect_y(&self) -> Self {
        let mut out = Self::new();
        for iz in 0..GRID_SIDE {
            for iy in 0..GRID_SIDE {
                let src = Self::linearize(0, iy, iz);
                let dst = Self::linearize(0, GRID_SIDE - 1 - iy, iz);
                out.cells[dst..dst + GRID_SIDE].copy_from_slice(&self.cells[src..src + GRID_SIDE]);
            }
        }
        out
    }

    /// Elementwise subtraction of a grid known to be bounded by `self`.
    pub(crate) fn subtract(&mut self, other: &Self) {
        self.cells
            .iter_mut()
            .zip(&other.cells)
            .for_each(|(a, b)| *a -= b);
    }

    /// Copy every cell of the `y` plane from `source`.
    pub(crate) fn copy_plane_y(&mut self, source: &Self, y: i64) {
        let Some(iy) = Self::index_of(y) else {
            return;
        };
        for iz in 0..GRID_SIDE {
            let row = Self::linearize(0, iy, iz);
            self.cells[row..row + GRID_SIDE].copy_from_slice(&source.cells[row..row + GRID_SIDE]);
        }
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.cells.iter().sum()
    }

    /// Sum of counts in the plane at `y` cm.
    pub fn plane_total(&self, y: i64) -> u64 {
        let Some(iy) = Self::index_of(y) else {
            return 0;
        };
        (0..GRID_SIDE)
            .map(|iz| {
                let row = Self::linearize(0, iy, iz);
                self.cells[row..row + GRID_SIDE].iter().sum::<u64>()
            })
            .sum()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c > 0).count()
    }

    /// Raw counts, x fastest, then y, then z.
    pub fn as_slice(&self) -> &[u64] {
        &self.cells
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quantize_rounds_half_away_from_zero() {
        assert_eq!(OccupancyGrid::quantize(&Point3::new(2.5, -2.5, 2.49)).unwrap(), [5, -5, 0]);
        assert_eq!(OccupancyGrid::quantize(&Point3::new(7.4, -12.6, 0.0)).unwrap(), [5, -15, 0]);
    }

    #[test]
    fn quantize_keeps_edge_cells() {
        assert_eq!(OccupancyGrid::quantize(&Point3::new(32.4, -32.4, 30.0)).unwrap(), [30, -30, 30]);
    }

    #[test]
    fn quantize_rejects_outside() {
        assert_eq!(
            OccupancyGrid::quantize(&Point3::new(0.0, 32.5, 0.0)),
            Err(EnvelopeError::OutOfBoundsPosition { x: 0.0, y: 35.0, z: 0.0 })
        );
    }

    #[test]
    fn quantize_rejects_huge_coordinates() {
        for v in [1e20, -1e20, Real::MAX, Real::MIN] {
            let err = OccupancyGrid::quantize(&Point3::new(0.0, v, 0.0)).unwrap_err();
            assert!(matches!(err, EnvelopeError::OutOfBoundsPosition { .. }), "{v}");
        }
        let mut grid = OccupancyGrid::new();
        assert!(grid.accumulate(&Point3::new(-1e20, 0.0, 0.0)).is_err());
        assert_eq!(grid.total(), 0);
    }

    #[test]
    fn quantize_rejects_nan() {
        assert!(OccupancyGrid::quantize(&Point3::new(Real::NAN, 0.0, 0.0)).is_err());
    }

    #[test]
    fn accumulate_and_count() {
        let mut grid = OccupancyGrid::new();
        grid.accumulate(&Point3::new(1.0, 9.0, -30.0)).unwrap();
        grid.accumulate(&Point3::new(-1.0, 11.0, -29.0)).unwrap();
        assert_eq!(grid.count(0, 10, -30), 2);
        assert_eq!(grid.count(0, -10, -30), 0);
        assert_eq!(grid.count(0, 99, 0), 0);
        assert_eq!(grid.total(), 2);
        assert_eq!(grid.occupied(), 1);
    }

    #[test]
    fn reflect_moves_y_only() {
        let mut grid = OccupancyGrid::new();
        grid.accumulate(&Point3::new(5.0, 20.0, -10.0)).unwrap();
        grid.accumulate(&Point3::new(0.0, 0.0, 0.0)).unwrap();
        let reflected = grid.reflect_y();
        assert_eq!(reflected.count(5, -20, -10), 1);
        assert_eq!(reflected.count(5, 20, -10), 0);
        assert_eq!(reflected.count(0, 0, 0), 1);
        assert_eq!(reflected.reflect_y(), grid);
    }

    #[test]
    fn plane_total_sums_one_slice() {
        let mut grid = OccupancyGrid::new();
        grid.accumulate(&Point3::new(5.0, 0.0, -10.0)).unwrap();
        grid.accumulate(&Point3::new(-30.0, 0.0, 30.0)).unwrap();
        grid.accumulate(&Point3::new(0.0, 5.0, 0.0)).unwrap();
        assert_eq!(grid.plane_total(0), 2);
        assert_eq!(grid.plane_total(5), 1);
        assert_eq!(grid.plane_total(40), 0);
    }
}
