//! Uniform grid index over a region footprint for fast neighbour rejection.
use glam::Vec2;

use crate::error::{Error, Result};
use crate::sampling::{grid_dims, MAX_GRID_DIMENSION};

/// Number of cells scanned on each side of the query cell.
const SEARCH_REACH: usize = 2;

/// Dense row-major grid whose cells each hold at most one point index.
///
/// Cell geometry is fixed at construction; later inserts overwrite whatever index already
/// occupies their cell.
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    cell_size: f32,
    width: usize,
    height: usize,
    cells: Vec<Option<usize>>,
}

impl SpatialGrid {
    /// Allocates a grid covering `extent` with square cells of `cell_size`.
    ///
    /// Fails with [`Error::GridTooLarge`] before allocating if either dimension would exceed
    /// [`MAX_GRID_DIMENSION`].
    pub fn try_new(extent: Vec2, cell_size: f32) -> Result<Self> {
        if cell_size.is_nan() || cell_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "grid cell size must be > 0, got {cell_size}"
            )));
        }

        let (width, height) = grid_dims(extent.max(Vec2::ZERO), cell_size);
        if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
            return Err(Error::GridTooLarge {
                width,
                height,
                max: MAX_GRID_DIMENSION,
            });
        }

        Ok(Self {
            cell_size,
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell containing `p`, clamped onto the grid. `None` if the grid has no cells.
    #[inline]
    pub fn cell_of(&self, p: Vec2) -> Option<(usize, usize)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let x = ((p.x / self.cell_size) as usize).min(self.width - 1);
        let y = ((p.y / self.cell_size) as usize).min(self.height - 1);
        Some((x, y))
    }

    /// Point index stored in cell `(x, y)`, if any.
    pub fn get(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[self.index(x, y)]
    }

    /// Records `point_index` in the cell containing `p`.
    pub fn insert(&mut self, p: Vec2, point_index: usize) {
        if let Some((x, y)) = self.cell_of(p) {
            let idx = self.index(x, y);
            self.cells[idx] = Some(point_index);
        }
    }

    /// Calls `f` with every stored index in the 5x5 block of cells around `p`.
    ///
    /// Stops early and returns `true` as soon as `f` returns `true`.
    pub fn any_nearby(&self, p: Vec2, mut f: impl FnMut(usize) -> bool) -> bool {
        let Some((cx, cy)) = self.cell_of(p) else {
            return false;
        };

        let start_x = cx.saturating_sub(SEARCH_REACH);
        let end_x = (cx + SEARCH_REACH).min(self.width - 1);
        let start_y = cy.saturating_sub(SEARCH_REACH);
        let end_y = (cy + SEARCH_REACH).min(self.height - 1);

        for y in start_y..=end_y {
            for x in start_x..=end_x {
                if let Some(i) = self.cells[self.index(x, y)] {
                    if f(i) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_round_up() {
        let grid = SpatialGrid::try_new(Vec2::new(10.0, 4.0), 3.0).expect("grid");
        assert_eq!((grid.width(), grid.height()), (4, 2));
        assert_eq!(grid.cell_size(), 3.0);
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let err = SpatialGrid::try_new(Vec2::new(10_000.0, 10.0), 0.5 / std::f32::consts::SQRT_2)
            .expect_err("too large");
        match err {
            Error::GridTooLarge { width, height, max } => {
                assert!(width > MAX_GRID_DIMENSION);
                assert!(height <= MAX_GRID_DIMENSION);
                assert_eq!(max, MAX_GRID_DIMENSION);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn non_positive_cell_size_is_invalid() {
        assert!(matches!(
            SpatialGrid::try_new(Vec2::splat(10.0), 0.0),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn insert_and_lookup() {
        let mut grid = SpatialGrid::try_new(Vec2::new(10.0, 10.0), 1.0).expect("grid");
        assert_eq!(grid.get(3, 4), None);
        grid.insert(Vec2::new(3.5, 4.2), 7);
        assert_eq!(grid.get(3, 4), Some(7));
        assert_eq!(grid.cell_of(Vec2::new(3.5, 4.2)), Some((3, 4)));
        // Later inserts overwrite.
        grid.insert(Vec2::new(3.9, 4.9), 8);
        assert_eq!(grid.get(3, 4), Some(8));
    }

    #[test]
    fn cell_of_clamps_to_grid() {
        let grid = SpatialGrid::try_new(Vec2::new(2.0, 2.0), 1.0).expect("grid");
        assert_eq!(grid.cell_of(Vec2::new(2.0, 5.0)), Some((1, 1)));
        let empty = SpatialGrid::try_new(Vec2::ZERO, 1.0).expect("grid");
        assert_eq!(empty.cell_of(Vec2::ZERO), None);
        assert!(!empty.any_nearby(Vec2::ZERO, |_| true));
    }

    #[test]
    fn any_nearby_scans_two_cells_each_way() {
        let mut grid = SpatialGrid::try_new(Vec2::new(10.0, 10.0), 1.0).expect("grid");
        grid.insert(Vec2::new(5.5, 5.5), 0);

        assert!(grid.any_nearby(Vec2::new(3.5, 7.5), |_| true));
        assert!(!grid.any_nearby(Vec2::new(2.5, 5.5), |_| true));
        assert!(!grid.any_nearby(Vec2::new(5.5, 8.5), |_| true));

        let mut seen = Vec::new();
        grid.any_nearby(Vec2::new(5.0, 5.0), |i| {
            seen.push(i);
            false
        });
        assert_eq!(seen, vec![0]);
    }
}
