//! Navigation grid: a routing area rasterized into walkable cells.
//!
//! The grid covers the bounding box of the area. Cell (row, col) spans
//! `[min_x + col*cell_w, min_x + (col+1)*cell_w)` by
//! `[min_y + row*cell_h, min_y + (row+1)*cell_h)`; rows grow with Y.

use geo::Polygon;
use log::{debug, trace};

use crate::core::{GridCell, WorldPoint};
use crate::geometry::{bounds, contains_point};

/// Occupancy grid for one route request.
#[derive(Clone, Debug)]
pub struct NavGrid {
    /// Walkable flags, row-major
    walkable: Vec<bool>,
    rows: usize,
    cols: usize,
    /// Lower-left corner of the bounding box
    min: WorldPoint,
    /// Upper-right corner of the bounding box
    max: WorldPoint,
    cell_w: f64,
    cell_h: f64,
}

impl NavGrid {
    /// Rasterize `area` with about `desired_cols` columns.
    ///
    /// `cols = max(min_dimension, desired_cols)`; rows follow from the
    /// aspect ratio so cells are close to square, again at least
    /// `min_dimension`. A cell is walkable iff its center lies inside the
    /// area (boundary included). Returns `None` for an area with zero width
    /// or height.
    pub fn rasterize(area: &Polygon<f64>, desired_cols: usize, min_dimension: usize) -> Option<Self> {
        let (min, max) = bounds(area)?;
        let width = max.x - min.x;
        let height = max.y - min.y;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            debug!("[NavGrid] degenerate bounds {:.3} x {:.3}", width, height);
            return None;
        }

        let cols = desired_cols.max(min_dimension).max(1);
        let cell_w = width / cols as f64;
        let rows = ((height / cell_w).round() as usize).max(min_dimension).max(1);
        let cell_h = height / rows as f64;

        let mut grid = Self {
            walkable: vec![false; rows * cols],
            rows,
            cols,
            min,
            max,
            cell_w,
            cell_h,
        };

        for row in 0..rows {
            for col in 0..cols {
                let cell = GridCell::new(row as i32, col as i32);
                grid.walkable[row * cols + col] = contains_point(area, grid.center(cell));
            }
        }

        trace!(
            "[NavGrid] {}x{} cells ({:.3} x {:.3}), {} walkable",
            rows,
            cols,
            cell_w,
            cell_h,
            grid.walkable_count()
        );
        Some(grid)
    }

    /// Build a grid from explicit flags (row-major) over `min..max`.
    #[cfg(test)]
    pub(crate) fn from_flags(
        rows: usize,
        cols: usize,
        min: WorldPoint,
        max: WorldPoint,
        walkable: Vec<bool>,
    ) -> Self {
        assert_eq!(walkable.len(), rows * cols);
        Self {
            walkable,
            rows,
            cols,
            min,
            max,
            cell_w: (max.x - min.x) / cols as f64,
            cell_h: (max.y - min.y) / rows as f64,
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell size as (width, height)
    #[inline]
    pub fn cell_size(&self) -> (f64, f64) {
        (self.cell_w, self.cell_h)
    }

    /// Bounding box covered by the grid as `(min, max)`
    #[inline]
    pub fn bounds(&self) -> (WorldPoint, WorldPoint) {
        (self.min, self.max)
    }

    /// Is the cell inside the grid?
    #[inline]
    pub fn in_bounds(&self, cell: GridCell) -> bool {
        cell.row >= 0 && cell.col >= 0 && (cell.row as usize) < self.rows && (cell.col as usize) < self.cols
    }

    /// Is the cell inside the grid and walkable?
    #[inline]
    pub fn is_walkable(&self, cell: GridCell) -> bool {
        self.in_bounds(cell) && self.walkable[cell.row as usize * self.cols + cell.col as usize]
    }

    /// Cell containing a point (floor division; may be out of bounds)
    pub fn cell_of(&self, point: WorldPoint) -> GridCell {
        let col = ((point.x - self.min.x) / self.cell_w).floor();
        let row = ((point.y - self.min.y) / self.cell_h).floor();
        GridCell::new(saturate(row), saturate(col))
    }

    /// Planar coordinate of the cell center
    #[inline]
    pub fn center(&self, cell: GridCell) -> WorldPoint {
        WorldPoint::new(
            self.min.x + (cell.col as f64 + 0.5) * self.cell_w,
            self.min.y + (cell.row as f64 + 0.5) * self.cell_h,
        )
    }

    /// Clamp a cell index into the grid
    #[inline]
    pub fn clamp(&self, cell: GridCell) -> GridCell {
        GridCell::new(
            cell.row.clamp(0, self.rows as i32 - 1),
            cell.col.clamp(0, self.cols as i32 - 1),
        )
    }

    /// Nearest walkable cell around `cell`.
    ///
    /// The cell is clamped into the grid first. Each radius `d` in `radii`
    /// is a Manhattan ring visited row offset by row offset from `-d` to `d`,
    /// trying `(r+dr, c+dc)` then `(r+dr, c-dc)` with `dc = d - |dr|`.
    /// Candidates outside the grid are clamped back in. The first walkable
    /// candidate wins.
    pub fn nearest_walkable(&self, cell: GridCell, radii: &[i32]) -> Option<GridCell> {
        let start = self.clamp(cell);
        if self.is_walkable(start) {
            return Some(start);
        }

        for &d in radii {
            for dr in -d..=d {
                let dc = d - dr.abs();
                for candidate in [start.offset(dr, dc), start.offset(dr, -dc)] {
                    let clamped = self.clamp(candidate);
                    if self.is_walkable(clamped) {
                        return Some(clamped);
                    }
                }
            }
        }

        None
    }

    /// Number of walkable cells
    pub fn walkable_count(&self) -> usize {
        self.walkable.iter().filter(|w| **w).count()
    }
}

/// Float cell index to i32, saturating far-away points instead of wrapping.
fn saturate(index: f64) -> i32 {
    if index.is_nan() {
        0
    } else {
        index.clamp(i32::MIN as f64, i32::MAX as f64) as i32
    }
}
