//! Point and cell types for floor routing.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// Grid cell (integer row/column indices into a [`NavGrid`](crate::grid::NavGrid))
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCell {
    /// Row index (grows with Y)
    pub row: i32,
    /// Column index (grows with X)
    pub col: i32,
}

impl GridCell {
    /// Create a new grid cell
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Euclidean distance in cell-index space
    #[inline]
    pub fn euclidean_distance(&self, other: &GridCell) -> f64 {
        let dr = (self.row - other.row) as f64;
        let dc = (self.col - other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// Is `other` one of the 8 neighbors of this cell?
    #[inline]
    pub fn is_adjacent(&self, other: &GridCell) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr <= 1 && dc <= 1 && (dr + dc) > 0
    }

    /// Offset this cell by (dr, dc)
    #[inline]
    pub fn offset(&self, dr: i32, dc: i32) -> GridCell {
        GridCell::new(self.row + dr, self.col + dc)
    }
}

/// Planar floor coordinate.
///
/// Units are whatever the floor geometry uses; erosion margins are
/// expressed in the same unit (meters after [`LocalProjection`](crate::io::LocalProjection)).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate (easting / longitude)
    pub x: f64,
    /// Y coordinate (northing / latitude)
    pub y: f64,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation towards `other` (t=0 → self, t=1 → other)
    #[inline]
    pub fn lerp(&self, other: &WorldPoint, t: f64) -> WorldPoint {
        WorldPoint::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Both components are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<WorldPoint> for Coord<f64> {
    #[inline]
    fn from(p: WorldPoint) -> Self {
        Coord { x: p.x, y: p.y }
    }
}

impl From<Coord<f64>> for WorldPoint {
    #[inline]
    fn from(c: Coord<f64>) -> Self {
        WorldPoint::new(c.x, c.y)
    }
}

/// Total length of a polyline
pub fn polyline_length(points: &[WorldPoint]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_adjacency() {
        let c = GridCell::new(5, 5);
        assert!(c.is_adjacent(&GridCell::new(6, 6)));
        assert!(c.is_adjacent(&GridCell::new(5, 4)));
        assert!(!c.is_adjacent(&c));
        assert!(!c.is_adjacent(&GridCell::new(7, 5)));
    }

    #[test]
    fn test_cell_euclidean() {
        let a = GridCell::new(0, 0);
        let b = GridCell::new(3, 4);
        assert!((a.euclidean_distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_world_point_lerp() {
        let a = WorldPoint::new(0.0, 0.0);
        let b = WorldPoint::new(4.0, 2.0);
        assert_eq!(a.lerp(&b, 0.5), WorldPoint::new(2.0, 1.0));
        assert!((a.distance(&b) - 20f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_polyline_length() {
        let line = [
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(3.0, 0.0),
            WorldPoint::new(3.0, 4.0),
        ];
        assert!((polyline_length(&line) - 7.0).abs() < 1e-12);
        assert_eq!(polyline_length(&line[..1]), 0.0);
    }
}
