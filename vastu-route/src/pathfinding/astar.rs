//! A* search over the navigation grid.
//!
//! Implements A* on a [`NavGrid`] with:
//! - 8-connected movement (orthogonal cost 1, diagonal cost √2)
//! - No corner cutting: a diagonal move needs both orthogonal neighbors walkable
//! - Every edge checked against the routing area with sampled visibility
//! - Deterministic tie-breaking by first insertion into the open set

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use geo::Polygon;
use log::{debug, trace};

use crate::core::{GridCell, WorldPoint};
use crate::geometry::segment_inside;
use crate::grid::NavGrid;

/// Neighbor offsets `(dr, dc, cost)`; orthogonal first, then diagonal.
const DIRECTIONS: [(i32, i32, f64); 8] = [
    (1, 0, 1.0),
    (-1, 0, 1.0),
    (0, 1, 1.0),
    (0, -1, 1.0),
    (1, 1, std::f64::consts::SQRT_2),
    (1, -1, std::f64::consts::SQRT_2),
    (-1, 1, std::f64::consts::SQRT_2),
    (-1, -1, std::f64::consts::SQRT_2),
];

/// Entry in the open set.
///
/// Ordered so that the max-heap pops the lowest `f`, and among equal `f`
/// the entry whose cell entered the open set first.
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f: f64,
    order: u64,
    g: f64,
    cell: GridCell,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search limits
#[derive(Clone, Debug)]
pub struct AStarConfig {
    /// Maximum number of nodes to expand before giving up
    pub max_expansions: usize,
    /// Interior samples per edge visibility check
    pub visibility_samples: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            max_expansions: 250_000,
            visibility_samples: 15,
        }
    }
}

/// Successful A* search
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Cells from start to goal inclusive
    pub cells: Vec<GridCell>,
    /// Total path cost in cell units
    pub cost: f64,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
}

/// Reason for path failure
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start or goal is outside the grid or not walkable
    OutOfBounds,
    /// Open set exhausted without reaching the goal
    NoPath,
    /// Maximum expansions exceeded
    ExpansionLimit,
    /// Cancellation flag was raised
    Cancelled,
}

/// A* pathfinder bound to one grid and its routing area
pub struct AStarPlanner<'a> {
    grid: &'a NavGrid,
    area: &'a Polygon<f64>,
    config: AStarConfig,
}

impl<'a> AStarPlanner<'a> {
    /// Create a new A* planner
    pub fn new(grid: &'a NavGrid, area: &'a Polygon<f64>, config: AStarConfig) -> Self {
        Self { grid, area, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a NavGrid, area: &'a Polygon<f64>) -> Self {
        Self::new(grid, area, AStarConfig::default())
    }

    /// Find a path from start to goal
    pub fn find_path(&self, start: GridCell, goal: GridCell) -> Result<PathResult, PathFailure> {
        self.search(start, goal, None)
    }

    /// Find a path, giving up once `cancel` is set.
    ///
    /// The flag is checked once per expanded node.
    pub fn find_path_cancellable(
        &self,
        start: GridCell,
        goal: GridCell,
        cancel: &AtomicBool,
    ) -> Result<PathResult, PathFailure> {
        self.search(start, goal, Some(cancel))
    }

    fn search(
        &self,
        start: GridCell,
        goal: GridCell,
        cancel: Option<&AtomicBool>,
    ) -> Result<PathResult, PathFailure> {
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{})",
            start.row, start.col, goal.row, goal.col
        );

        if !self.grid.is_walkable(start) || !self.grid.is_walkable(goal) {
            debug!("[AStar] FAILED: OutOfBounds - start or goal not a walkable cell");
            return Err(PathFailure::OutOfBounds);
        }

        let mut open_set = BinaryHeap::new();
        // Cells currently open, with the order they were first inserted in
        let mut open_order: HashMap<GridCell, u64> = HashMap::new();
        let mut came_from: HashMap<GridCell, GridCell> = HashMap::new();
        let mut g_scores: HashMap<GridCell, f64> = HashMap::new();
        let mut next_order = 0u64;

        g_scores.insert(start, 0.0);
        open_order.insert(start, next_order);
        open_set.push(OpenEntry {
            f: heuristic(start, goal),
            order: next_order,
            g: 0.0,
            cell: start,
        });
        next_order += 1;

        let mut nodes_expanded = 0usize;

        while let Some(current) = open_set.pop() {
            // Stale entry: cell already expanded or superseded by a better score
            if open_order.get(&current.cell) != Some(&current.order) {
                continue;
            }
            if g_scores.get(&current.cell) != Some(&current.g) {
                continue;
            }

            if current.cell == goal {
                return Ok(self.reconstruct_path(&came_from, goal, current.g, nodes_expanded));
            }

            open_order.remove(&current.cell);

            if cancel.is_some_and(|flag| flag.load(AtomicOrdering::Relaxed)) {
                debug!("[AStar] cancelled after {} nodes", nodes_expanded);
                return Err(PathFailure::Cancelled);
            }

            nodes_expanded += 1;
            if nodes_expanded > self.config.max_expansions {
                debug!("[AStar] FAILED: ExpansionLimit ({} nodes)", nodes_expanded);
                return Err(PathFailure::ExpansionLimit);
            }

            let from = self.grid.center(current.cell);

            for &(dr, dc, move_cost) in &DIRECTIONS {
                let neighbor = current.cell.offset(dr, dc);
                if !self.grid.is_walkable(neighbor) {
                    continue;
                }

                // No corner cutting
                if dr != 0
                    && dc != 0
                    && (!self.grid.is_walkable(current.cell.offset(dr, 0))
                        || !self.grid.is_walkable(current.cell.offset(0, dc)))
                {
                    continue;
                }

                let tentative_g = current.g + move_cost;
                let neighbor_g = g_scores.get(&neighbor).copied().unwrap_or(f64::INFINITY);
                if tentative_g >= neighbor_g {
                    continue;
                }

                if !self.edge_visible(from, self.grid.center(neighbor)) {
                    continue;
                }

                came_from.insert(neighbor, current.cell);
                g_scores.insert(neighbor, tentative_g);

                let order = *open_order.entry(neighbor).or_insert_with(|| {
                    let order = next_order;
                    next_order += 1;
                    order
                });
                open_set.push(OpenEntry {
                    f: tentative_g + heuristic(neighbor, goal),
                    order,
                    g: tentative_g,
                    cell: neighbor,
                });
            }
        }

        debug!("[AStar] FAILED: NoPath after expanding {} nodes", nodes_expanded);
        Err(PathFailure::NoPath)
    }

    #[inline]
    fn edge_visible(&self, a: WorldPoint, b: WorldPoint) -> bool {
        segment_inside(self.area, a, b, self.config.visibility_samples)
    }

    /// Reconstruct the path from came_from map
    fn reconstruct_path(
        &self,
        came_from: &HashMap<GridCell, GridCell>,
        goal: GridCell,
        cost: f64,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut cells = vec![goal];
        let mut current = goal;
        while let Some(&prev) = came_from.get(&current) {
            cells.push(prev);
            current = prev;
        }
        cells.reverse();

        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={:.2}, nodes_expanded={}",
            cells.len(),
            cost,
            nodes_expanded
        );

        PathResult {
            cells,
            cost,
            nodes_expanded,
        }
    }
}

/// Euclidean distance in cell-index space
#[inline]
fn heuristic(from: GridCell, to: GridCell) -> f64 {
    from.euclidean_distance(&to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rectangle;
    use approx::assert_relative_eq;
    use geo::LineString;

    /// Grid of unit cells over `0..cols × 0..rows`, with the matching area.
    fn open_grid(rows: usize, cols: usize) -> (NavGrid, Polygon<f64>) {
        let area = rectangle(WorldPoint::new(0.0, 0.0), WorldPoint::new(cols as f64, rows as f64));
        let grid = NavGrid::rasterize(&area, cols, 1).unwrap();
        (grid, area)
    }

    fn assert_valid_path(grid: &NavGrid, path: &[GridCell]) {
        for cell in path {
            assert!(grid.is_walkable(*cell));
        }
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(&pair[1]));
        }
    }

    #[test]
    fn test_straight_line() {
        let (grid, area) = open_grid(10, 10);
        let planner = AStarPlanner::with_defaults(&grid, &area);
        let result = planner.find_path(GridCell::new(5, 1), GridCell::new(5, 8)).unwrap();
        assert_eq!(result.cells.len(), 8);
        assert_relative_eq!(result.cost, 7.0);
        assert_valid_path(&grid, &result.cells);
    }

    #[test]
    fn test_diagonal_cost() {
        let (grid, area) = open_grid(10, 10);
        let planner = AStarPlanner::with_defaults(&grid, &area);
        let result = planner.find_path(GridCell::new(0, 0), GridCell::new(3, 3)).unwrap();
        assert_eq!(result.cells.len(), 4);
        assert_relative_eq!(result.cost, 3.0 * std::f64::consts::SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn test_start_equals_goal() {
        let (grid, area) = open_grid(10, 10);
        let planner = AStarPlanner::with_defaults(&grid, &area);
        let result = planner.find_path(GridCell::new(4, 4), GridCell::new(4, 4)).unwrap();
        assert_eq!(result.cells, vec![GridCell::new(4, 4)]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_out_of_bounds() {
        let (grid, area) = open_grid(10, 10);
        let planner = AStarPlanner::with_defaults(&grid, &area);
        assert_eq!(
            planner.find_path(GridCell::new(-1, 0), GridCell::new(3, 3)),
            Err(PathFailure::OutOfBounds)
        );
    }

    #[test]
    fn test_no_corner_cutting() {
        // 2x2 grid with a diagonal pair walkable only
        let grid = NavGrid::from_flags(
            2,
            2,
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(2.0, 2.0),
            vec![true, false, false, true],
        );
        let area = rectangle(WorldPoint::new(0.0, 0.0), WorldPoint::new(2.0, 2.0));
        let planner = AStarPlanner::with_defaults(&grid, &area);
        assert_eq!(
            planner.find_path(GridCell::new(0, 0), GridCell::new(1, 1)),
            Err(PathFailure::NoPath)
        );
    }

    #[test]
    fn test_routes_around_wall() {
        // 10x10 area with a wall at x in 4..6 leaving a gap at the top
        let area = Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (4.0, 0.0),
                (4.0, 8.0),
                (6.0, 8.0),
                (6.0, 0.0),
                (10.0, 0.0),
                (10.0, 10.0),
                (0.0, 10.0),
            ]),
            Vec::new(),
        );
        let grid = NavGrid::rasterize(&area, 10, 10).unwrap();
        let planner = AStarPlanner::with_defaults(&grid, &area);
        let result = planner.find_path(GridCell::new(0, 1), GridCell::new(0, 8)).unwrap();
        assert_valid_path(&grid, &result.cells);
        assert!(result.cells.iter().any(|c| c.row >= 8));
        for pair in result.cells.windows(2) {
            assert!(segment_inside(&area, grid.center(pair[0]), grid.center(pair[1]), 15));
        }
    }

    #[test]
    fn test_expansion_limit() {
        let (grid, area) = open_grid(20, 20);
        let config = AStarConfig {
            max_expansions: 3,
            ..Default::default()
        };
        let planner = AStarPlanner::new(&grid, &area, config);
        assert_eq!(
            planner.find_path(GridCell::new(0, 0), GridCell::new(19, 19)),
            Err(PathFailure::ExpansionLimit)
        );
    }

    #[test]
    fn test_cancelled() {
        let (grid, area) = open_grid(10, 10);
        let planner = AStarPlanner::with_defaults(&grid, &area);
        let cancel = AtomicBool::new(true);
        assert_eq!(
            planner.find_path_cancellable(GridCell::new(0, 0), GridCell::new(9, 9), &cancel),
            Err(PathFailure::Cancelled)
        );
        let idle = AtomicBool::new(false);
        assert!(planner
            .find_path_cancellable(GridCell::new(0, 0), GridCell::new(9, 9), &idle)
            .is_ok());
    }

    #[test]
    fn test_deterministic() {
        let (grid, area) = open_grid(30, 40);
        let planner = AStarPlanner::with_defaults(&grid, &area);
        let a = planner.find_path(GridCell::new(2, 3), GridCell::new(27, 31)).unwrap();
        let b = planner.find_path(GridCell::new(2, 3), GridCell::new(27, 31)).unwrap();
        assert_eq!(a, b);
    }
}
