//! Path planning on the navigation grid.
//!
//! - **A* Search**: shortest 8-connected cell path without corner cutting
//! - **Smoothing**: line-of-sight shortcutting and endpoint connection
//!
//! ```rust,ignore
//! use vastu_route::pathfinding::{AStarConfig, AStarPlanner, simplify_line_of_sight};
//!
//! let planner = AStarPlanner::new(&grid, &routing.polygon, AStarConfig::default());
//! let result = planner.find_path(start_cell, goal_cell)?;
//! let points: Vec<_> = result.cells.iter().map(|c| grid.center(*c)).collect();
//! let simplified = simplify_line_of_sight(&points, &routing.polygon, 15);
//! ```

pub mod astar;
pub mod smoothing;

pub use astar::{AStarConfig, AStarPlanner, PathFailure, PathResult};
pub use smoothing::{connect_endpoints, simplify_line_of_sight};
