//! Navigation grid built per route request.
//!
//! ```rust,ignore
//! use vastu_route::grid::NavGrid;
//!
//! let grid = NavGrid::rasterize(&routing.polygon, 160, 10)?;
//! let start = grid.nearest_walkable(grid.cell_of(point), &radii)?;
//! ```

mod nav_grid;

pub use nav_grid::NavGrid;
