//! Unified configuration loading for VastuRoute.
//!
//! Loads all routing parameters from a single YAML file with defaults for
//! every field.
//!
//! ## Example YAML
//!
//! ```yaml
//! input:
//!   coordinate_system: geographic   # or "planar"
//!
//! erosion:
//!   margins: [1.0, 0.8, 0.6, 0.4, 0.3, 0.2, 0.1, 0.0]
//!
//! grid:
//!   columns: 160
//!   min_dimension: 10
//!
//! search:
//!   max_expansions: 250000
//!   snap_radii: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 14, 16, 18, 20]
//!
//! visibility:
//!   samples: 15
//! ```

mod defaults;
mod erosion;
mod error;
mod grid;
mod input;
mod route;
mod search;

pub use erosion::ErosionSection;
pub use error::ConfigError;
pub use grid::GridSection;
pub use input::{CoordinateSystem, InputSection};
pub use route::RouteConfig;
pub use search::{SearchSection, VisibilitySection};
