//! # Vastu-Route: Indoor Floor Routing
//!
//! Finds walking routes between points of interest on a single building
//! floor, given only the floor's outline/room polygons and point features.
//! Routes stay inside corridors, keep a clearance from walls, and are
//! simplified to a few straight segments instead of a grid zig-zag.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vastu_route::config::{CoordinateSystem, RouteConfig};
//! use vastu_route::floor::{FloorContext, find_point};
//! use vastu_route::io::load_feature_collection;
//! use std::path::Path;
//!
//! let floor = load_feature_collection(Path::new("floor.geojson"), CoordinateSystem::Geographic)?;
//! let context = FloorContext::from_features(&floor.features, RouteConfig::default());
//!
//! let points = &floor.features.points;
//! let (Some(a), Some(b)) = (find_point(points, "101"), find_point(points, "Lobby")) else {
//!     return Ok(());
//! };
//! let outcome = context.route(points[a].position, points[b].position);
//! println!("{}: {:?}", outcome.status, outcome.route.map(|r| r.length));
//! # Ok::<(), vastu_route::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Fundamental types (WorldPoint, GridCell)
//! - [`geometry`]: Area, union, difference, erosion and visibility over `geo`
//! - [`config`]: YAML configuration
//! - [`floor`]: Feature classification, walkable and routing areas, point names
//! - [`grid`]: Navigation grid rasterization and snapping
//! - [`pathfinding`]: A* search and line-of-sight simplification
//! - [`route`]: Per-request routing entry point and status taxonomy
//! - [`io`]: GeoJSON, local projection and SVG export
//!
//! ## Data Flow
//!
//! ```text
//!   FeatureCollection
//!         │ classify
//!         ▼
//!   outline + rooms ──► walkable area ──► routing area        (once per floor)
//!                                              │
//!   start, end ────────────────────────────────┤
//!                                              ▼
//!                          NavGrid ──► A* ──► simplify ──► connect ──► RouteLine
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod floor;
pub mod geometry;
pub mod grid;
pub mod io;
pub mod pathfinding;
pub mod route;

pub use config::RouteConfig;
pub use crate::core::{GridCell, WorldPoint};
pub use error::{Error, Result};
pub use floor::{FeatureCollection, FloorContext, RoutingArea, build_routing_area, build_walkable_area};
pub use route::{RouteLine, RouteOutcome, RouteStatus, compute_route, compute_route_cancellable};
