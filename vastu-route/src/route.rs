//! Per-request routing: grid, search, simplification.
//!
//! [`compute_route`] runs the per-request half of the pipeline against a
//! prepared routing area and reports a [`RouteStatus`] for every outcome.
//! It never panics and never returns a partial route.

use std::fmt;
use std::sync::atomic::AtomicBool;

use geo::Polygon;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;
use crate::core::{WorldPoint, polyline_length};
use crate::floor::RoutingArea;
use crate::grid::NavGrid;
use crate::pathfinding::{AStarConfig, AStarPlanner, PathFailure, connect_endpoints, simplify_line_of_sight};

/// Outcome classification of a route request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteStatus {
    /// Route found
    Ok,
    /// Floor has no routing area
    NoRoutingArea,
    /// Routing area could not be rasterized
    NoGrid,
    /// Start or end has no walkable cell nearby
    OffWalkableArea,
    /// Search exhausted without reaching the goal
    NoPath,
    /// Search stopped at the expansion limit
    ExpansionLimit,
    /// Search was cancelled by the caller
    Cancelled,
}

impl RouteStatus {
    /// Stable identifier for logs and machine output
    pub fn code(&self) -> &'static str {
        match self {
            RouteStatus::Ok => "ok",
            RouteStatus::NoRoutingArea => "no_routing_area",
            RouteStatus::NoGrid => "no_grid",
            RouteStatus::OffWalkableArea => "off_walkable_area",
            RouteStatus::NoPath => "no_path",
            RouteStatus::ExpansionLimit => "expansion_limit",
            RouteStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RouteStatus::Ok => "route found",
            RouteStatus::NoRoutingArea => "no area available for routing",
            RouteStatus::NoGrid => "could not build navigation grid",
            RouteStatus::OffWalkableArea => "start or end is outside the walkable area",
            RouteStatus::NoPath => "no route found",
            RouteStatus::ExpansionLimit => "route search exceeded its expansion limit",
            RouteStatus::Cancelled => "route search cancelled",
        };
        f.write_str(text)
    }
}

impl From<PathFailure> for RouteStatus {
    fn from(failure: PathFailure) -> Self {
        match failure {
            PathFailure::OutOfBounds => RouteStatus::OffWalkableArea,
            PathFailure::NoPath => RouteStatus::NoPath,
            PathFailure::ExpansionLimit => RouteStatus::ExpansionLimit,
            PathFailure::Cancelled => RouteStatus::Cancelled,
        }
    }
}

/// A computed walking route
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteLine {
    /// Polyline, at least two points
    pub points: Vec<WorldPoint>,
    /// Polyline length in floor units
    pub length: f64,
    /// Erosion margin of the routing area used
    pub margin: f64,
    /// Cells in the raw A* path
    pub cell_count: usize,
    /// Nodes expanded by the search
    pub nodes_expanded: usize,
}

/// Result of a route request
#[derive(Clone, Debug, PartialEq)]
pub struct RouteOutcome {
    /// Route when `status` is [`RouteStatus::Ok`]
    pub route: Option<RouteLine>,
    /// Outcome classification
    pub status: RouteStatus,
}

impl RouteOutcome {
    fn failed(status: RouteStatus) -> Self {
        debug!("[Route] {}", status);
        Self {
            route: None,
            status,
        }
    }

    /// Was a route found?
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status == RouteStatus::Ok
    }
}

/// Compute a route between two planar points.
///
/// `routing` bounds the search; `walkable` only serves as the fallback when
/// attaching the true endpoints.
pub fn compute_route(
    routing: Option<&RoutingArea>,
    walkable: Option<&Polygon<f64>>,
    start: WorldPoint,
    end: WorldPoint,
    config: &RouteConfig,
) -> RouteOutcome {
    route_inner(routing, walkable, start, end, config, None)
}

/// [`compute_route`] that stops with [`RouteStatus::Cancelled`] once
/// `cancel` is set.
pub fn compute_route_cancellable(
    routing: Option<&RoutingArea>,
    walkable: Option<&Polygon<f64>>,
    start: WorldPoint,
    end: WorldPoint,
    config: &RouteConfig,
    cancel: &AtomicBool,
) -> RouteOutcome {
    route_inner(routing, walkable, start, end, config, Some(cancel))
}

fn route_inner(
    routing: Option<&RoutingArea>,
    walkable: Option<&Polygon<f64>>,
    start: WorldPoint,
    end: WorldPoint,
    config: &RouteConfig,
    cancel: Option<&AtomicBool>,
) -> RouteOutcome {
    let Some(routing) = routing else {
        return RouteOutcome::failed(RouteStatus::NoRoutingArea);
    };
    let area = &routing.polygon;

    let Some(grid) = NavGrid::rasterize(area, config.grid.columns, config.grid.min_dimension) else {
        return RouteOutcome::failed(RouteStatus::NoGrid);
    };

    if !start.is_finite() || !end.is_finite() {
        return RouteOutcome::failed(RouteStatus::OffWalkableArea);
    }

    let radii = &config.search.snap_radii;
    let start_cell = grid.nearest_walkable(grid.cell_of(start), radii);
    let goal_cell = grid.nearest_walkable(grid.cell_of(end), radii);
    let (Some(start_cell), Some(goal_cell)) = (start_cell, goal_cell) else {
        return RouteOutcome::failed(RouteStatus::OffWalkableArea);
    };
    trace!(
        "[Route] snapped start=({},{}) goal=({},{})",
        start_cell.row, start_cell.col, goal_cell.row, goal_cell.col
    );

    let samples = config.visibility.samples;
    let planner = AStarPlanner::new(
        &grid,
        area,
        AStarConfig {
            max_expansions: config.search.max_expansions,
            visibility_samples: samples,
        },
    );
    let search = match cancel {
        Some(flag) => planner.find_path_cancellable(start_cell, goal_cell, flag),
        None => planner.find_path(start_cell, goal_cell),
    };
    let result = match search {
        Ok(result) => result,
        Err(failure) => return RouteOutcome::failed(failure.into()),
    };

    let raw: Vec<WorldPoint> = result.cells.iter().map(|c| grid.center(*c)).collect();
    let simplified = simplify_line_of_sight(&raw, area, samples);
    let points = connect_endpoints(&simplified, start, end, area, walkable, samples);

    let length = polyline_length(&points);
    debug!(
        "[Route] {} cells -> {} points, length {:.2}, margin {:.2}",
        result.cells.len(),
        points.len(),
        length,
        routing.margin
    );

    RouteOutcome {
        route: Some(RouteLine {
            points,
            length,
            margin: routing.margin,
            cell_count: result.cells.len(),
            nodes_expanded: result.nodes_expanded,
        }),
        status: RouteStatus::Ok,
    }
}
