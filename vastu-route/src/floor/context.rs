//! Per-floor routing context.

use std::sync::atomic::AtomicBool;

use geo::Polygon;
use log::info;

use super::erosion::{RoutingArea, build_routing_area};
use super::feature::FeatureCollection;
use super::walkable::build_walkable_area;
use crate::config::RouteConfig;
use crate::core::WorldPoint;
use crate::route::{RouteOutcome, compute_route, compute_route_cancellable};

/// Walkable and routing areas of one floor, built once and shared by
/// reference across route requests.
#[derive(Clone, Debug)]
pub struct FloorContext {
    walkable: Option<Polygon<f64>>,
    routing: Option<RoutingArea>,
    config: RouteConfig,
}

impl FloorContext {
    /// Prepare a floor from its area polygons (outline and rooms).
    pub fn new(polygons: &[Polygon<f64>], config: RouteConfig) -> Self {
        let walkable = build_walkable_area(polygons);
        let routing = walkable
            .as_ref()
            .and_then(|w| build_routing_area(w, &config.erosion));

        info!(
            "[Floor] {} polygons, walkable={}, routing margin={}",
            polygons.len(),
            walkable.is_some(),
            routing
                .as_ref()
                .map(|r| format!("{:.2}", r.margin))
                .unwrap_or_else(|| "none".into())
        );

        Self {
            walkable,
            routing,
            config,
        }
    }

    /// Prepare a floor from classified features
    pub fn from_features(features: &FeatureCollection, config: RouteConfig) -> Self {
        Self::new(&features.polygons(), config)
    }

    /// Walkable area, if any polygon was given
    #[inline]
    pub fn walkable(&self) -> Option<&Polygon<f64>> {
        self.walkable.as_ref()
    }

    /// Eroded routing area
    #[inline]
    pub fn routing(&self) -> Option<&RoutingArea> {
        self.routing.as_ref()
    }

    /// Configuration used for this floor
    #[inline]
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Route between two planar points on this floor
    pub fn route(&self, start: WorldPoint, end: WorldPoint) -> RouteOutcome {
        compute_route(
            self.routing(),
            self.walkable(),
            start,
            end,
            &self.config,
        )
    }

    /// [`route`](Self::route) with a cancellation flag
    pub fn route_cancellable(
        &self,
        start: WorldPoint,
        end: WorldPoint,
        cancel: &AtomicBool,
    ) -> RouteOutcome {
        compute_route_cancellable(
            self.routing(),
            self.walkable(),
            start,
            end,
            &self.config,
            cancel,
        )
    }
}
