//! Floor preparation: features, walkable area, routing area.
//!
//! Runs once per floor:
//!
//! 1. [`FeatureCollection::classify`] splits input features into areas and points
//! 2. [`build_walkable_area`] subtracts rooms from the building outline
//! 3. [`build_routing_area`] erodes the walkable area away from the walls
//!
//! [`FloorContext`] holds the result and answers route requests.

mod context;
mod erosion;
mod feature;
mod naming;
mod walkable;

pub use context::FloorContext;
pub use erosion::{RoutingArea, build_routing_area, erode_area};
pub use feature::{AreaFeature, Feature, FeatureCollection, PointFeature};
pub use naming::{NAME_KEYS, find_point, lookup_name, point_names};
pub use walkable::build_walkable_area;
