//! Geometry boundary over the `geo` crate.
//!
//! The routing pipeline needs exactly five primitives: planar area, polygon
//! union, polygon difference, inward erosion and point-in-polygon. They live
//! here so the rest of the crate never touches boolean-op internals.
//!
//! Boolean operations may split an area into pieces; those results come
//! back as [`AreaShape`] and are reduced with [`AreaShape::into_largest`]
//! wherever a single polygon is required.

mod ops;
mod shape;
mod visibility;

pub use geo::{MultiPolygon, Polygon};
pub use ops::{difference, erode, union_fold, validate_polygon};
pub use shape::{AreaShape, largest_polygon_index};
pub use visibility::{contains_point, segment_inside};

use geo::{BoundingRect, LineString};
use thiserror::Error;

use crate::core::WorldPoint;

/// Failure inside a geometric sub-step.
///
/// Never escapes the routing entry points; callers degrade to the next
/// fallback instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("invalid geometry: {0}")]
    InvalidInput(&'static str),

    #[error("{0} operation failed")]
    OperationFailed(&'static str),
}

/// Axis-aligned rectangle polygon spanning `min..max`.
pub fn rectangle(min: WorldPoint, max: WorldPoint) -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![
            (min.x, min.y),
            (max.x, min.y),
            (max.x, max.y),
            (min.x, max.y),
        ]),
        Vec::new(),
    )
}

/// Bounding box of a polygon as `(min, max)`.
pub fn bounds(polygon: &Polygon<f64>) -> Option<(WorldPoint, WorldPoint)> {
    let rect = polygon.bounding_rect()?;
    Some((rect.min().into(), rect.max().into()))
}
