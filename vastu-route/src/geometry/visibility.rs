//! Point containment and sampled segment visibility.

use geo::{Coord, Intersects, Polygon};

use crate::core::WorldPoint;

/// Is the point inside the area? Points on the boundary count as inside.
#[inline]
pub fn contains_point(area: &Polygon<f64>, point: WorldPoint) -> bool {
    point.is_finite() && area.intersects(&Coord::from(point))
}

/// Does the straight segment `a → b` stay inside the area?
///
/// Tests `samples` evenly spaced interior points; the endpoints themselves
/// are excluded so that points sitting exactly on a boundary do not fail
/// on rounding.
pub fn segment_inside(area: &Polygon<f64>, a: WorldPoint, b: WorldPoint, samples: usize) -> bool {
    let steps = samples + 1;
    (1..steps).all(|i| {
        let t = i as f64 / steps as f64;
        contains_point(area, a.lerp(&b, t))
    })
}
