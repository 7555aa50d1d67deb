//! Polygon union, difference and inward erosion.
//!
//! All operations run through [`guarded`], which turns a panic inside the
//! boolean-op backend into a [`GeometryError`] so callers can fall back.

use std::panic::{AssertUnwindSafe, catch_unwind};

use geo::{Area, BooleanOps, Buffer, MultiPolygon, Polygon};
use log::trace;

use super::GeometryError;
use super::shape::AreaShape;

/// Parts smaller than this fraction of the source area are numerical slivers.
const SLIVER_FRACTION: f64 = 1e-9;

fn guarded<F>(op: &'static str, f: F) -> Result<MultiPolygon<f64>, GeometryError>
where
    F: FnOnce() -> MultiPolygon<f64>,
{
    catch_unwind(AssertUnwindSafe(f)).map_err(|_| GeometryError::OperationFailed(op))
}

/// Reject rings that cannot describe an area.
pub fn validate_polygon(polygon: &Polygon<f64>) -> Result<(), GeometryError> {
    let rings = std::iter::once(polygon.exterior()).chain(polygon.interiors().iter());
    for ring in rings {
        if ring.0.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
            return Err(GeometryError::InvalidInput("non-finite coordinate"));
        }
    }
    // A closed ring needs at least 3 distinct vertices + closing coordinate.
    if polygon.exterior().0.len() < 4 {
        return Err(GeometryError::InvalidInput("exterior ring has fewer than 3 vertices"));
    }
    Ok(())
}

/// Union polygons by folding `union(acc, next)` from the first polygon.
pub fn union_fold(polygons: &[Polygon<f64>]) -> Result<MultiPolygon<f64>, GeometryError> {
    let Some((first, rest)) = polygons.split_first() else {
        return Err(GeometryError::InvalidInput("nothing to union"));
    };
    validate_polygon(first)?;

    let mut acc = MultiPolygon::new(vec![first.clone()]);
    for next in rest {
        validate_polygon(next)?;
        acc = guarded("union", || acc.union(next))?;
    }
    Ok(acc)
}

/// `subject − clip`
pub fn difference(
    subject: &Polygon<f64>,
    clip: &MultiPolygon<f64>,
) -> Result<MultiPolygon<f64>, GeometryError> {
    validate_polygon(subject)?;
    guarded("difference", || subject.difference(clip))
}

/// Shrink a polygon inward by `margin` (negative buffer).
///
/// Convex corners stay sharp and reflex corners are rounded. Returns
/// `Ok(None)` when nothing survives.
pub fn erode(polygon: &Polygon<f64>, margin: f64) -> Result<Option<AreaShape>, GeometryError> {
    validate_polygon(polygon)?;
    if !margin.is_finite() {
        return Err(GeometryError::InvalidInput("non-finite erosion margin"));
    }

    let margin = margin.abs();
    if margin == 0.0 {
        return Ok(Some(AreaShape::Polygon(polygon.clone())));
    }

    let remaining = guarded("buffer", || polygon.buffer(-margin))?;
    trace!("[Erode] margin={:.3} parts={}", margin, remaining.0.len());

    let min_area = polygon.unsigned_area() * SLIVER_FRACTION;
    Ok(AreaShape::from_multi(remaining, min_area))
}
