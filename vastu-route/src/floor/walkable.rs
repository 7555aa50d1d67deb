//! Walkable area: building outline minus every room.

use geo::Polygon;
use log::{debug, warn};

use crate::geometry::{AreaShape, difference, largest_polygon_index, union_fold};

/// Compute the navigable floor area.
///
/// The polygon with the greatest area is the building outline; every other
/// polygon is a room. Rooms are unioned and subtracted from the outline.
/// Any failing geometric step falls back to the plain outline, so a result
/// exists whenever at least one polygon with a finite area is given.
pub fn build_walkable_area(polygons: &[Polygon<f64>]) -> Option<Polygon<f64>> {
    let outer_idx = largest_polygon_index(polygons)?;
    let outer = &polygons[outer_idx];

    let rooms: Vec<Polygon<f64>> = polygons
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != outer_idx)
        .map(|(_, p)| p.clone())
        .collect();

    if rooms.is_empty() {
        debug!("[Walkable] no rooms, using outline as walkable area");
        return Some(outer.clone());
    }

    let rooms_union = match union_fold(&rooms) {
        Ok(u) => u,
        Err(e) => {
            warn!("[Walkable] room union failed ({}), ignoring rooms", e);
            return Some(outer.clone());
        }
    };

    let remaining = match difference(outer, &rooms_union) {
        Ok(d) => d,
        Err(e) => {
            warn!("[Walkable] outline difference failed ({}), ignoring rooms", e);
            return Some(outer.clone());
        }
    };

    match AreaShape::from_multi(remaining, 0.0) {
        Some(shape) => {
            if shape.part_count() > 1 {
                debug!(
                    "[Walkable] rooms split floor into {} parts, keeping largest",
                    shape.part_count()
                );
            }
            shape.into_largest().or_else(|| Some(outer.clone()))
        }
        None => {
            warn!("[Walkable] rooms cover the whole outline, ignoring rooms");
            Some(outer.clone())
        }
    }
}
