//! Path simplification and endpoint connection.
//!
//! Turns the raw A* cell path into a short polyline:
//! - Line-of-sight shortcutting against the routing area
//! - Connecting the true start/end coordinates to the grid path
//! - A final tightening pass once the true endpoints are attached

use geo::Polygon;
use log::trace;

use crate::core::WorldPoint;
use crate::geometry::segment_inside;

/// Greedy farthest-visible reduction over point indices.
///
/// From index `i`, `j` scans down from the last index and stops at the first
/// `j > i + 1` with `visible(i, j)`; otherwise `i + 1` is taken. The first and
/// last indices are always kept.
fn greedy_indices<F>(len: usize, visible: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> bool,
{
    if len <= 2 {
        return (0..len).collect();
    }

    let mut kept = vec![0];
    let mut i = 0;
    while i < len - 1 {
        let mut j = len - 1;
        while j > i + 1 && !visible(i, j) {
            j -= 1;
        }
        kept.push(j);
        i = j;
    }
    kept
}

/// Remove waypoints that have an unobstructed shortcut inside `area`.
///
/// Applying it to its own output returns that output unchanged.
pub fn simplify_line_of_sight(
    points: &[WorldPoint],
    area: &Polygon<f64>,
    samples: usize,
) -> Vec<WorldPoint> {
    greedy_indices(points.len(), |i, j| {
        segment_inside(area, points[i], points[j], samples)
    })
    .into_iter()
    .map(|i| points[i])
    .collect()
}

/// Attach the true start and end coordinates to a simplified path.
///
/// A true endpoint is attached when the connecting segment stays inside the
/// routing area, or failing that inside the walkable area. After attaching,
/// grid anchors that became redundant are removed. Only the two connector
/// segments may rely on the walkable fallback; every shortcut must stay
/// inside the routing area. The result always has at least two points when
/// `path` is non-empty.
pub fn connect_endpoints(
    path: &[WorldPoint],
    start: WorldPoint,
    end: WorldPoint,
    routing: &Polygon<f64>,
    walkable: Option<&Polygon<f64>>,
    samples: usize,
) -> Vec<WorldPoint> {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return Vec::new();
    };

    let strict = |a: WorldPoint, b: WorldPoint| segment_inside(routing, a, b, samples);
    let relaxed = |a: WorldPoint, b: WorldPoint| {
        strict(a, b) || walkable.is_some_and(|w| segment_inside(w, a, b, samples))
    };

    let start_attached = start.is_finite() && relaxed(start, first);
    let end_attached = end.is_finite() && relaxed(last, end);
    trace!(
        "[Connect] start attached={} end attached={}",
        start_attached,
        end_attached
    );

    let mut points = Vec::with_capacity(path.len() + 2);
    if start_attached {
        points.push(start);
    }
    points.extend_from_slice(path);
    if end_attached {
        points.push(end);
    }

    // Adjacent pairs are never re-checked, so the connectors survive as-is;
    // every shortcut across them must stay inside the routing area.
    let tightened: Vec<WorldPoint> = greedy_indices(points.len(), |i, j| strict(points[i], points[j]))
        .into_iter()
        .map(|i| points[i])
        .collect();

    if tightened.len() == 1 {
        return vec![tightened[0], tightened[0]];
    }
    tightened
}
