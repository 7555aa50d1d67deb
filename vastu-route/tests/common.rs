//! Test utilities for VastuRoute integration tests.
//!
//! Floor fixtures in planar meters.

#![allow(dead_code)]

use geo::{LineString, Polygon};
use vastu_route::WorldPoint;
use vastu_route::geometry::{contains_point, rectangle, segment_inside};

/// Axis-aligned rectangle from corner coordinates.
pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
    rectangle(WorldPoint::new(x0, y0), WorldPoint::new(x1, y1))
}

/// 30 x 10 floor with a 10 x 4 room in the middle.
pub fn floor_with_center_room() -> (Polygon<f64>, Polygon<f64>) {
    (rect(0.0, 0.0, 30.0, 10.0), rect(10.0, 3.0, 20.0, 7.0))
}

/// L-shaped floor: 20 x 20 with the top-right 12 x 12 quadrant missing.
pub fn l_floor() -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![
            (0.0, 0.0),
            (20.0, 0.0),
            (20.0, 8.0),
            (8.0, 8.0),
            (8.0, 20.0),
            (0.0, 20.0),
        ]),
        Vec::new(),
    )
}

/// Does every segment of `points` pass the sampled visibility check in `area`?
pub fn segments_visible(points: &[WorldPoint], area: &Polygon<f64>, samples: usize) -> bool {
    points
        .windows(2)
        .all(|pair| segment_inside(area, pair[0], pair[1], samples))
}

/// Every segment between grid anchors stays inside the routing area; only
/// the first and last segment (connectors to the true endpoints) are exempt.
pub fn assert_keeps_clearance(points: &[WorldPoint], routing: &Polygon<f64>, samples: usize) {
    assert!(points.len() >= 2, "route too short: {:?}", points);
    if points.len() == 2 {
        return;
    }
    let inner = &points[1..points.len() - 1];
    for p in inner {
        assert!(contains_point(routing, *p), "anchor {:?} outside routing area", p);
    }
    for pair in inner.windows(2) {
        assert!(
            segment_inside(routing, pair[0], pair[1], samples),
            "segment {:?} -> {:?} leaves routing area",
            pair[0],
            pair[1]
        );
    }
}

/// Minimal GeoJSON floor: outline, one room and three named points.
pub const FLOOR_GEOJSON: &str = r##"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"name": "Room 101", "fillcolor": "#ffcc00"},
     "geometry": {"type": "Polygon", "coordinates": [[[10,3],[20,3],[20,7],[10,7],[10,3]]]}},
    {"type": "Feature", "properties": {"styledata": "#eeeeee"},
     "geometry": {"type": "Polygon", "coordinates": [[[0,0],[30,0],[30,10],[0,10],[0,0]]]}},
    {"type": "Feature", "properties": {"name": "West entrance"},
     "geometry": {"type": "Point", "coordinates": [3, 5]}},
    {"type": "Feature", "properties": {"кабинет": 214},
     "geometry": {"type": "Point", "coordinates": [27, 5]}},
    {"type": "Feature", "properties": {},
     "geometry": {"type": "Point", "coordinates": [15, 5]}}
  ]
}"##;
