//! GeoJSON floor loading and route export.
//!
//! Only the parts of GeoJSON a floor plan uses are read: a
//! `FeatureCollection` whose features carry `Polygon` or `Point` geometry
//! and flat properties. Other geometry kinds are kept as
//! [`Feature::Unsupported`] and skipped by the classifier.

use std::collections::BTreeMap;
use std::path::Path;

use geo::{CoordsIter, LineString, MapCoordsInPlace, Polygon};
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::projection::LocalProjection;
use crate::config::CoordinateSystem;
use crate::core::WorldPoint;
use crate::error::{Error, Result};
use crate::floor::{AreaFeature, Feature, FeatureCollection, PointFeature};
use crate::route::{RouteLine, RouteStatus};

#[derive(Deserialize)]
enum CollectionKind {
    FeatureCollection,
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    _kind: CollectionKind,
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    geometry: Option<RawGeometry>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

/// A parsed floor in planar coordinates.
#[derive(Clone, Debug)]
pub struct FloorFile {
    /// Classified features
    pub features: FeatureCollection,
    /// Projection used for geographic input, `None` for planar input
    pub projection: Option<LocalProjection>,
}

impl FloorFile {
    /// Planar point back to the input coordinate system
    pub fn to_input(&self, point: WorldPoint) -> WorldPoint {
        match &self.projection {
            Some(projection) => projection.unproject(point),
            None => point,
        }
    }
}

/// Load a floor from a GeoJSON file
pub fn load_feature_collection(path: &Path, system: CoordinateSystem) -> Result<FloorFile> {
    let contents = std::fs::read_to_string(path)?;
    parse_feature_collection(&contents, system)
}

/// Parse a floor from a GeoJSON string.
///
/// Geographic input is projected to local meters around the center of
/// all feature coordinates.
pub fn parse_feature_collection(json: &str, system: CoordinateSystem) -> Result<FloorFile> {
    let mut features = parse_features(json)?;

    let projection = match system {
        CoordinateSystem::Planar => None,
        CoordinateSystem::Geographic => {
            let projection = LocalProjection::fit(features.iter().flat_map(feature_coords));
            if let Some(projection) = &projection {
                debug!(
                    "[GeoJson] projecting around ({:.6}, {:.6})",
                    projection.origin().x,
                    projection.origin().y
                );
                for feature in &mut features {
                    project_feature(feature, projection);
                }
            }
            projection
        }
    };

    Ok(FloorFile {
        features: FeatureCollection::classify(features),
        projection,
    })
}

/// Parse raw features, in input order, without projecting them
pub fn parse_features(json: &str) -> Result<Vec<Feature>> {
    let raw: RawCollection = serde_json::from_str(json)?;
    raw.features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| convert_feature(index, feature))
        .collect()
}

fn convert_feature(index: usize, raw: RawFeature) -> Result<Feature> {
    let invalid = |reason: &str| Error::InvalidFeature {
        index,
        reason: reason.to_string(),
    };

    let properties = raw.properties.map(scalar_properties).unwrap_or_default();
    let Some(geometry) = raw.geometry else {
        return Ok(Feature::Unsupported {
            kind: "null".to_string(),
        });
    };

    match geometry.kind.as_str() {
        "Polygon" => {
            let rings: Vec<Vec<Vec<f64>>> = serde_json::from_value(geometry.coordinates)
                .map_err(|_| invalid("polygon coordinates must be an array of rings"))?;
            let mut rings = rings
                .into_iter()
                .map(|ring| ring_from_positions(&ring))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| invalid("polygon ring needs at least 3 positions of 2 numbers"))?;
            if rings.is_empty() {
                return Err(invalid("polygon has no rings"));
            }
            let exterior = rings.remove(0);
            Ok(Feature::Area(AreaFeature::with_properties(
                Polygon::new(exterior, rings),
                &properties,
            )))
        }
        "Point" => {
            let position: Vec<f64> = serde_json::from_value(geometry.coordinates)
                .map_err(|_| invalid("point coordinates must be a position"))?;
            let point = position_to_point(&position).ok_or_else(|| invalid("point needs 2 numbers"))?;
            Ok(Feature::Point(PointFeature::new(point, properties)))
        }
        other => Ok(Feature::Unsupported {
            kind: other.to_string(),
        }),
    }
}

fn position_to_point(position: &[f64]) -> Option<WorldPoint> {
    match position {
        [x, y, ..] => Some(WorldPoint::new(*x, *y)),
        _ => None,
    }
}

fn ring_from_positions(positions: &[Vec<f64>]) -> Option<LineString<f64>> {
    let coords = positions
        .iter()
        .map(|p| position_to_point(p).map(geo::Coord::from))
        .collect::<Option<Vec<_>>>()?;
    (coords.len() >= 3).then(|| LineString::from(coords))
}

/// Scalar properties rendered as strings; nulls, arrays and objects are dropped
fn scalar_properties(properties: Map<String, Value>) -> BTreeMap<String, String> {
    properties
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => return None,
            };
            Some((key, text))
        })
        .collect()
}

fn feature_coords(feature: &Feature) -> Vec<WorldPoint> {
    match feature {
        Feature::Area(area) => area.polygon.coords_iter().map(WorldPoint::from).collect(),
        Feature::Point(point) => vec![point.position],
        Feature::Unsupported { .. } => Vec::new(),
    }
}

fn project_feature(feature: &mut Feature, projection: &LocalProjection) {
    match feature {
        Feature::Area(area) => area
            .polygon
            .map_coords_in_place(|c| projection.project(c.into()).into()),
        Feature::Point(point) => point.position = projection.project(point.position),
        Feature::Unsupported { .. } => {}
    }
}

/// Route as a GeoJSON `LineString` feature in the input coordinate system.
pub fn route_to_geojson(route: &RouteLine, floor: &FloorFile) -> Value {
    let coordinates: Vec<[f64; 2]> = route
        .points
        .iter()
        .map(|p| {
            let q = floor.to_input(*p);
            [q.x, q.y]
        })
        .collect();

    json!({
        "type": "Feature",
        "properties": {
            "status": RouteStatus::Ok.code(),
            "length": route.length,
            "margin": route.margin,
            "cells": route.cell_count,
        },
        "geometry": {
            "type": "LineString",
            "coordinates": coordinates,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::Area;

    const FLOOR: &str = r##"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"fillcolor": "#eee"},
                "geometry": {"type": "Polygon", "coordinates": [[[0,0],[20,0],[20,10],[0,10],[0,0]]]}
            },
            {
                "type": "Feature",
                "properties": {"name": "Lobby", "number": 101, "tags": ["a"]},
                "geometry": {"type": "Point", "coordinates": [2, 5, 0]}
            },
            {
                "type": "Feature",
                "properties": null,
                "geometry": {"type": "LineString", "coordinates": [[0,0],[1,1]]}
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": null
            }
        ]
    }"##;

    #[test]
    fn test_parse_planar_floor() {
        let floor = parse_feature_collection(FLOOR, CoordinateSystem::Planar).unwrap();
        assert!(floor.projection.is_none());
        assert_eq!(floor.features.areas.len(), 1);
        assert_eq!(floor.features.areas[0].style.as_deref(), Some("#eee"));
        assert_relative_eq!(floor.features.areas[0].polygon.unsigned_area(), 200.0);

        let point = &floor.features.points[0];
        assert_eq!(point.position, WorldPoint::new(2.0, 5.0));
        assert_eq!(point.properties["number"], "101");
        assert!(!point.properties.contains_key("tags"));
    }

    #[test]
    fn test_unsupported_geometry_kept_as_unsupported() {
        let features = parse_features(FLOOR).unwrap();
        assert_eq!(features.len(), 4);
        assert!(matches!(&features[2], Feature::Unsupported { kind } if kind == "LineString"));
        assert!(matches!(&features[3], Feature::Unsupported { kind } if kind == "null"));
    }

    #[test]
    fn test_rejects_non_collection() {
        let json = r#"{"type": "Feature", "features": []}"#;
        assert!(matches!(parse_features(json), Err(Error::Json(_))));
    }

    #[test]
    fn test_rejects_short_ring() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {}, "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,1]]]}}
        ]}"#;
        assert!(matches!(
            parse_features(json),
            Err(Error::InvalidFeature { index: 0, .. })
        ));
    }

    #[test]
    fn test_geographic_projection_roundtrip() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {}, "geometry": {"type": "Polygon",
             "coordinates": [[[42.0590,55.5625],[42.0600,55.5625],[42.0600,55.5630],[42.0590,55.5630],[42.0590,55.5625]]]}},
            {"type": "Feature", "properties": {"name": "A"}, "geometry": {"type": "Point", "coordinates": [42.0591, 55.5626]}}
        ]}"#;
        let floor = parse_feature_collection(json, CoordinateSystem::Geographic).unwrap();
        let projection = floor.projection.unwrap();
        assert_relative_eq!(projection.origin().x, 42.0595, epsilon = 1e-9);

        // About 63 m x 56 m
        let area = floor.features.areas[0].polygon.unsigned_area();
        assert!(area > 3000.0 && area < 4000.0, "area {}", area);

        let back = floor.to_input(floor.features.points[0].position);
        assert_relative_eq!(back.x, 42.0591, epsilon = 1e-9);
        assert_relative_eq!(back.y, 55.5626, epsilon = 1e-9);
    }

    #[test]
    fn test_route_feature() {
        let floor = parse_feature_collection(FLOOR, CoordinateSystem::Planar).unwrap();
        let route = RouteLine {
            points: vec![WorldPoint::new(1.0, 1.0), WorldPoint::new(4.0, 5.0)],
            length: 5.0,
            margin: 1.0,
            cell_count: 7,
            nodes_expanded: 12,
        };
        let value = route_to_geojson(&route, &floor);
        assert_eq!(value["geometry"]["type"], "LineString");
        assert_eq!(value["geometry"]["coordinates"][1][0], 4.0);
        assert_eq!(value["properties"]["status"], "ok");
    }
}
