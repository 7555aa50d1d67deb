//! Floor features and the geometry classifier.

use std::collections::BTreeMap;

use geo::Polygon;
use log::debug;

use crate::core::WorldPoint;

/// Style keys consulted, in order, for an area's display style.
const STYLE_KEYS: [&str; 3] = ["fillcolor", "styledata", "styledetails"];

/// A building outline or room polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaFeature {
    /// Outer ring plus hole rings
    pub polygon: Polygon<f64>,
    /// Display style carried through for the host renderer
    pub style: Option<String>,
}

impl AreaFeature {
    /// Create an area without style metadata
    pub fn new(polygon: Polygon<f64>) -> Self {
        Self {
            polygon,
            style: None,
        }
    }

    /// Create an area, taking its style from the first present style key
    pub fn with_properties(polygon: Polygon<f64>, properties: &BTreeMap<String, String>) -> Self {
        let style = STYLE_KEYS
            .iter()
            .find_map(|key| properties.get(*key).filter(|v| !v.is_empty()))
            .cloned();
        Self { polygon, style }
    }
}

/// A named point of interest (room entrance, desk, ...).
#[derive(Clone, Debug, PartialEq)]
pub struct PointFeature {
    /// Location on the floor
    pub position: WorldPoint,
    /// Scalar properties rendered as strings
    pub properties: BTreeMap<String, String>,
}

impl PointFeature {
    /// Create a point feature
    pub fn new(position: WorldPoint, properties: BTreeMap<String, String>) -> Self {
        Self {
            position,
            properties,
        }
    }
}

/// One parsed input feature before classification.
#[derive(Clone, Debug, PartialEq)]
pub enum Feature {
    /// Polygon geometry
    Area(AreaFeature),
    /// Point geometry
    Point(PointFeature),
    /// Any other geometry kind (kept only for diagnostics)
    Unsupported {
        /// Geometry type name as found in the input
        kind: String,
    },
}

/// Classified floor features, each list in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureCollection {
    /// Building outline and room polygons
    pub areas: Vec<AreaFeature>,
    /// Points of interest
    pub points: Vec<PointFeature>,
}

impl FeatureCollection {
    /// Split raw features into areas and points.
    pub fn classify(features: impl IntoIterator<Item = Feature>) -> Self {
        let mut collection = Self::default();
        let mut skipped = 0usize;

        for feature in features {
            match feature {
                Feature::Area(area) => collection.areas.push(area),
                Feature::Point(point) => collection.points.push(point),
                Feature::Unsupported { kind } => {
                    debug!("[Classifier] skipping unsupported geometry '{}'", kind);
                    skipped += 1;
                }
            }
        }

        debug!(
            "[Classifier] {} areas, {} points, {} skipped",
            collection.areas.len(),
            collection.points.len(),
            skipped
        );
        collection
    }

    /// Polygons of all area features, in input order
    pub fn polygons(&self) -> Vec<Polygon<f64>> {
        self.areas.iter().map(|a| a.polygon.clone()).collect()
    }
}
