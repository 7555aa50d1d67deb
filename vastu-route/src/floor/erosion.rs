//! Routing area: the walkable area pulled away from the walls.

use geo::Polygon;
use log::{debug, warn};

use crate::config::ErosionSection;
use crate::geometry;

/// Walkable area after inward erosion.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutingArea {
    /// Eroded polygon (largest part if erosion split the area)
    pub polygon: Polygon<f64>,
    /// Margin that produced it (0 means the walkable area itself)
    pub margin: f64,
}

/// Shrink `polygon` inward by `margin`, keeping the largest surviving part.
///
/// A margin of zero returns the input unchanged. Geometry failures are
/// logged and reported as `None`.
pub fn erode_area(polygon: &Polygon<f64>, margin: f64) -> Option<Polygon<f64>> {
    match geometry::erode(polygon, margin) {
        Ok(Some(shape)) => {
            if shape.part_count() > 1 {
                debug!(
                    "[Erosion] margin {:.2} split area into {} parts, keeping largest",
                    margin,
                    shape.part_count()
                );
            }
            shape.into_largest()
        }
        Ok(None) => None,
        Err(e) => {
            debug!("[Erosion] margin {:.2} failed: {}", margin, e);
            None
        }
    }
}

/// Erode by the largest candidate margin that still leaves an area.
///
/// Candidates are tried in the configured (strictly decreasing) order. If
/// none succeeds the walkable area itself is used with margin 0.
pub fn build_routing_area(walkable: &Polygon<f64>, config: &ErosionSection) -> Option<RoutingArea> {
    for &margin in &config.margins {
        if let Some(polygon) = erode_area(walkable, margin) {
            debug!("[Erosion] routing area uses margin {:.2}", margin);
            return Some(RoutingArea { polygon, margin });
        }
    }

    if geometry::validate_polygon(walkable).is_err() {
        warn!("[Erosion] walkable area is degenerate, no routing area");
        return None;
    }

    warn!("[Erosion] no candidate margin succeeded, using walkable area");
    Some(RoutingArea {
        polygon: walkable.clone(),
        margin: 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorldPoint;
    use crate::geometry::rectangle;
    use approx::assert_relative_eq;
    use geo::Area;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
        rectangle(WorldPoint::new(x0, y0), WorldPoint::new(x1, y1))
    }

    #[test]
    fn test_wide_area_uses_largest_margin() {
        let area = build_routing_area(&rect(0.0, 0.0, 20.0, 10.0), &ErosionSection::default())
            .unwrap();
        assert_eq!(area.margin, 1.0);
        assert_relative_eq!(area.polygon.unsigned_area(), 18.0 * 8.0, epsilon = 1e-3);
    }

    #[test]
    fn test_narrow_corridor_falls_back_to_smaller_margin() {
        let corridor = rect(0.0, 0.0, 20.0, 1.5);
        let area = build_routing_area(&corridor, &ErosionSection::default()).unwrap();
        assert_eq!(area.margin, 0.6);
        assert_relative_eq!(area.polygon.unsigned_area(), 18.8 * 0.3, epsilon = 1e-3);
    }

    #[test]
    fn test_tiny_area_uses_zero_margin() {
        let speck = rect(0.0, 0.0, 0.1, 0.1);
        let area = build_routing_area(&speck, &ErosionSection::default()).unwrap();
        assert_eq!(area.margin, 0.0);
        assert_eq!(area.polygon, speck);
    }

    #[test]
    fn test_without_zero_candidate_falls_back_to_walkable() {
        let config = ErosionSection {
            margins: vec![5.0],
        };
        let small = rect(0.0, 0.0, 2.0, 2.0);
        let area = build_routing_area(&small, &config).unwrap();
        assert_eq!(area.margin, 0.0);
        assert_eq!(area.polygon, small);
    }

    #[test]
    fn test_erode_area_zero_margin_identity() {
        let poly = rect(0.0, 0.0, 3.0, 3.0);
        assert_eq!(erode_area(&poly, 0.0), Some(poly));
    }
}
