//! Single-or-multi polygon results at the geometry boundary.

use geo::{Area, MultiPolygon, Polygon};

/// Result of a polygon operation that may split an area into pieces.
#[derive(Clone, Debug, PartialEq)]
pub enum AreaShape {
    /// One connected polygon (possibly with holes)
    Polygon(Polygon<f64>),
    /// Several disjoint polygons
    MultiPolygon(MultiPolygon<f64>),
}

impl AreaShape {
    /// Normalize a boolean-op result.
    ///
    /// Parts whose area is at or below `min_area` are dropped. Returns `None`
    /// when nothing is left.
    pub fn from_multi(multi: MultiPolygon<f64>, min_area: f64) -> Option<Self> {
        let mut parts: Vec<Polygon<f64>> = multi
            .0
            .into_iter()
            .filter(|p| {
                let a = p.unsigned_area();
                a.is_finite() && a > min_area
            })
            .collect();

        match parts.len() {
            0 => None,
            1 => parts.pop().map(AreaShape::Polygon),
            _ => Some(AreaShape::MultiPolygon(MultiPolygon::new(parts))),
        }
    }

    /// Number of disjoint parts
    pub fn part_count(&self) -> usize {
        match self {
            AreaShape::Polygon(_) => 1,
            AreaShape::MultiPolygon(mp) => mp.0.len(),
        }
    }

    /// Reduce to the single largest part.
    pub fn into_largest(self) -> Option<Polygon<f64>> {
        match self {
            AreaShape::Polygon(p) => Some(p),
            AreaShape::MultiPolygon(mp) => {
                let idx = largest_polygon_index(&mp.0)?;
                mp.0.into_iter().nth(idx)
            }
        }
    }
}

/// Index of the polygon with the greatest planar area.
///
/// Ties keep the earliest polygon: a later one must be strictly larger to
/// replace the current best. Polygons with a non-finite area are skipped.
pub fn largest_polygon_index(polygons: &[Polygon<f64>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_area = f64::NEG_INFINITY;

    for (i, polygon) in polygons.iter().enumerate() {
        let area = polygon.unsigned_area();
        if !area.is_finite() {
            continue;
        }
        if area > best_area {
            best_area = area;
            best = Some(i);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorldPoint;
    use crate::geometry::rectangle;

    fn square(x: f64, y: f64, size: f64) -> Polygon<f64> {
        rectangle(WorldPoint::new(x, y), WorldPoint::new(x + size, y + size))
    }

    #[test]
    fn test_largest_index_tie_keeps_first() {
        let polys = vec![square(0.0, 0.0, 1.0), square(5.0, 0.0, 2.0), square(9.0, 0.0, 2.0)];
        assert_eq!(largest_polygon_index(&polys), Some(1));
    }

    #[test]
    fn test_largest_index_empty() {
        assert_eq!(largest_polygon_index(&[]), None);
    }

    #[test]
    fn test_from_multi_drops_slivers() {
        let multi = MultiPolygon::new(vec![square(0.0, 0.0, 1e-6), square(2.0, 0.0, 1.0)]);
        let shape = AreaShape::from_multi(multi, 1e-9).unwrap();
        assert_eq!(shape.part_count(), 1);
        assert!(matches!(shape, AreaShape::Polygon(_)));
    }

    #[test]
    fn test_into_largest_from_multi() {
        let multi = MultiPolygon::new(vec![square(0.0, 0.0, 1.0), square(3.0, 0.0, 3.0)]);
        let shape = AreaShape::from_multi(multi, 0.0).unwrap();
        assert_eq!(shape.part_count(), 2);
        let largest = shape.into_largest().unwrap();
        assert!((largest.unsigned_area() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_multi_empty() {
        assert!(AreaShape::from_multi(MultiPolygon::new(vec![]), 0.0).is_none());
    }
}
