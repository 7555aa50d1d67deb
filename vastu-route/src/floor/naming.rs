//! Display names for points of interest.

use std::collections::BTreeMap;

use super::feature::PointFeature;

/// Property keys tried in order when naming a point.
pub const NAME_KEYS: [&str; 9] = [
    "name", "title", "label", "room", "cabinet", "cab", "number", "номер", "кабинет",
];

/// First non-empty value among `keys`, in key order.
pub fn lookup_name<'a>(properties: &'a BTreeMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| properties.get(*key))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
}

impl PointFeature {
    /// Display name, falling back to `"Point N"` (1-based `index`).
    pub fn display_name(&self, index: usize) -> String {
        lookup_name(&self.properties, &NAME_KEYS)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Point {}", index + 1))
    }
}

/// Display names for a list of points, in order.
pub fn point_names(points: &[PointFeature]) -> Vec<String> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| p.display_name(i))
        .collect()
}

/// Resolve a user selector to a point index.
///
/// Exact display-name matches win; otherwise a bare number is read as a
/// 0-based index.
pub fn find_point(points: &[PointFeature], selector: &str) -> Option<usize> {
    let names = point_names(points);
    names
        .iter()
        .position(|n| n == selector)
        .or_else(|| selector.parse::<usize>().ok().filter(|i| *i < points.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorldPoint;

    fn point(pairs: &[(&str, &str)]) -> PointFeature {
        PointFeature::new(
            WorldPoint::ZERO,
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_name_priority() {
        let p = point(&[("label", "L"), ("title", "T")]);
        assert_eq!(p.display_name(0), "T");
    }

    #[test]
    fn test_empty_values_skipped() {
        let p = point(&[("name", "  "), ("кабинет", "214")]);
        assert_eq!(p.display_name(3), "214");
    }

    #[test]
    fn test_default_name() {
        let p = point(&[("color", "red")]);
        assert_eq!(p.display_name(4), "Point 5");
    }

    #[test]
    fn test_find_point_by_name_then_index() {
        let points = vec![point(&[("name", "Lobby")]), point(&[("name", "1")]), point(&[])];
        assert_eq!(find_point(&points, "Lobby"), Some(0));
        // Name match wins over index interpretation
        assert_eq!(find_point(&points, "1"), Some(1));
        assert_eq!(find_point(&points, "2"), Some(2));
        assert_eq!(find_point(&points, "Point 3"), Some(2));
        assert_eq!(find_point(&points, "7"), None);
        assert_eq!(find_point(&points, "Kitchen"), None);
    }
}
