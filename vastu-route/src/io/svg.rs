//! SVG visualization for route auditing.
//!
//! Renders a floor and a computed route to SVG. The SVG serves as an audit
//! file showing:
//! - Building outline and rooms
//! - Walkable and routing areas
//! - Points of interest with their display names
//! - The route polyline with its true start and end

use std::fmt::{self, Write};
use std::path::Path;

use geo::{LineString, Polygon};

use crate::core::WorldPoint;
use crate::floor::{AreaFeature, PointFeature, point_names};
use crate::route::RouteLine;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Area fill when the feature has no style
    pub area: &'static str,
    /// Area outline
    pub outline: &'static str,
    /// Walkable area fill
    pub walkable: &'static str,
    /// Routing area fill
    pub routing: &'static str,
    /// Point marker color
    pub point: &'static str,
    /// Route line color
    pub route: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            area: "#627BC1",
            outline: "#333333",
            walkable: "#DDEEDD",
            routing: "#BBDDBB",
            point: "#B42222",
            route: "#13B113",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per floor unit
    pub scale: f64,
    /// Padding around the floor in pixels
    pub padding: f64,
    /// Route line width in pixels
    pub route_width: f64,
    /// Point marker radius in pixels
    pub marker_radius: f64,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 10.0,
            padding: 20.0,
            route_width: 3.0,
            marker_radius: 4.0,
            colors: SvgColorScheme::default(),
        }
    }
}

/// SVG route visualization builder
pub struct RouteSvg {
    config: SvgConfig,
    areas: Vec<AreaFeature>,
    walkable: Option<Polygon<f64>>,
    routing: Option<Polygon<f64>>,
    points: Vec<PointFeature>,
    route: Option<Vec<WorldPoint>>,
    title: Option<String>,
}

impl RouteSvg {
    /// Create a new, empty visualization
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            areas: Vec::new(),
            walkable: None,
            routing: None,
            points: Vec::new(),
            route: None,
            title: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add building and room areas
    pub fn with_areas(mut self, areas: &[AreaFeature]) -> Self {
        self.areas.extend_from_slice(areas);
        self
    }

    /// Add the walkable area
    pub fn with_walkable(mut self, walkable: Option<&Polygon<f64>>) -> Self {
        self.walkable = walkable.cloned();
        self
    }

    /// Add the routing area
    pub fn with_routing(mut self, routing: Option<&Polygon<f64>>) -> Self {
        self.routing = routing.cloned();
        self
    }

    /// Add points of interest
    pub fn with_points(mut self, points: &[PointFeature]) -> Self {
        self.points.extend_from_slice(points);
        self
    }

    /// Add the computed route
    pub fn with_route(mut self, route: &RouteLine) -> Self {
        self.route = Some(route.points.clone());
        self
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();
        // Writing into a String cannot fail
        let _ = self.write_svg(&mut svg);
        svg
    }

    /// Render and write to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }

    fn bounds(&self) -> Option<(WorldPoint, WorldPoint)> {
        let area_points = self
            .areas
            .iter()
            .flat_map(|a| a.polygon.exterior().coords().map(|c| WorldPoint::from(*c)));
        let route_points = self.route.iter().flatten().copied();
        let poi = self.points.iter().map(|p| p.position);

        area_points
            .chain(route_points)
            .chain(poi)
            .filter(WorldPoint::is_finite)
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((min, max)) => Some((
                    WorldPoint::new(min.x.min(p.x), min.y.min(p.y)),
                    WorldPoint::new(max.x.max(p.x), max.y.max(p.y)),
                )),
            })
    }

    fn write_svg(&self, svg: &mut String) -> fmt::Result {
        let (min, max) = self.bounds().unwrap_or((WorldPoint::ZERO, WorldPoint::ZERO));
        let scale = self.config.scale;
        let padding = self.config.padding;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };

        let map_width = (max.x - min.x) * scale;
        let map_height = (max.y - min.y) * scale;
        let width = map_width + 2.0 * padding;
        let height = map_height + 2.0 * padding + title_height;

        // SVG Y-axis is flipped (0 at top)
        let to_px = |p: WorldPoint| ((p.x - min.x) * scale, map_height - (p.y - min.y) * scale);

        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )?;
        writeln!(svg, r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##)?;

        if let Some(ref title) = self.title {
            writeln!(
                svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                escape(title)
            )?;
        }

        writeln!(
            svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )?;

        writeln!(svg, r#"    <g id="areas">"#)?;
        for area in &self.areas {
            let fill = area.style.as_deref().unwrap_or(self.config.colors.area);
            writeln!(
                svg,
                r#"      <path d="{}" fill="{}" fill-opacity="0.35" fill-rule="evenodd" stroke="{}" stroke-width="1.5"/>"#,
                polygon_path(&area.polygon, &to_px),
                escape(fill),
                self.config.colors.outline
            )?;
        }
        writeln!(svg, "    </g>")?;

        let overlays = [
            ("walkable", &self.walkable, self.config.colors.walkable),
            ("routing", &self.routing, self.config.colors.routing),
        ];
        for (id, polygon, color) in overlays {
            if let Some(polygon) = polygon {
                writeln!(
                    svg,
                    r#"    <path id="{}" d="{}" fill="{}" fill-opacity="0.6" fill-rule="evenodd" stroke="none"/>"#,
                    id,
                    polygon_path(polygon, &to_px),
                    color
                )?;
            }
        }

        if let Some(route) = &self.route {
            let mut d = String::new();
            for (i, p) in route.iter().enumerate() {
                let (x, y) = to_px(*p);
                let cmd = if i == 0 { "M" } else { " L" };
                write!(d, "{} {:.1} {:.1}", cmd, x, y)?;
            }
            writeln!(
                svg,
                r#"    <path id="route" d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
                d, self.config.colors.route, self.config.route_width
            )?;
        }

        writeln!(svg, r#"    <g id="points">"#)?;
        for (point, name) in self.points.iter().zip(point_names(&self.points)) {
            let (x, y) = to_px(point.position);
            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="1"/>"#,
                x, y, self.config.marker_radius, self.config.colors.point
            )?;
            writeln!(
                svg,
                r##"      <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="10" fill="#333">{}</text>"##,
                x + self.config.marker_radius + 2.0,
                y - 2.0,
                escape(&name)
            )?;
        }
        writeln!(svg, "    </g>")?;

        writeln!(svg, "  </g>")?;
        writeln!(svg, "</svg>")
    }
}

fn ring_path<F>(ring: &LineString<f64>, to_px: &F, out: &mut String) -> fmt::Result
where
    F: Fn(WorldPoint) -> (f64, f64),
{
    for (i, coord) in ring.coords().enumerate() {
        let (x, y) = to_px((*coord).into());
        let cmd = if i == 0 { "M" } else { "L" };
        write!(out, "{} {:.1} {:.1} ", cmd, x, y)?;
    }
    out.push('Z');
    Ok(())
}

fn polygon_path<F>(polygon: &Polygon<f64>, to_px: &F) -> String
where
    F: Fn(WorldPoint) -> (f64, f64),
{
    let mut d = String::new();
    for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
        if !d.is_empty() {
            d.push(' ');
        }
        let _ = ring_path(ring, to_px, &mut d);
    }
    d
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rectangle;
    use std::collections::BTreeMap;

    fn route(points: Vec<WorldPoint>) -> RouteLine {
        RouteLine {
            points,
            length: 0.0,
            margin: 0.0,
            cell_count: 0,
            nodes_expanded: 0,
        }
    }

    #[test]
    fn test_render_contains_layers() {
        let outline = rectangle(WorldPoint::ZERO, WorldPoint::new(20.0, 10.0));
        let mut props = BTreeMap::new();
        props.insert("name".to_string(), "A&B".to_string());
        let svg = RouteSvg::new(SvgConfig::default())
            .with_title("Floor 1")
            .with_areas(&[AreaFeature::new(outline.clone())])
            .with_walkable(Some(&outline))
            .with_points(&[PointFeature::new(WorldPoint::new(1.0, 1.0), props)])
            .with_route(&route(vec![WorldPoint::new(1.0, 1.0), WorldPoint::new(19.0, 9.0)]))
            .render();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"id="walkable""#));
        assert!(!svg.contains(r#"id="routing""#));
        assert!(svg.contains(r#"id="route""#));
        assert!(svg.contains("A&amp;B"));
        // 20 x 10 at scale 10 plus padding and title
        assert!(svg.contains(r#"width="240" height="170""#));
    }

    #[test]
    fn test_route_flips_y_axis() {
        let svg = RouteSvg::new(SvgConfig::default())
            .with_route(&route(vec![WorldPoint::new(0.0, 0.0), WorldPoint::new(10.0, 5.0)]))
            .render();
        assert!(svg.contains(r#"d="M 0.0 50.0 L 100.0 0.0""#));
    }

    #[test]
    fn test_empty_render() {
        let svg = RouteSvg::new(SvgConfig::default()).render();
        assert!(svg.contains("</svg>"));
    }
}
