//! Floor loading and export.
//!
//! - **GeoJSON**: load a floor `FeatureCollection`, export a route `LineString`
//! - **Projection**: lon/lat degrees to local meters and back
//! - **SVG export**: floor, areas and route for auditing
//!
//! ```rust,ignore
//! use vastu_route::config::CoordinateSystem;
//! use vastu_route::io::{load_feature_collection, route_to_geojson};
//!
//! let floor = load_feature_collection(Path::new("floor.geojson"), CoordinateSystem::Geographic)?;
//! let context = FloorContext::from_features(&floor.features, config);
//! if let Some(route) = context.route(start, end).route {
//!     println!("{}", route_to_geojson(&route, &floor));
//! }
//! ```

pub mod geojson;
pub mod projection;
pub mod svg;

pub use geojson::{FloorFile, load_feature_collection, parse_feature_collection, parse_features, route_to_geojson};
pub use projection::LocalProjection;
pub use svg::{RouteSvg, SvgColorScheme, SvgConfig};
