//! Route between two points of a floor plan.
//!
//! Usage:
//!   vastu-route floor.geojson --list
//!   vastu-route floor.geojson --from Lobby --to 214 --svg route.svg

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use vastu_route::config::{CoordinateSystem, RouteConfig};
use vastu_route::floor::{FloorContext, find_point, point_names};
use vastu_route::io::{RouteSvg, SvgConfig, load_feature_collection, route_to_geojson};
use vastu_route::{Error, Result};

/// Indoor floor routing
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Floor plan as a GeoJSON FeatureCollection
    floor: PathBuf,

    /// Configuration file path (defaults to configs/route.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat coordinates as planar instead of lon/lat
    #[arg(long)]
    planar: bool,

    /// List point names and exit
    #[arg(short, long)]
    list: bool,

    /// Start point name or index (default: first point)
    #[arg(short, long)]
    from: Option<String>,

    /// End point name or index (default: last point)
    #[arg(short, long)]
    to: Option<String>,

    /// Write an SVG audit of the floor and route
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let mut config = match &args.config {
        Some(path) => RouteConfig::load(path)?,
        None => RouteConfig::load_default()?,
    };
    if args.planar {
        config.input.coordinate_system = CoordinateSystem::Planar;
    }

    let floor = load_feature_collection(&args.floor, config.input.coordinate_system)?;
    let points = &floor.features.points;

    if args.list {
        for (i, name) in point_names(points).iter().enumerate() {
            println!("{:>4}  {}", i, name);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let last = points.len().saturating_sub(1).to_string();
    let from = args.from.as_deref().unwrap_or("0");
    let to = args.to.as_deref().unwrap_or(&last);
    let resolve = |selector: &str| {
        find_point(points, selector).ok_or_else(|| Error::UnknownPoint(selector.to_string()))
    };
    let (start, end) = (resolve(from)?, resolve(to)?);

    let names = point_names(points);
    info!("Routing '{}' -> '{}'", names[start], names[end]);

    let context = FloorContext::from_features(&floor.features, config);
    let outcome = context.route(points[start].position, points[end].position);

    if let Some(path) = &args.svg {
        let mut svg = RouteSvg::new(SvgConfig::default())
            .with_title(format!("{} → {}", names[start], names[end]))
            .with_areas(&floor.features.areas)
            .with_walkable(context.walkable())
            .with_routing(context.routing().map(|r| &r.polygon))
            .with_points(points);
        if let Some(route) = &outcome.route {
            svg = svg.with_route(route);
        }
        svg.save(path)?;
        info!("SVG written to {}", path.display());
    }

    match &outcome.route {
        Some(route) => {
            let feature = route_to_geojson(route, &floor);
            println!("{}", serde_json::to_string_pretty(&feature)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("{} ({})", outcome.status, outcome.status.code());
            Ok(ExitCode::from(2))
        }
    }
}
