//! Local equirectangular projection between lon/lat degrees and meters.
//!
//! Accurate to well under a centimeter across a single building, which is
//! all the routing pipeline needs. Erosion margins and grid cells are then
//! expressed in meters.

use crate::core::WorldPoint;

/// Mean Earth radius (IUGG) in meters
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Projection centered on a reference lon/lat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalProjection {
    origin: WorldPoint,
    cos_lat: f64,
}

impl LocalProjection {
    /// Projection with `origin` (x = longitude, y = latitude) at (0, 0)
    pub fn new(origin: WorldPoint) -> Self {
        Self {
            origin,
            cos_lat: origin.y.to_radians().cos(),
        }
    }

    /// Projection centered on the bounding box of `points`.
    ///
    /// Returns `None` when no finite point is given.
    pub fn fit<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = WorldPoint>,
    {
        let mut min = WorldPoint::new(f64::INFINITY, f64::INFINITY);
        let mut max = WorldPoint::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut any = false;

        for p in points.into_iter().filter(WorldPoint::is_finite) {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            any = true;
        }

        any.then(|| Self::new(min.lerp(&max, 0.5)))
    }

    /// Reference lon/lat
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// Lon/lat degrees to local meters
    #[inline]
    pub fn project(&self, lonlat: WorldPoint) -> WorldPoint {
        WorldPoint::new(
            (lonlat.x - self.origin.x).to_radians() * EARTH_RADIUS_M * self.cos_lat,
            (lonlat.y - self.origin.y).to_radians() * EARTH_RADIUS_M,
        )
    }

    /// Local meters back to lon/lat degrees
    #[inline]
    pub fn unproject(&self, local: WorldPoint) -> WorldPoint {
        WorldPoint::new(
            self.origin.x + (local.x / (EARTH_RADIUS_M * self.cos_lat)).to_degrees(),
            self.origin.y + (local.y / EARTH_RADIUS_M).to_degrees(),
        )
    }
}
