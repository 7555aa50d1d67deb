//! Input coordinate settings.

use serde::{Deserialize, Serialize};

/// How feature coordinates should be interpreted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// Longitude/latitude degrees; projected to local meters before routing
    #[default]
    Geographic,
    /// Already planar; used as-is
    Planar,
}

/// Input settings section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InputSection {
    /// Coordinate system of the floor features
    #[serde(default)]
    pub coordinate_system: CoordinateSystem,
}
