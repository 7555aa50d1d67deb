//! Search and visibility settings.

use serde::{Deserialize, Serialize};

use super::defaults;

/// A* search settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSection {
    /// Maximum nodes to expand before giving up
    #[serde(default = "defaults::max_expansions")]
    pub max_expansions: usize,

    /// Manhattan ring radii (in cells) tried when snapping a point to
    /// the nearest walkable cell
    #[serde(default = "defaults::snap_radii")]
    pub snap_radii: Vec<i32>,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            max_expansions: defaults::max_expansions(),
            snap_radii: defaults::snap_radii(),
        }
    }
}

/// Segment visibility settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VisibilitySection {
    /// Interior points sampled per segment (endpoints excluded)
    #[serde(default = "defaults::visibility_samples")]
    pub samples: usize,
}

impl Default for VisibilitySection {
    fn default() -> Self {
        Self {
            samples: defaults::visibility_samples(),
        }
    }
}
