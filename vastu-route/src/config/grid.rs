//! Navigation grid settings.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Grid settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Desired number of columns across the routing area
    #[serde(default = "defaults::grid_columns")]
    pub columns: usize,

    /// Lower bound on rows and columns
    #[serde(default = "defaults::min_dimension")]
    pub min_dimension: usize,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            columns: defaults::grid_columns(),
            min_dimension: defaults::min_dimension(),
        }
    }
}
