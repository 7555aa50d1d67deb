//! Wall-clearance erosion settings.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ConfigError;

/// Erosion settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErosionSection {
    /// Candidate margins, strictly decreasing and ending at 0.
    /// The first one that leaves a non-empty area wins.
    #[serde(default = "defaults::erosion_margins")]
    pub margins: Vec<f64>,
}

impl Default for ErosionSection {
    fn default() -> Self {
        Self {
            margins: defaults::erosion_margins(),
        }
    }
}

impl ErosionSection {
    /// Check margin ordering
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.margins.is_empty() {
            return Err(ConfigError::Invalid("erosion.margins is empty".into()));
        }
        if self.margins.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(ConfigError::Invalid(
                "erosion.margins must be finite and non-negative".into(),
            ));
        }
        if self.margins.windows(2).any(|w| w[1] >= w[0]) {
            return Err(ConfigError::Invalid(
                "erosion.margins must be strictly decreasing".into(),
            ));
        }
        if self.margins.last() != Some(&0.0) {
            return Err(ConfigError::Invalid("erosion.margins must end at 0".into()));
        }
        Ok(())
    }
}
