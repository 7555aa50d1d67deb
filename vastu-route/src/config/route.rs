//! Main RouteConfig with loading and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::erosion::ErosionSection;
use super::error::ConfigError;
use super::grid::GridSection;
use super::input::InputSection;
use super::search::{SearchSection, VisibilitySection};

/// Full routing configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct RouteConfig {
    /// Input coordinate settings
    #[serde(default)]
    pub input: InputSection,

    /// Wall-clearance erosion
    #[serde(default)]
    pub erosion: ErosionSection,

    /// Navigation grid resolution
    #[serde(default)]
    pub grid: GridSection,

    /// A* search limits and start/goal snapping
    #[serde(default)]
    pub search: SearchSection,

    /// Segment visibility sampling
    #[serde(default)]
    pub visibility: VisibilitySection,
}

impl RouteConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/route.yaml)
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new("configs/route.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check all cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.erosion.validate()?;

        if self.grid.columns == 0 {
            return Err(ConfigError::Invalid("grid.columns must be > 0".into()));
        }
        if self.grid.min_dimension == 0 {
            return Err(ConfigError::Invalid("grid.min_dimension must be > 0".into()));
        }
        if self.visibility.samples == 0 {
            return Err(ConfigError::Invalid("visibility.samples must be > 0".into()));
        }
        if self.search.max_expansions == 0 {
            return Err(ConfigError::Invalid("search.max_expansions must be > 0".into()));
        }
        let radii = &self.search.snap_radii;
        if radii.is_empty() || radii.iter().any(|r| *r < 0) || radii.windows(2).any(|w| w[1] < w[0])
        {
            return Err(ConfigError::Invalid(
                "search.snap_radii must be non-empty, non-negative and non-decreasing".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoordinateSystem;

    #[test]
    fn test_default_config() {
        let config = RouteConfig::default();
        assert_eq!(config.grid.columns, 160);
        assert_eq!(config.visibility.samples, 15);
        assert_eq!(config.erosion.margins.first(), Some(&1.0));
        assert_eq!(config.erosion.margins.last(), Some(&0.0));
        assert_eq!(config.input.coordinate_system, CoordinateSystem::Geographic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = RouteConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = RouteConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.erosion.margins, config.erosion.margins);
        assert_eq!(parsed.search.snap_radii, config.search.snap_radii);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "grid:\n  columns: 80\ninput:\n  coordinate_system: planar\n";
        let config = RouteConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.grid.columns, 80);
        assert_eq!(config.grid.min_dimension, 10);
        assert_eq!(config.input.coordinate_system, CoordinateSystem::Planar);
        assert_eq!(config.visibility.samples, 15);
    }

    #[test]
    fn test_rejects_increasing_margins() {
        let yaml = "erosion:\n  margins: [0.5, 1.0, 0.0]\n";
        assert!(matches!(
            RouteConfig::from_yaml(yaml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_margins_not_ending_at_zero() {
        let yaml = "erosion:\n  margins: [1.0, 0.5]\n";
        assert!(matches!(
            RouteConfig::from_yaml(yaml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_zero_samples() {
        let yaml = "visibility:\n  samples: 0\n";
        assert!(RouteConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            RouteConfig::from_yaml("grid: [not, a, map"),
            Err(ConfigError::Parse(_))
        ));
    }
}
