use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::planner::constants::{DEFAULT_AGE, DEFAULT_HEIGHT_IN, DEFAULT_WEIGHT_LB};

/// Fallback body metrics used when the profile omits or garbles a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDefaults {
    pub weight_lb: f64,
    pub height_in: f64,
    pub age: f64,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            weight_lb: DEFAULT_WEIGHT_LB,
            height_in: DEFAULT_HEIGHT_IN,
            age: DEFAULT_AGE,
        }
    }
}

/// Planner settings, read from an optional TOML file.
///
/// ```toml
/// strict = false
/// gender = "male"
/// activity_level = "moderate"
///
/// [defaults]
/// weight_lb = 165
/// height_in = 68
/// age = 28
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub defaults: ProfileDefaults,

    /// Used when the profile itself carries no gender.
    pub gender: Option<String>,

    /// Used when the profile itself carries no activity level.
    pub activity_level: Option<String>,

    /// Reject malformed profile input instead of substituting defaults.
    pub strict: bool,
}

impl PlannerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Load the planner config, or the built-in defaults when no path is given.
pub fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<PlannerConfig> {
    let Some(path) = path else {
        return Ok(PlannerConfig::default());
    };

    let content = fs::read_to_string(path.as_ref())?;
    let config = PlannerConfig::from_toml_str(&content)?;
    debug!(path = %path.as_ref().display(), strict = config.strict, "Loaded planner config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = load_config::<&Path>(None).unwrap();
        assert!(!config.strict);
        assert_eq!(config.defaults.weight_lb, 165.0);
        assert_eq!(config.defaults.height_in, 68.0);
        assert_eq!(config.defaults.age, 28.0);
    }

    #[test]
    fn test_partial_toml() {
        let config = PlannerConfig::from_toml_str(
            r#"
            activity_level = "active"

            [defaults]
            age = 40
            "#,
        )
        .unwrap();

        assert_eq!(config.activity_level.as_deref(), Some("active"));
        assert_eq!(config.defaults.age, 40.0);
        assert_eq!(config.defaults.weight_lb, 165.0);
        assert!(config.gender.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"strict = true\ngender = \"female\"\n").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert!(config.strict);
        assert_eq!(config.gender.as_deref(), Some("female"));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(PlannerConfig::from_toml_str("strict = maybe").is_err());
    }
}
