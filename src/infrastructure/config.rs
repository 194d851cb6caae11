// ============================================================
// SETTINGS
// ============================================================
// Converter settings: defaults, optional TOML file, env overrides

use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Name of the optional settings file next to the binary
const SETTINGS_FILE: &str = "pressure-export.toml";

/// Environment variable prefix, e.g. PRESSURE_EXPORT_INPUT_PATH
const ENV_PREFIX: &str = "PRESSURE_EXPORT_";

/// Converter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path of the capture CSV to convert
    pub input_path: PathBuf,

    /// Path of the JSON file the viewer loads
    pub output_path: PathBuf,

    /// Detect the delimiter from the file instead of assuming comma
    pub detect_delimiter: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/sample_pressure.csv"),
            output_path: PathBuf::from("data/pressure_data.json"),
            detect_delimiter: true,
        }
    }
}

impl Settings {
    /// Load settings: defaults, then the TOML file, then env vars
    pub fn load() -> Result<Self> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(SETTINGS_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| AppError::ValidationError(format!("Invalid settings: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(AppError::ValidationError(
                "input_path must not be empty".to_string(),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(AppError::ValidationError(
                "output_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let settings = Settings::default();
        assert_eq!(settings.input_path, PathBuf::from("data/sample_pressure.csv"));
        assert_eq!(settings.output_path, PathBuf::from("data/pressure_data.json"));
        assert!(settings.detect_delimiter);
    }

    #[test]
    fn test_empty_path_rejected() {
        let settings = Settings {
            input_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate().unwrap_err(),
            AppError::ValidationError(_)
        ));
    }
}
