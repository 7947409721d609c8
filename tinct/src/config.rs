//! Engine configuration.
//!
//! Embedders either build the config in code or load it from a TOML file.
//! Every field has a default; `validate` runs on both paths.

use serde::Deserialize;
use std::path::Path;
use tinct_scan::{ScanConfig, ScanConfigError};

const DEFAULT_SIGNAL_CAPACITY: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error(transparent)]
    Scan(#[from] ScanConfigError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EngineConfig {
    /// Naming conventions the scanner matches against.
    pub scan: ScanConfig,
    /// Disable to force fresh computation every load (the fingerprint is
    /// then neither checked nor written).
    pub cache_enabled: bool,
    /// Readiness broadcast channel capacity.
    pub signal_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            cache_enabled: true,
            signal_capacity: DEFAULT_SIGNAL_CAPACITY,
        }
    }
}

impl EngineConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.signal_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "signal_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        self.scan.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = EngineConfig {
            signal_capacity: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "signal_capacity", .. })
        ));
    }

    #[test]
    fn test_invalid_scan_config_rejected() {
        let config = EngineConfig {
            scan: ScanConfig::new().with_theme_class_prefix(""),
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Scan(_))));
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
cache_enabled = false

[scan]
theme_class_prefix = "t-"
"#
        )
        .unwrap();
        let config = EngineConfig::from_path(file.path()).unwrap();
        assert!(!config.cache_enabled);
        assert_eq!(config.scan.theme_class_prefix, "t-");
        assert_eq!(config.signal_capacity, DEFAULT_SIGNAL_CAPACITY);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = toml::from_str::<EngineConfig>("retries = 3").unwrap_err();
        assert!(err.to_string().contains("retries"));
    }
}
