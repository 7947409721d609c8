//! Naming conventions for theme and brand tokens.

use serde::Deserialize;
use thiserror::Error;

/// Default namespace prefix for theme custom properties.
pub const DEFAULT_THEME_VAR_PREFIX: &str = "--_theme---";
/// Default namespace prefix for brand custom properties.
pub const DEFAULT_BRAND_VAR_PREFIX: &str = "--_brand---";
/// Default class prefix activating a theme; the remainder is the theme name.
pub const DEFAULT_THEME_CLASS_PREFIX: &str = "u-theme-";
/// Default class prefix activating a brand; the remainder is the brand name.
pub const DEFAULT_BRAND_CLASS_PREFIX: &str = "u-brand-";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScanConfigError {
    #[error("Invalid scan config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Namespace conventions the scanner matches against.
///
/// The defaults cover the published-site convention; embedders with a
/// different token namespace override the prefixes, either through the
/// builder setters or by deserializing an engine config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ScanConfig {
    pub theme_var_prefix: String,
    pub brand_var_prefix: String,
    pub theme_class_prefix: String,
    pub brand_class_prefix: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            theme_var_prefix: DEFAULT_THEME_VAR_PREFIX.to_string(),
            brand_var_prefix: DEFAULT_BRAND_VAR_PREFIX.to_string(),
            theme_class_prefix: DEFAULT_THEME_CLASS_PREFIX.to_string(),
            brand_class_prefix: DEFAULT_BRAND_CLASS_PREFIX.to_string(),
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme_var_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.theme_var_prefix = prefix.into();
        self
    }

    pub fn with_brand_var_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.brand_var_prefix = prefix.into();
        self
    }

    pub fn with_theme_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.theme_class_prefix = prefix.into();
        self
    }

    pub fn with_brand_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.brand_class_prefix = prefix.into();
        self
    }

    pub fn validate(&self) -> Result<(), ScanConfigError> {
        for (field, value) in [
            ("theme_var_prefix", &self.theme_var_prefix),
            ("brand_var_prefix", &self.brand_var_prefix),
            ("theme_class_prefix", &self.theme_class_prefix),
            ("brand_class_prefix", &self.brand_class_prefix),
        ] {
            if value.trim().is_empty() {
                return Err(ScanConfigError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }
        if !self.theme_var_prefix.starts_with("--") || !self.brand_var_prefix.starts_with("--") {
            return Err(ScanConfigError::InvalidValue {
                field: "theme_var_prefix",
                reason: "custom property prefixes must start with --".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ScanConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ScanConfig::new()
            .with_theme_class_prefix("t-")
            .with_brand_class_prefix("b-");
        assert_eq!(config.theme_class_prefix, "t-");
        assert_eq!(config.brand_class_prefix, "b-");
        assert_eq!(config.theme_var_prefix, DEFAULT_THEME_VAR_PREFIX);
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let config = ScanConfig::new().with_theme_class_prefix("  ");
        assert!(matches!(
            config.validate(),
            Err(ScanConfigError::InvalidValue { field: "theme_class_prefix", .. })
        ));
    }

    #[test]
    fn test_var_prefix_must_be_custom_property() {
        let config = ScanConfig::new().with_theme_var_prefix("theme-");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_toml_fills_defaults() {
        let config: ScanConfig = toml::from_str(r#"theme_class_prefix = "t-""#).unwrap();
        assert_eq!(config.theme_class_prefix, "t-");
        assert_eq!(config.brand_var_prefix, DEFAULT_BRAND_VAR_PREFIX);
    }
}
