//! Host-facing names and constants, loadable from YAML.
//!
//! Every field has a default, so an empty document (or no file at all)
//! yields the stock configuration:
//!
//! ```yaml
//! storage_key: darkMode
//! theme_attribute: data-theme
//! transition_class: theme-transition
//! transition_ms: 300
//! labels:
//!   dark: 라이트모드
//!   light: 다크모드
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::mode::ColorMode;

/// Names and timings used when reading the store and writing the surface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Store key holding `"dark"` or `"light"`.
    pub storage_key: String,
    /// Root attribute carrying the applied mode.
    pub theme_attribute: String,
    /// Root class present while a theme change is fading.
    pub transition_class: String,
    /// Fade length in milliseconds.
    pub transition_ms: u64,
    /// Toggle label text per applied mode.
    pub labels: ToggleLabels,
}

/// Toggle label text. Each label names the action, so it shows the
/// opposite of the mode it is displayed in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleLabels {
    /// Shown while dark is applied.
    pub dark: String,
    /// Shown while light is applied.
    pub light: String,
}

impl ToggleLabels {
    /// The label to show while `mode` is applied.
    pub fn for_mode(&self, mode: ColorMode) -> &str {
        match mode {
            ColorMode::Dark => &self.dark,
            ColorMode::Light => &self.light,
        }
    }
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self {
            dark: "라이트모드".to_string(),
            light: "다크모드".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "darkMode".to_string(),
            theme_attribute: "data-theme".to_string(),
            transition_class: "theme-transition".to_string(),
            transition_ms: 300,
            labels: ToggleLabels::default(),
        }
    }
}

impl ThemeConfig {
    /// Parses a YAML document. Blank input yields the defaults.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads and parses a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    /// How long the transition marker stays on the root.
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "darkMode");
        assert_eq!(config.theme_attribute, "data-theme");
        assert_eq!(config.transition_duration(), Duration::from_millis(300));
        assert_eq!(config.labels.for_mode(ColorMode::Dark), "라이트모드");
        assert_eq!(config.labels.for_mode(ColorMode::Light), "다크모드");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ThemeConfig::from_yaml_str("").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let config = ThemeConfig::from_yaml_str(
            "storage_key: theme\ntransition_ms: 150\nlabels:\n  dark: Light mode\n",
        )
        .unwrap();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.transition_ms, 150);
        assert_eq!(config.labels.dark, "Light mode");
        assert_eq!(config.labels.light, "다크모드");
        assert_eq!(config.theme_attribute, "data-theme");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ThemeConfig::from_yaml_str("storage_kye: theme\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ThemeConfig::load(Path::new("/nonexistent/darkmode.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
