//! Persistent CLI Configuration Loader
//!
//! Configuration is read from `~/.config/goldbuy/config.toml` on Linux,
//! `~/Library/Application Support/goldbuy/config.toml` on macOS or
//! `%APPDATA%\goldbuy\config.toml` on Windows, unless `--config` names a file.

use goldbuy::prelude::{CalculatorConfig, GoldError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI Configuration structure loaded from TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliConfig {
    /// Deduction used when no mode is active.
    pub fallback_deduction_percent: Option<Decimal>,
    /// Delay before the price field takes focus.
    pub focus_delay_ms: Option<u64>,
    /// How long the result stays highlighted after a change.
    pub glow_duration_ms: Option<u64>,
    /// Weight shortcuts in grams, bound to keys 1-9.
    pub weight_presets: Option<Vec<Decimal>>,
    /// Enable file logging by default.
    pub enable_logging: Option<bool>,
}

impl CliConfig {
    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("goldbuy"))
    }

    /// Returns the full path to the default config file.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Loads `path`, or the default location when `path` is `None`.
    ///
    /// A missing file is not an error and yields the defaults. A file that
    /// cannot be read or parsed is reported so the caller can log it once
    /// logging is up.
    pub fn try_load(path: Option<&Path>) -> Result<Self, String> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::config_path() {
                Some(p) => p,
                None => {
                    debug!("Could not determine config directory");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            debug!("No config file found at {:?}", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read config file {:?}: {}", path, e))?;
        let config = toml::from_str::<CliConfig>(&content)
            .map_err(|e| format!("Failed to parse config file {:?}: {}", path, e))?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Overlays the file settings on the library defaults and validates the
    /// result.
    pub fn into_calculator_config(self) -> Result<CalculatorConfig, GoldError> {
        let mut config = CalculatorConfig::default();
        if let Some(percent) = self.fallback_deduction_percent {
            config.fallback_deduction_percent = percent;
        }
        if let Some(ms) = self.focus_delay_ms {
            config.focus_delay_ms = ms;
        }
        if let Some(ms) = self.glow_duration_ms {
            config.glow_duration_ms = ms;
        }
        if let Some(presets) = self.weight_presets {
            config.weight_presets = presets;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_config_default() {
        let config = CliConfig::default();
        assert!(config.weight_presets.is_none());
        assert_eq!(
            config.into_calculator_config().unwrap(),
            CalculatorConfig::default()
        );
    }

    #[test]
    fn test_config_parses_kebab_case() {
        let config: CliConfig = toml::from_str(
            r#"
            fallback-deduction-percent = 3
            glow-duration-ms = 500
            weight-presets = [1.9, 3.8]
            enable-logging = true
            "#,
        )
        .unwrap();

        assert_eq!(config.enable_logging, Some(true));
        let calc = config.into_calculator_config().unwrap();
        assert_eq!(calc.fallback_deduction_percent, dec!(3));
        assert_eq!(calc.glow_duration_ms, 500);
        assert_eq!(calc.focus_delay_ms, 100);
        assert_eq!(calc.weight_presets, vec![dec!(1.9), dec!(3.8)]);
    }

    #[test]
    fn test_invalid_presets_rejected() {
        let config = CliConfig {
            weight_presets: Some(vec![]),
            ..Default::default()
        };
        assert!(config.into_calculator_config().is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("goldbuy-missing-config.toml");
        let config = CliConfig::try_load(Some(&path)).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = CliConfig {
            glow_duration_ms: Some(300),
            ..Default::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("glow-duration-ms"));
    }
}
