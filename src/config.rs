use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::inputs::IntoGoldDecimal;
use crate::types::GoldError;

/// Weight shortcuts can be bound to the number keys 1-9.
pub const MAX_WEIGHT_PRESETS: usize = 9;

/// Runtime settings for the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Deduction written by a form reset when no mode is active.
    pub fallback_deduction_percent: Decimal,
    /// Delay before the price input receives focus on entering the calculator.
    pub focus_delay_ms: u64,
    /// How long the result glows after each render.
    pub glow_duration_ms: u64,
    /// Weight shortcuts, in grams.
    pub weight_presets: Vec<Decimal>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            fallback_deduction_percent: dec!(5),
            focus_delay_ms: 100,
            glow_duration_ms: 200,
            // half-salung, 1 salung, 2 salung, 1 baht
            weight_presets: vec![dec!(1.9), dec!(3.8), dec!(7.6), dec!(15.2)],
        }
    }
}

impl std::str::FromStr for CalculatorConfig {
    type Err = GoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: CalculatorConfig = serde_json::from_str(s)
            .map_err(|e| GoldError::ConfigurationError(format!("Failed to parse config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

impl CalculatorConfig {
    pub fn builder() -> CalculatorConfigBuilder {
        CalculatorConfigBuilder::default()
    }

    /// Validates the configuration for logical consistency.
    pub fn validate(&self) -> Result<(), GoldError> {
        if self.fallback_deduction_percent < Decimal::ZERO {
            return Err(GoldError::ConfigurationError(
                "Fallback deduction must be non-negative".to_string(),
            ));
        }
        if self.weight_presets.is_empty() {
            return Err(GoldError::ConfigurationError(
                "At least one weight preset is required".to_string(),
            ));
        }
        if self.weight_presets.len() > MAX_WEIGHT_PRESETS {
            return Err(GoldError::ConfigurationError(format!(
                "At most {} weight presets are supported, got {}",
                MAX_WEIGHT_PRESETS,
                self.weight_presets.len()
            )));
        }
        if let Some(bad) = self.weight_presets.iter().find(|w| **w < Decimal::ZERO) {
            return Err(GoldError::ConfigurationError(format!(
                "Weight preset must be non-negative, got {}",
                bad
            )));
        }
        Ok(())
    }

    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }

    pub fn glow_duration(&self) -> Duration {
        Duration::from_millis(self.glow_duration_ms)
    }
}

// ========== CalculatorConfigBuilder ==========

#[derive(Default)]
pub struct CalculatorConfigBuilder {
    fallback_deduction: Option<Decimal>,
    focus_delay_ms: Option<u64>,
    glow_duration_ms: Option<u64>,
    weight_presets: Option<Vec<Decimal>>,
    error: Option<GoldError>,
}

impl CalculatorConfigBuilder {
    pub fn fallback_deduction(mut self, percent: impl IntoGoldDecimal) -> Self {
        match percent.into_gold_decimal() {
            Ok(p) => self.fallback_deduction = Some(p),
            Err(e) => self.error = Some(e),
        }
        self
    }

    pub fn focus_delay_ms(mut self, ms: u64) -> Self {
        self.focus_delay_ms = Some(ms);
        self
    }

    pub fn glow_duration_ms(mut self, ms: u64) -> Self {
        self.glow_duration_ms = Some(ms);
        self
    }

    pub fn weight_presets<I, T>(mut self, grams: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoGoldDecimal,
    {
        let parsed: Result<Vec<Decimal>, GoldError> =
            grams.into_iter().map(IntoGoldDecimal::into_gold_decimal).collect();
        match parsed {
            Ok(presets) => self.weight_presets = Some(presets),
            Err(e) => self.error = Some(e),
        }
        self
    }

    pub fn build(self) -> Result<CalculatorConfig, GoldError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let defaults = CalculatorConfig::default();
        let config = CalculatorConfig {
            fallback_deduction_percent: self
                .fallback_deduction
                .unwrap_or(defaults.fallback_deduction_percent),
            focus_delay_ms: self.focus_delay_ms.unwrap_or(defaults.focus_delay_ms),
            glow_duration_ms: self.glow_duration_ms.unwrap_or(defaults.glow_duration_ms),
            weight_presets: self.weight_presets.unwrap_or(defaults.weight_presets),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CalculatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fallback_deduction_percent, dec!(5));
        assert_eq!(config.focus_delay(), Duration::from_millis(100));
        assert_eq!(config.glow_duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_builder_validation() {
        let ok = CalculatorConfig::builder()
            .fallback_deduction(3)
            .weight_presets([1.0, 2.5])
            .build()
            .unwrap();
        assert_eq!(ok.fallback_deduction_percent, dec!(3));
        assert_eq!(ok.weight_presets, vec![dec!(1.0), dec!(2.5)]);

        assert!(CalculatorConfig::builder().fallback_deduction(-1).build().is_err());
        assert!(CalculatorConfig::builder().weight_presets(Vec::<i32>::new()).build().is_err());
        assert!(CalculatorConfig::builder().weight_presets(1..=10).build().is_err());
        assert!(CalculatorConfig::builder().weight_presets(["x"]).build().is_err());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config: CalculatorConfig = r#"{ "glow_duration_ms": 350 }"#.parse().unwrap();
        assert_eq!(config.glow_duration_ms, 350);
        assert_eq!(config.focus_delay_ms, 100);

        let bad = r#"{ "weight_presets": ["-1"] }"#.parse::<CalculatorConfig>();
        assert!(matches!(bad, Err(GoldError::ConfigurationError(_))));
    }
}
