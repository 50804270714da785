//! Pricing modes offered on the main menu and their static configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::pricing::PricingRule;

/// A buy-back desk mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// Buying back jewelry (ทองรูปพรรณ). The only mode with a formula.
    Ornament,
    /// Buying back bullion bars.
    Bar,
    /// Exchange / trade-in.
    Exchange,
}

/// Static per-mode settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeConfig {
    pub title: &'static str,
    pub default_deduction_percent: Decimal,
}

const ORNAMENT: ModeConfig = ModeConfig {
    title: "รับซื้อทองรูปพรรณ",
    default_deduction_percent: dec!(5),
};

// Bars are usually bought back without a melt deduction.
const BAR: ModeConfig = ModeConfig {
    title: "รับซื้อทองแท่ง",
    default_deduction_percent: dec!(0),
};

const EXCHANGE: ModeConfig = ModeConfig {
    title: "เปลี่ยน / เทิร์นทอง",
    default_deduction_percent: dec!(0),
};

impl Mode {
    /// Menu order.
    pub const ALL: [Mode; 3] = [Mode::Ornament, Mode::Bar, Mode::Exchange];

    pub fn config(&self) -> &'static ModeConfig {
        match self {
            Mode::Ornament => &ORNAMENT,
            Mode::Bar => &BAR,
            Mode::Exchange => &EXCHANGE,
        }
    }

    pub fn title(&self) -> &'static str {
        self.config().title
    }

    pub fn default_deduction_percent(&self) -> Decimal {
        self.config().default_deduction_percent
    }

    /// Formula used for this mode.
    pub fn pricing_rule(&self) -> PricingRule {
        match self {
            Mode::Ornament => PricingRule::Ornament,
            other => PricingRule::NotImplemented(*other),
        }
    }

    /// Whether selecting this mode opens the calculator (vs. the placeholder).
    pub fn is_available(&self) -> bool {
        self.pricing_rule().is_implemented()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_mode_defaults() {
        assert_eq!(Mode::Ornament.default_deduction_percent(), dec!(5));
        assert_eq!(Mode::Bar.default_deduction_percent(), Decimal::ZERO);
        assert_eq!(Mode::Exchange.default_deduction_percent(), Decimal::ZERO);
        assert_eq!(Mode::Ornament.title(), "รับซื้อทองรูปพรรณ");
    }

    #[test]
    fn test_only_ornament_is_available() {
        let available: Vec<Mode> = Mode::iter().filter(Mode::is_available).collect();
        assert_eq!(available, vec![Mode::Ornament]);
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!(Mode::from_str("Bar").unwrap(), Mode::Bar);
        assert_eq!(Mode::Exchange.to_string(), "exchange");
        assert!(Mode::from_str("coins").is_err());
    }
}
