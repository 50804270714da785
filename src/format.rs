//! Thai baht currency formatting.

use std::str::FromStr;

use fixed_decimal::FixedDecimal;
use icu::decimal::options::FixedDecimalFormatterOptions;
use icu::decimal::FixedDecimalFormatter;
use icu::locid::{locale, Locale};
use rust_decimal::{Decimal, RoundingStrategy};
use writeable::Writeable;

use crate::types::GoldError;

pub const BAHT_SYMBOL: &str = "฿";

/// Shown in place of a price when validation or arithmetic fails.
pub const ERROR_DISPLAY: &str = "Error";

/// Shown after a form reset.
pub const ZERO_DISPLAY: &str = "฿0.00";

fn th_locale() -> Locale {
    locale!("th-TH")
}

/// Trait for turning an amount into display text.
pub trait CurrencyFormatter {
    fn format_currency(&self, amount: Decimal) -> String;
}

/// Formats amounts as Thai baht with exactly two fraction digits.
pub struct BahtFormatter {
    inner: FixedDecimalFormatter,
}

impl std::fmt::Debug for BahtFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BahtFormatter")
            .field("locale", &th_locale().to_string())
            .finish()
    }
}

impl BahtFormatter {
    pub fn new() -> Result<Self, GoldError> {
        let options = FixedDecimalFormatterOptions::default();
        let inner = FixedDecimalFormatter::try_new(&th_locale().into(), options)
            .map_err(|e| GoldError::Formatter(format!("Failed to create th-TH number formatter: {}", e)))?;
        Ok(Self { inner })
    }
}

impl CurrencyFormatter for BahtFormatter {
    fn format_currency(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

        // Always two fraction digits, so 0 renders as "0.00".
        let text = format!("{:.2}", rounded.abs());
        let number = match FixedDecimal::from_str(&text) {
            Ok(fixed) => self.inner.format(&fixed).write_to_string().into_owned(),
            Err(_) => text,
        };

        format!("{}{}{}", sign, BAHT_SYMBOL, number)
    }
}
