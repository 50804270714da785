//! Buy-back pricing engine.
//!
//! The ornament formula:
//!
//! ```text
//! deduction_amount      = price * (deduction_percent / 100)
//! price_after_deduction = price - deduction_amount
//! final_price           = price_after_deduction * 0.0656 * weight_grams
//! ```
//!
//! `0.0656` converts a per-baht-weight price into a per-gram one
//! (1 baht of gold ≈ 15.244 g).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::inputs::{parse_field, FieldValue, IntoGoldDecimal};
use crate::mode::Mode;
use crate::types::{CalculationResult, CalculationStep, Field, FieldFlags, GoldError, PriceBreakdown};

/// Fixed weight-unit to pricing-unit multiplier.
pub const CONVERSION_FACTOR: Decimal = dec!(0.0656);

const HUNDRED: Decimal = dec!(100);

/// Numbers for one calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub price: Decimal,
    pub deduction_percent: Decimal,
    pub weight_grams: Decimal,
}

impl CalculationInput {
    pub fn new(
        price: impl IntoGoldDecimal,
        deduction_percent: impl IntoGoldDecimal,
        weight_grams: impl IntoGoldDecimal,
    ) -> Result<Self, GoldError> {
        Ok(Self {
            price: price.into_gold_decimal()?,
            deduction_percent: deduction_percent.into_gold_decimal()?,
            weight_grams: weight_grams.into_gold_decimal()?,
        })
    }
}

/// Form fields read leniently, before range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInputs {
    pub price: FieldValue,
    pub deduction_percent: FieldValue,
    pub weight_grams: FieldValue,
}

impl FieldInputs {
    /// Reads raw field text. Unparsable text reads as zero.
    pub fn from_fields(price: &str, deduction_percent: &str, weight_grams: &str) -> Self {
        Self {
            price: parse_field(price),
            deduction_percent: parse_field(deduction_percent),
            weight_grams: parse_field(weight_grams),
        }
    }

    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Price => self.price,
            Field::Deduction => self.deduction_percent,
            Field::Weight => self.weight_grams,
        }
    }

    /// Fields holding a negative number, including ones too large to hold.
    pub fn invalid_fields(&self) -> FieldFlags {
        let mut flags = FieldFlags::default();
        for field in Field::ALL {
            flags.set(field, self.get(field).is_negative());
        }
        flags
    }

    /// Numbers for the formula. Fails with [`GoldError::Overflow`] when a
    /// field is out of range.
    pub fn to_input(&self) -> Result<CalculationInput, GoldError> {
        Ok(CalculationInput {
            price: self.price.to_decimal(Field::Price)?,
            deduction_percent: self.deduction_percent.to_decimal(Field::Deduction)?,
            weight_grams: self.weight_grams.to_decimal(Field::Weight)?,
        })
    }
}

impl From<CalculationInput> for FieldInputs {
    fn from(input: CalculationInput) -> Self {
        Self {
            price: input.price.into(),
            deduction_percent: input.deduction_percent.into(),
            weight_grams: input.weight_grams.into(),
        }
    }
}

/// Trait implemented by every pricing formula.
pub trait CalculatePrice {
    /// Computes the price for already-validated input.
    fn calculate_price(&self, input: &CalculationInput) -> Result<PriceBreakdown, GoldError>;
}

/// Formula selected by a [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "mode", rename_all = "camelCase")]
pub enum PricingRule {
    Ornament,
    /// Mode has configuration and UI but no agreed formula yet.
    NotImplemented(Mode),
}

impl PricingRule {
    pub fn is_implemented(&self) -> bool {
        !matches!(self, PricingRule::NotImplemented(_))
    }

    /// Validates `input` and, when every field is non-negative, prices it.
    pub fn evaluate(&self, input: &CalculationInput) -> Result<CalculationResult, GoldError> {
        self.evaluate_fields(&FieldInputs::from(*input))
    }

    /// Like [`evaluate`](Self::evaluate) for form fields. Negative fields are
    /// flagged before any out-of-range field is reported as an overflow.
    pub fn evaluate_fields(&self, fields: &FieldInputs) -> Result<CalculationResult, GoldError> {
        if let PricingRule::NotImplemented(mode) = self {
            return Err(GoldError::NotImplemented(*mode));
        }

        let invalid = fields.invalid_fields();
        if invalid.any() {
            warn!(fields = ?invalid.fields(), "Rejected negative calculator input");
            return Ok(CalculationResult::Invalid { fields: invalid });
        }

        let input = fields.to_input()?;
        self.calculate_price(&input).map(CalculationResult::Priced)
    }
}

impl CalculatePrice for PricingRule {
    fn calculate_price(&self, input: &CalculationInput) -> Result<PriceBreakdown, GoldError> {
        match self {
            PricingRule::Ornament => ornament_price(input),
            PricingRule::NotImplemented(mode) => Err(GoldError::NotImplemented(*mode)),
        }
    }
}

/// Validates and prices `input` with the ornament formula.
pub fn calculate(input: &CalculationInput) -> Result<CalculationResult, GoldError> {
    PricingRule::Ornament.evaluate(input)
}

fn ornament_price(input: &CalculationInput) -> Result<PriceBreakdown, GoldError> {
    let CalculationInput {
        price,
        deduction_percent,
        weight_grams,
    } = *input;

    let rate = deduction_percent
        .checked_div(HUNDRED)
        .ok_or_else(|| GoldError::overflow("deduction_percent / 100"))?;
    let deduction_amount = price
        .checked_mul(rate)
        .ok_or_else(|| GoldError::overflow("price * deduction rate"))?;
    let price_after_deduction = price
        .checked_sub(deduction_amount)
        .ok_or_else(|| GoldError::overflow("price - deduction_amount"))?;
    let final_price = price_after_deduction
        .checked_mul(CONVERSION_FACTOR)
        .and_then(|v| v.checked_mul(weight_grams))
        .ok_or_else(|| GoldError::overflow("price_after_deduction * 0.0656 * weight"))?;

    debug!(%price, %deduction_percent, %weight_grams, %final_price, "Calculated ornament buy-back price");

    let trace = vec![
        CalculationStep::initial("Gold price", price),
        CalculationStep::rate("Deduction (%)", deduction_percent),
        CalculationStep::subtract("Deduction amount", deduction_amount),
        CalculationStep::result("Price after deduction", price_after_deduction),
        CalculationStep::multiply("Conversion factor", CONVERSION_FACTOR),
        CalculationStep::multiply("Weight (grams)", weight_grams),
        CalculationStep::result("Final price", final_price),
    ];

    Ok(PriceBreakdown {
        price,
        deduction_percent,
        weight_grams,
        deduction_amount,
        price_after_deduction,
        final_price,
        calculation_trace: trace,
    })
}
