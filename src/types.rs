use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

use crate::mode::Mode;

/// Numeric text fields of the calculator form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Field {
    Price,
    Deduction,
    Weight,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 3] = [Field::Price, Field::Deduction, Field::Weight];

    /// Following field in form order, wrapping around.
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Preceding field in form order, wrapping around.
    pub fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// One boolean per form field. Used for error highlighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFlags {
    pub price: bool,
    pub deduction: bool,
    pub weight: bool,
}

impl FieldFlags {
    pub fn get(&self, field: Field) -> bool {
        match field {
            Field::Price => self.price,
            Field::Deduction => self.deduction,
            Field::Weight => self.weight,
        }
    }

    pub fn set(&mut self, field: Field, on: bool) {
        match field {
            Field::Price => self.price = on,
            Field::Deduction => self.deduction = on,
            Field::Weight => self.weight = on,
        }
    }

    pub fn any(&self) -> bool {
        self.price || self.deduction || self.weight
    }

    /// Flagged fields in form order.
    pub fn fields(&self) -> Vec<Field> {
        Field::iter().filter(|f| self.get(*f)).collect()
    }
}

/// Kind of arithmetic performed by a [`CalculationStep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Initial,
    Subtract,
    Rate,
    Multiply,
    Result,
}

/// Represents a single step in the buy-back price calculation.
///
/// The ordered list of steps lets a caller show exactly how the final
/// price was reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationStep {
    /// Human-readable description of what this step does.
    pub description: String,
    /// The value at this step.
    pub amount: Decimal,
    pub operation: Operation,
}

impl CalculationStep {
    fn with(description: impl Into<String>, amount: Decimal, operation: Operation) -> Self {
        Self {
            description: description.into(),
            amount,
            operation,
        }
    }

    pub fn initial(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with(description, amount, Operation::Initial)
    }

    pub fn subtract(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with(description, amount, Operation::Subtract)
    }

    pub fn rate(description: impl Into<String>, rate: Decimal) -> Self {
        Self::with(description, rate, Operation::Rate)
    }

    pub fn multiply(description: impl Into<String>, factor: Decimal) -> Self {
        Self::with(description, factor, Operation::Multiply)
    }

    pub fn result(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with(description, amount, Operation::Result)
    }
}

/// Detailed breakdown of one successful price calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceBreakdown {
    /// Spot price the customer is quoted against.
    pub price: Decimal,
    /// Melt deduction, in percent of the spot price.
    pub deduction_percent: Decimal,
    pub weight_grams: Decimal,
    /// `price * deduction_percent / 100`
    pub deduction_amount: Decimal,
    /// `price - deduction_amount`
    pub price_after_deduction: Decimal,
    /// Unrounded purchase price.
    pub final_price: Decimal,
    /// Step-by-step trace of how this price was derived.
    pub calculation_trace: Vec<CalculationStep>,
}

impl PriceBreakdown {
    /// Final price rounded to two places, half away from zero.
    pub fn rounded_price(&self) -> Decimal {
        self.final_price
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Returns the final price as a plain string with 2 decimal places.
    pub fn format_amount(&self) -> String {
        format!("{:.2}", self.rounded_price())
    }

    /// Generates a human-readable explanation of the calculation.
    pub fn explain(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();

        let _ = writeln!(output, "Buy-back price explanation:");
        let _ = writeln!(output, "{:-<50}", "");

        let width = self
            .calculation_trace
            .iter()
            .map(|step| step.description.chars().count())
            .max()
            .unwrap_or(20)
            .max(20);

        for step in &self.calculation_trace {
            let symbol = match step.operation {
                Operation::Initial => " ",
                Operation::Subtract => "-",
                Operation::Rate | Operation::Multiply => "x",
                Operation::Result => "=",
            };

            match step.operation {
                Operation::Rate | Operation::Multiply => {
                    let _ = writeln!(
                        output,
                        "  {:<width$} : {} {:>12}",
                        step.description,
                        symbol,
                        step.amount.normalize(),
                        width = width
                    );
                }
                _ => {
                    let _ = writeln!(
                        output,
                        "  {:<width$} : {} {:>12.2}",
                        step.description,
                        symbol,
                        step.amount,
                        width = width
                    );
                }
            }
        }

        let _ = writeln!(output, "{:-<50}", "");
        let _ = writeln!(output, "Final Price: {}", self.format_amount());
        output
    }
}

impl std::fmt::Display for PriceBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x (1 - {}%) x 0.0656 x {} g = {}",
            self.price,
            self.deduction_percent,
            self.weight_grams,
            self.format_amount()
        )
    }
}

/// Outcome of a calculation request: a price, or the fields that failed
/// validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CalculationResult {
    Priced(PriceBreakdown),
    Invalid { fields: FieldFlags },
}

impl CalculationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, CalculationResult::Priced(_))
    }

    pub fn final_price(&self) -> Option<Decimal> {
        match self {
            CalculationResult::Priced(breakdown) => Some(breakdown.final_price),
            CalculationResult::Invalid { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GoldError {
    #[error("Invalid input [{field}]: {reason}")]
    InvalidInput { field: String, reason: String },
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Arithmetic overflow: operation '{operation}' failed")]
    Overflow { operation: String },
    #[error("Pricing for mode '{0}' is not implemented yet")]
    NotImplemented(Mode),
    #[error("Formatter error: {0}")]
    Formatter(String),
}

impl GoldError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        GoldError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn overflow(operation: impl Into<String>) -> Self {
        GoldError::Overflow {
            operation: operation.into(),
        }
    }
}
