//! Prelude module for goldbuy
//!
//! Re-exports the types most callers need.
//!
//! ```rust
//! use goldbuy::prelude::*;
//! ```

pub use crate::config::{CalculatorConfig, CalculatorConfigBuilder};
pub use crate::controller::GoldCalculator;
pub use crate::effects::Effect;
pub use crate::form::{FormState, GoldGrade};
pub use crate::format::{BahtFormatter, CurrencyFormatter};
pub use crate::inputs::{parse_field, FieldValue, IntoGoldDecimal};
pub use crate::mode::{Mode, ModeConfig};
pub use crate::pricing::{
    calculate, CalculatePrice, CalculationInput, FieldInputs, PricingRule, CONVERSION_FACTOR,
};
pub use crate::types::{CalculationResult, CalculationStep, Field, FieldFlags, GoldError, PriceBreakdown};
pub use crate::view::{Screen, ViewState};
