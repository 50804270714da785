//! # goldbuy
//!
//! Gold buy-back price calculator: ornament pricing with a melt deduction,
//! Thai baht formatting, and a headless controller that front ends drive and
//! render through [`view::ViewState`].
//!
//! ```rust
//! use goldbuy::prelude::*;
//!
//! let mut calc = GoldCalculator::with_defaults().unwrap();
//! calc.select_mode(Mode::Ornament);
//! calc.set_field(Field::Price, "2000");
//! calc.set_field(Field::Weight, "1");
//! assert_eq!(calc.result_text(), "฿124.64");
//! ```

pub mod config;
pub mod controller;
pub mod effects;
pub mod form;
pub mod format;
pub mod inputs;
pub mod mode;
pub mod prelude;
pub mod pricing;
pub mod types;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::CalculatorConfig;
pub use controller::GoldCalculator;
pub use mode::Mode;
pub use pricing::{calculate, CalculationInput, CalculatePrice, PricingRule};
pub use types::{CalculationResult, Field, GoldError, PriceBreakdown};
