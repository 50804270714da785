//! Calculator form fields and their reset rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::mode::Mode;
use crate::pricing::FieldInputs;
use crate::types::Field;

/// Gold purity selector. Shown on the form; not used by the formula.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "camelCase")]
pub enum GoldGrade {
    /// Thai standard jewelry gold.
    #[default]
    #[strum(serialize = "96.5%")]
    Percent965,
    #[strum(serialize = "99.99%")]
    Percent9999,
}

impl GoldGrade {
    /// Next option, wrapping around.
    pub fn next(&self) -> Self {
        let all: Vec<GoldGrade> = GoldGrade::iter().collect();
        let pos = all.iter().position(|g| g == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }
}

/// Raw text of every form input plus the grade selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub price: String,
    pub deduction: String,
    pub weight: String,
    pub grade: GoldGrade,
}

impl FormState {
    /// Clears price and weight, restores the deduction default and the first
    /// grade option.
    pub fn reset(&mut self, mode: Option<Mode>, fallback_deduction: Decimal) {
        self.price.clear();
        self.weight.clear();
        let deduction = mode.map_or(fallback_deduction, |m| m.default_deduction_percent());
        self.deduction = deduction.normalize().to_string();
        self.grade = GoldGrade::default();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Price => &self.price,
            Field::Deduction => &self.deduction,
            Field::Weight => &self.weight,
        }
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let text = text.into();
        match field {
            Field::Price => self.price = text,
            Field::Deduction => self.deduction = text,
            Field::Weight => self.weight = text,
        }
    }

    /// Field values for the pricing engine. Unparsable text reads as zero.
    pub fn input(&self) -> FieldInputs {
        FieldInputs::from_fields(&self.price, &self.deduction, &self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::FieldValue;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reset_with_mode() {
        let mut form = FormState {
            price: "41000".into(),
            deduction: "2".into(),
            weight: "15.2".into(),
            grade: GoldGrade::Percent9999,
        };
        form.reset(Some(Mode::Ornament), dec!(5));

        assert_eq!(form.price, "");
        assert_eq!(form.weight, "");
        assert_eq!(form.deduction, "5");
        assert_eq!(form.grade, GoldGrade::Percent965);
    }

    #[test]
    fn test_reset_without_mode_uses_fallback() {
        let mut form = FormState::default();
        form.reset(None, dec!(5.0));
        assert_eq!(form.deduction, "5");

        form.reset(Some(Mode::Bar), dec!(5));
        assert_eq!(form.deduction, "0");
    }

    #[test]
    fn test_grade_cycles() {
        assert_eq!(GoldGrade::Percent965.next(), GoldGrade::Percent9999);
        assert_eq!(GoldGrade::Percent9999.next(), GoldGrade::Percent965);
        assert_eq!(GoldGrade::default().to_string(), "96.5%");
    }

    #[test]
    fn test_input_reads_fields() {
        let mut form = FormState::default();
        form.set(Field::Price, "2000");
        form.set(Field::Deduction, "5");
        form.set(Field::Weight, "oops");
        let input = form.input();
        assert_eq!(input.price, FieldValue::Number(dec!(2000)));
        assert_eq!(input.deduction_percent, FieldValue::Number(dec!(5)));
        assert_eq!(input.weight_grams, FieldValue::Number(Decimal::ZERO));
        assert_eq!(form.get(Field::Price), "2000");
    }
}
