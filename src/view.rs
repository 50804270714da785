//! Screen state machine and the render-ready view projection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::controller::GoldCalculator;
use crate::form::FormState;
use crate::mode::Mode;
use crate::types::{Field, FieldFlags};

/// Which view is visible.
///
/// ```text
/// Menu --select(ornament)--> Calculator(ornament)
/// Menu --select(other)-----> Placeholder(other)
/// Calculator | Placeholder --back--> Menu
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "view", content = "mode", rename_all = "camelCase")]
pub enum Screen {
    #[default]
    Menu,
    Calculator(Mode),
    /// "Coming soon" page for modes without a formula.
    Placeholder(Mode),
}

impl Screen {
    /// Screen reached by choosing `mode` on the menu.
    pub fn select(mode: Mode) -> Screen {
        if mode.is_available() {
            Screen::Calculator(mode)
        } else {
            Screen::Placeholder(mode)
        }
    }

    /// Screen reached by the back action. Always the menu.
    pub fn back(self) -> Screen {
        Screen::Menu
    }

    pub fn mode(&self) -> Option<Mode> {
        match self {
            Screen::Menu => None,
            Screen::Calculator(mode) | Screen::Placeholder(mode) => Some(*mode),
        }
    }

    pub fn is_calculator(&self) -> bool {
        matches!(self, Screen::Calculator(_))
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub screen: Screen,
    /// Calculator heading; `None` outside the calculator.
    pub title: Option<String>,
    pub fields: FormState,
    /// Formatted price, `"฿0.00"` after reset, or `"Error"`.
    pub result: String,
    pub result_is_error: bool,
    pub error_flags: FieldFlags,
    pub glowing: bool,
    pub focused: Option<Field>,
    pub weight_presets: Vec<Decimal>,
}

impl ViewState {
    pub fn is_flagged(&self, field: Field) -> bool {
        self.error_flags.get(field)
    }
}

/// Projects controller state into a [`ViewState`]. Pure; does not touch
/// the controller.
pub fn project(calc: &GoldCalculator) -> ViewState {
    let screen = calc.screen();
    let title = match screen {
        Screen::Calculator(mode) => Some(mode.title().to_string()),
        _ => None,
    };

    ViewState {
        screen,
        title,
        fields: calc.form().clone(),
        result: calc.result_text().to_string(),
        result_is_error: calc.result_is_error(),
        error_flags: calc.error_flags(),
        glowing: calc.is_glowing(),
        focused: calc.focused(),
        weight_presets: calc.config().weight_presets.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        assert_eq!(Screen::default(), Screen::Menu);
        assert_eq!(Screen::select(Mode::Ornament), Screen::Calculator(Mode::Ornament));
        assert_eq!(Screen::select(Mode::Bar), Screen::Placeholder(Mode::Bar));
        assert_eq!(Screen::select(Mode::Exchange), Screen::Placeholder(Mode::Exchange));
        assert_eq!(Screen::Calculator(Mode::Ornament).back(), Screen::Menu);
        assert_eq!(Screen::Placeholder(Mode::Bar).back(), Screen::Menu);
        assert_eq!(Screen::Menu.back(), Screen::Menu);
    }

    #[test]
    fn test_screen_serializes_tagged() {
        let json = serde_json::to_string(&Screen::Calculator(Mode::Ornament)).unwrap();
        assert_eq!(json, r#"{"view":"calculator","mode":"ornament"}"#);
        let json = serde_json::to_string(&Screen::Menu).unwrap();
        assert_eq!(json, r#"{"view":"menu"}"#);
    }
}
