//! Application state wrapped around the calculator controller.

use goldbuy::prelude::*;
use std::time::Duration;
use tui_input::{Input, InputRequest};

/// Type of status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Warning,
}

/// Main application state
pub struct App {
    /// Whether the app should keep running
    pub running: bool,
    /// The headless calculator this UI draws
    pub calc: GoldCalculator,
    /// Selected menu item index
    pub menu_index: usize,
    /// Text input widget state for the field being edited
    pub input: Input,
    /// Field mirrored in `input`
    editing: Option<Field>,
    /// Status message to display
    pub message: Option<(String, MessageType)>,
}

impl App {
    pub fn new(config: CalculatorConfig) -> Result<Self, GoldError> {
        Ok(Self {
            running: true,
            calc: GoldCalculator::new(config)?,
            menu_index: 0,
            input: Input::default(),
            editing: None,
            message: None,
        })
    }

    /// Menu entries in display order.
    pub fn menu_modes(&self) -> &'static [Mode] {
        &Mode::ALL
    }

    pub fn menu_up(&mut self) {
        let max = self.menu_modes().len();
        if self.menu_index > 0 {
            self.menu_index -= 1;
        } else {
            self.menu_index = max.saturating_sub(1);
        }
    }

    pub fn menu_down(&mut self) {
        let max = self.menu_modes().len();
        if self.menu_index < max.saturating_sub(1) {
            self.menu_index += 1;
        } else {
            self.menu_index = 0;
        }
    }

    /// Opens the highlighted mode.
    pub fn select_menu(&mut self) {
        if let Some(mode) = self.menu_modes().get(self.menu_index).copied() {
            self.calc.select_mode(mode);
            self.message = None;
            self.sync_input();
        }
    }

    pub fn go_back(&mut self) {
        self.calc.go_back();
        self.message = None;
        self.sync_input();
    }

    /// Field being edited, if any.
    pub fn editing(&self) -> Option<Field> {
        self.editing
    }

    pub fn next_field(&mut self) {
        let field = self.calc.focused().map_or(Field::Price, Field::next);
        self.calc.focus(Some(field));
        self.sync_input();
    }

    pub fn prev_field(&mut self) {
        let field = self.calc.focused().map_or(Field::Weight, Field::prev);
        self.calc.focus(Some(field));
        self.sync_input();
    }

    /// Stops editing without leaving the calculator.
    pub fn leave_field(&mut self) {
        self.calc.focus(None);
        self.sync_input();
    }

    /// Applies one edit to the active field and recalculates.
    pub fn edit(&mut self, request: InputRequest) {
        let Some(field) = self.editing else {
            return;
        };
        if self.input.handle(request).is_some() {
            self.calc.set_field(field, self.input.value());
        }
    }

    /// Applies the weight shortcut bound to digit key `n` (1-based).
    pub fn apply_preset(&mut self, n: usize) {
        if n == 0 || !self.calc.apply_weight_preset(n - 1) {
            self.message = Some((format!("No weight shortcut on key {}", n), MessageType::Warning));
        }
    }

    pub fn cycle_grade(&mut self) {
        let grade = self.calc.form().grade.next();
        self.calc.set_grade(grade);
        self.message = Some((format!("Grade: {}", grade), MessageType::Info));
    }

    /// Feeds elapsed wall time to the calculator's deferred effects.
    pub fn tick(&mut self, elapsed: Duration) {
        if !self.calc.tick(elapsed).is_empty() {
            self.sync_input();
        }
    }

    /// Reloads the input buffer when focus moved to another field.
    fn sync_input(&mut self) {
        let focused = self.calc.focused();
        if focused == self.editing {
            return;
        }
        self.editing = focused;
        self.input = match focused {
            Some(field) => Input::new(self.calc.form().get(field).to_string()),
            None => Input::default(),
        };
    }
}
