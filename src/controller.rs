//! The calculator controller.
//!
//! [`GoldCalculator`] owns the whole state of one calculator instance: the
//! visible screen, the active mode, the form, the result display and the
//! pending deferred effects. Front ends call its operations in response to
//! user actions and draw [`GoldCalculator::view`].

use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::effects::{Effect, EffectScheduler};
use crate::form::{FormState, GoldGrade};
use crate::format::{BahtFormatter, CurrencyFormatter, ERROR_DISPLAY, ZERO_DISPLAY};
use crate::inputs::IntoGoldDecimal;
use crate::mode::Mode;
use crate::pricing::PricingRule;
use crate::types::{CalculationResult, Field, FieldFlags, GoldError};
use crate::view::{project, Screen, ViewState};

#[derive(Debug)]
pub struct GoldCalculator {
    config: CalculatorConfig,
    formatter: BahtFormatter,
    screen: Screen,
    mode: Option<Mode>,
    form: FormState,
    result_text: String,
    result_is_error: bool,
    error_flags: FieldFlags,
    glowing: bool,
    focused: Option<Field>,
    last_result: Option<CalculationResult>,
    scheduler: EffectScheduler,
}

impl GoldCalculator {
    /// Creates a calculator showing the menu with a freshly reset form.
    pub fn new(config: CalculatorConfig) -> Result<Self, GoldError> {
        config.validate()?;
        let mut calc = Self {
            config,
            formatter: BahtFormatter::new()?,
            screen: Screen::Menu,
            mode: None,
            form: FormState::default(),
            result_text: ZERO_DISPLAY.to_string(),
            result_is_error: false,
            error_flags: FieldFlags::default(),
            glowing: false,
            focused: None,
            last_result: None,
            scheduler: EffectScheduler::new(),
        };
        calc.reset_form();
        Ok(calc)
    }

    pub fn with_defaults() -> Result<Self, GoldError> {
        Self::new(CalculatorConfig::default())
    }

    // ========== Mode Selector ==========

    /// Records `mode` and leaves the menu for the calculator (ornament) or
    /// the "coming soon" placeholder (every other mode).
    pub fn select_mode(&mut self, mode: Mode) {
        if self.screen != Screen::Menu {
            self.scheduler.end_view();
            self.focused = None;
        }

        self.mode = Some(mode);
        self.screen = Screen::select(mode);
        debug!(%mode, screen = ?self.screen, "Selected mode");

        if self.screen.is_calculator() {
            self.form.deduction = mode.default_deduction_percent().normalize().to_string();
            self.scheduler
                .schedule(Effect::FocusPriceInput, self.config.focus_delay());
        }
    }

    /// Returns to the menu, cancelling effects of the view being left, and
    /// resets the form.
    pub fn go_back(&mut self) {
        self.scheduler.end_view();
        self.screen = self.screen.back();
        // No mode from here on, so reset_form falls back to the configured deduction.
        self.mode = None;
        self.focused = None;
        self.glowing = false;
        debug!("Returned to menu");
        self.reset_form();
    }

    // ========== Form State Manager ==========

    /// Clears price and weight, restores the deduction default, selects the
    /// first grade and shows `฿0.00`.
    pub fn reset_form(&mut self) {
        self.form
            .reset(self.mode, self.config.fallback_deduction_percent);
        self.result_text = ZERO_DISPLAY.to_string();
        self.result_is_error = false;
        self.error_flags = FieldFlags::default();
        self.last_result = None;
    }

    /// Writes a weight shortcut into the weight field and recalculates.
    pub fn set_weight(&mut self, grams: Decimal) {
        self.form.weight = grams.normalize().to_string();
        self.calculate();
    }

    /// [`set_weight`](Self::set_weight) for any numeric type.
    pub fn set_weight_value(&mut self, grams: impl IntoGoldDecimal) -> Result<(), GoldError> {
        let grams = grams.into_gold_decimal()?;
        self.set_weight(grams);
        Ok(())
    }

    /// Applies the configured weight shortcut at `index`. Returns `false` when
    /// there is none.
    pub fn apply_weight_preset(&mut self, index: usize) -> bool {
        match self.config.weight_presets.get(index).copied() {
            Some(grams) => {
                self.set_weight(grams);
                true
            }
            None => false,
        }
    }

    /// Records an edit of a text field and recalculates.
    pub fn set_field(&mut self, field: Field, text: impl Into<String>) {
        self.form.set(field, text);
        self.calculate();
    }

    pub fn set_grade(&mut self, grade: GoldGrade) {
        self.form.grade = grade;
    }

    pub fn focus(&mut self, field: Option<Field>) {
        self.focused = field;
    }

    // ========== Pricing Engine ==========

    /// Reads the form, validates it and renders the price or `"Error"`.
    pub fn calculate(&mut self) {
        let input = self.form.input();
        let rule = self.mode.map_or(PricingRule::Ornament, |m| m.pricing_rule());

        match rule.evaluate_fields(&input) {
            Ok(CalculationResult::Priced(breakdown)) => {
                self.error_flags = FieldFlags::default();
                let value = breakdown.final_price;
                self.last_result = Some(CalculationResult::Priced(breakdown));
                self.render(value);
            }
            Ok(CalculationResult::Invalid { fields }) => {
                self.error_flags = fields;
                self.show_error();
                self.last_result = Some(CalculationResult::Invalid { fields });
            }
            Err(e) => {
                warn!(error = %e, "Calculation failed");
                self.error_flags = FieldFlags::default();
                self.show_error();
                self.last_result = None;
            }
        }
    }

    fn show_error(&mut self) {
        self.result_text = ERROR_DISPLAY.to_string();
        self.result_is_error = true;
    }

    // ========== Presentation Formatter ==========

    /// Shows `value` as baht and starts the result glow.
    pub fn render(&mut self, value: Decimal) {
        self.result_text = self.formatter.format_currency(value);
        self.result_is_error = false;
        self.glowing = true;
        self.scheduler
            .schedule(Effect::ClearGlow, self.config.glow_duration());
    }

    // ========== Deferred effects ==========

    /// Advances the effect clock by `elapsed` and applies what came due.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<Effect> {
        let fired = self.scheduler.advance(elapsed);
        for effect in &fired {
            match effect {
                Effect::FocusPriceInput => {
                    if self.screen.is_calculator() {
                        self.focused = Some(Field::Price);
                    }
                }
                Effect::ClearGlow => self.glowing = false,
            }
        }
        fired
    }

    /// Time until the next deferred effect, for hosts that sleep between
    /// events.
    pub fn next_effect_in(&self) -> Option<Duration> {
        self.scheduler.next_due_in()
    }

    pub fn has_pending_effects(&self) -> bool {
        !self.scheduler.is_idle()
    }

    // ========== Accessors ==========

    pub fn view(&self) -> ViewState {
        project(self)
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn result_is_error(&self) -> bool {
        self.result_is_error
    }

    pub fn error_flags(&self) -> FieldFlags {
        self.error_flags
    }

    pub fn is_glowing(&self) -> bool {
        self.glowing
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    /// Outcome of the most recent calculation since the last reset.
    pub fn last_result(&self) -> Option<&CalculationResult> {
        self.last_result.as_ref()
    }
}
