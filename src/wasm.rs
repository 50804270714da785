use std::str::FromStr;
use std::time::Duration;

use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::config::CalculatorConfig;
use crate::controller::GoldCalculator;
use crate::form::GoldGrade;
use crate::mode::Mode;
use crate::types::Field;

/// Initialize hooks for better debugging in WASM
#[wasm_bindgen]
pub fn init_hooks() {
    console_error_panic_hook::set_once();
}

/// Browser handle on a [`GoldCalculator`].
///
/// Every mutating call returns the new view state so the page can re-render
/// from a single value.
#[wasm_bindgen]
pub struct WasmCalculator {
    inner: GoldCalculator,
}

#[wasm_bindgen]
impl WasmCalculator {
    /// `config_json` is optional; missing keys take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmCalculator, JsError> {
        let config = match config_json {
            Some(json) => CalculatorConfig::from_str(&json).map_err(|e| JsError::new(&e.to_string()))?,
            None => CalculatorConfig::default(),
        };
        let inner = GoldCalculator::new(config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { inner })
    }

    /// `mode` is one of `"ornament"`, `"bar"`, `"exchange"`.
    #[wasm_bindgen(js_name = selectMode)]
    pub fn select_mode(&mut self, mode: &str) -> Result<JsValue, JsError> {
        let mode = Mode::from_str(mode).map_err(|_| JsError::new(&format!("Unknown mode: {}", mode)))?;
        self.inner.select_mode(mode);
        self.view()
    }

    #[wasm_bindgen(js_name = goBack)]
    pub fn go_back(&mut self) -> Result<JsValue, JsError> {
        self.inner.go_back();
        self.view()
    }

    #[wasm_bindgen(js_name = resetForm)]
    pub fn reset_form(&mut self) -> Result<JsValue, JsError> {
        self.inner.reset_form();
        self.view()
    }

    /// `field` is one of `"price"`, `"deduction"`, `"weight"`.
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, field: &str, text: &str) -> Result<JsValue, JsError> {
        let field = Field::from_str(field).map_err(|_| JsError::new(&format!("Unknown field: {}", field)))?;
        self.inner.set_field(field, text);
        self.view()
    }

    #[wasm_bindgen(js_name = setWeight)]
    pub fn set_weight(&mut self, grams: f64) -> Result<JsValue, JsError> {
        self.inner
            .set_weight_value(grams)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.view()
    }

    /// `index` 0 selects 96.5%, 1 selects 99.99%.
    #[wasm_bindgen(js_name = setGrade)]
    pub fn set_grade(&mut self, index: usize) -> Result<JsValue, JsError> {
        let grade = match index {
            0 => GoldGrade::Percent965,
            1 => GoldGrade::Percent9999,
            other => return Err(JsError::new(&format!("Unknown grade index: {}", other))),
        };
        self.inner.set_grade(grade);
        self.view()
    }

    /// Feed elapsed milliseconds from `requestAnimationFrame` or a timer.
    pub fn tick(&mut self, elapsed_ms: f64) -> Result<JsValue, JsError> {
        let elapsed = Duration::try_from_secs_f64(elapsed_ms / 1000.0).unwrap_or_default();
        self.inner.tick(elapsed);
        self.view()
    }

    pub fn view(&self) -> Result<JsValue, JsError> {
        to_value(&self.inner.view()).map_err(|e| JsError::new(&format!("Serialization Error: {}", e)))
    }
}
