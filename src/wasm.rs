// WebAssembly bindings for web frontends
use crate::session::{ConverterSession, Side};
use crate::units;
use wasm_bindgen::prelude::*;

fn to_js_error<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Converter state behind a two-field web form
#[wasm_bindgen]
pub struct ConverterWasm {
    session: ConverterSession,
}

impl Default for ConverterWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: ConverterSession::default(),
        }
    }

    /// Build from TOML config contents
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<ConverterWasm, JsValue> {
        let config = crate::config::Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self {
            session: ConverterSession::from_config(&config),
        })
    }

    /// Category names as a JSON array
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<String, JsValue> {
        serde_json::to_string(&units::categories()).map_err(to_js_error)
    }

    /// Unit names of a category as a JSON array
    #[wasm_bindgen]
    pub fn units(&self, category: &str) -> Result<String, JsValue> {
        let names = units::units_for(category).map_err(to_js_error)?;
        serde_json::to_string(&names).map_err(to_js_error)
    }

    /// The whole unit table as JSON
    #[wasm_bindgen]
    pub fn catalog(&self) -> Result<String, JsValue> {
        serde_json::to_string(&units::catalog_summary()).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn convert(
        &self,
        category: &str,
        from: &str,
        to: &str,
        value: f64,
    ) -> Result<f64, JsValue> {
        units::convert(category, from, to, value).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn format(&self, value: f64, digits: usize) -> String {
        units::format_significant(value, digits)
    }

    #[wasm_bindgen]
    pub fn select_category(&mut self, name: &str) -> Result<(), JsValue> {
        self.session.select_category(name).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn select_source_unit(&mut self, name: &str) -> Result<(), JsValue> {
        self.session.select_source_unit(name).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn select_target_unit(&mut self, name: &str) -> Result<(), JsValue> {
        self.session.select_target_unit(name).map_err(to_js_error)
    }

    /// Text typed into the source field; returns the new target text
    #[wasm_bindgen]
    pub fn edit_source(&mut self, text: &str) -> Result<String, JsValue> {
        self.session.edit(Side::Source, text).map_err(to_js_error)?;
        Ok(self.session.text(Side::Target).to_string())
    }

    /// Text typed into the target field; returns the new source text
    #[wasm_bindgen]
    pub fn edit_target(&mut self, text: &str) -> Result<String, JsValue> {
        self.session.edit(Side::Target, text).map_err(to_js_error)?;
        Ok(self.session.text(Side::Source).to_string())
    }

    #[wasm_bindgen]
    pub fn source_text(&self) -> String {
        self.session.text(Side::Source).to_string()
    }

    #[wasm_bindgen]
    pub fn target_text(&self) -> String {
        self.session.text(Side::Target).to_string()
    }
}
