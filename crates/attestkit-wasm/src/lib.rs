//! attestkit-wasm - WebAssembly bindings for attestkit
//!
//! JSON in, JSON out: records are plain objects keyed by field name
//! (`{"nom": "Martin", "dateNaissance": "1990-04-12"}`), results are the
//! serde representation of the Rust types. Errors surface as JS `Error`s.

pub mod api;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use attestkit_model::FieldValues;
use attestkit_render::ExportSettings;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn values_from_js(values: JsValue) -> Result<FieldValues, JsError> {
    if values.is_undefined() || values.is_null() {
        return Ok(FieldValues::new());
    }
    serde_wasm_bindgen::from_value(values).map_err(|e| JsError::new(&e.to_string()))
}

fn core_error(err: attestkit_core::CoreError) -> JsError {
    JsError::new(&err.to_string())
}

/// Returns the current version of attestkit
#[wasm_bindgen]
pub fn version() -> String {
    attestkit_core::VERSION.to_string()
}

/// Every document type descriptor, in registry order
#[wasm_bindgen(js_name = listTypes)]
pub fn list_types() -> Result<JsValue, JsError> {
    to_js(api::list_types())
}

#[wasm_bindgen(js_name = listCategories)]
pub fn list_categories() -> Result<JsValue, JsError> {
    to_js(api::list_categories())
}

/// Selector search; `category` is a category key or `"all"`
#[wasm_bindgen(js_name = filterTypes)]
pub fn filter_types(query: &str, category: &str) -> Result<JsValue, JsError> {
    to_js(&api::filter_types(query, category).map_err(core_error)?)
}

/// Field specs to display for a type given the current record
#[wasm_bindgen(js_name = fieldSpecs)]
pub fn field_specs(type_key: &str, values: JsValue) -> Result<JsValue, JsError> {
    let values = values_from_js(values)?;
    to_js(&api::field_specs(type_key, &values).map_err(core_error)?)
}

/// Generate the document body; `today` is `YYYY-MM-DD`, local date if absent
#[wasm_bindgen]
pub fn generate(
    type_key: &str,
    values: JsValue,
    today: Option<String>,
) -> Result<JsValue, JsError> {
    let values = values_from_js(values)?;
    let ctx = api::context(today.as_deref());
    to_js(&api::generate_body(type_key, &values, &ctx).map_err(core_error)?)
}

#[wasm_bindgen(js_name = renderPreview)]
pub fn render_preview(
    type_key: &str,
    values: JsValue,
    today: Option<String>,
) -> Result<JsValue, JsError> {
    let values = values_from_js(values)?;
    let ctx = api::context(today.as_deref());
    to_js(&api::preview(type_key, &values, &ctx).map_err(core_error)?)
}

#[wasm_bindgen(js_name = renderExportable)]
pub fn render_exportable(
    type_key: &str,
    values: JsValue,
    today: Option<String>,
) -> Result<JsValue, JsError> {
    let values = values_from_js(values)?;
    let ctx = api::context(today.as_deref());
    let export = api::exportable(type_key, &values, &ctx, &ExportSettings::default())
        .map_err(core_error)?;
    to_js(&export)
}

#[wasm_bindgen(js_name = exportFilename)]
pub fn export_filename(values: JsValue, extension: &str) -> Result<String, JsError> {
    Ok(api::filename(&values_from_js(values)?, extension))
}

/// Submission diagnostics: `{ hasErrors, diagnostics }`
#[wasm_bindgen]
pub fn validate(
    type_key: &str,
    values: JsValue,
    today: Option<String>,
) -> Result<JsValue, JsError> {
    let values = values_from_js(values)?;
    let ctx = api::context(today.as_deref());
    to_js(&api::validate(type_key, &values, &ctx).map_err(core_error)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), "1.0.0");
    }
}
