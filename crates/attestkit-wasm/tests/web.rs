//! Browser-side checks, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use attestkit_wasm::{export_filename, generate, list_types, version};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_version() {
    assert_eq!(version(), "1.0.0");
}

#[wasm_bindgen_test]
fn test_list_types_serializes() {
    assert!(list_types().unwrap().is_object());
}

#[wasm_bindgen_test]
fn test_unknown_type_is_error() {
    assert!(generate("attestation_inconnue", JsValue::NULL, None).is_err());
}

#[wasm_bindgen_test]
fn test_filename_without_record() {
    assert_eq!(
        export_filename(JsValue::UNDEFINED, "pdf").unwrap(),
        "Attestation_Document.pdf"
    );
}
