//! Bindings to Bootstrap's `ScrollSpy`, loaded by the page as a global.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type ScrollSpy;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element, options: &JsValue) -> Result<ScrollSpy, JsValue>;
}

/// `new bootstrap.ScrollSpy(element, { target, offset })`.
///
/// # Errors
///
/// Returns the thrown JS value, e.g. when Bootstrap is not loaded.
pub fn activate(element: &Element, target: &str, offset: u32) -> Result<(), JsValue> {
    let options = Object::new();
    Reflect::set(&options, &"target".into(), &target.into())?;
    Reflect::set(&options, &"offset".into(), &offset.into())?;
    ScrollSpy::new(element, &options)?;
    Ok(())
}
