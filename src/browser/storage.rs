//! [`TokenStorage`] over `window.localStorage`.

use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

use crate::error::WidgetError;
use crate::session::TokenStorage;

#[derive(Clone, Debug)]
pub struct LocalTokenStorage {
    storage: Storage,
}

impl LocalTokenStorage {
    /// `localStorage` of `window`, or `None` when blocked or unsupported.
    #[must_use]
    pub fn open(window: &Window) -> Option<Self> {
        window.local_storage().ok().flatten().map(|storage| Self { storage })
    }
}

fn storage_error(err: JsValue) -> WidgetError {
    WidgetError::Storage(format!("{err:?}"))
}

impl TokenStorage for LocalTokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, WidgetError> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WidgetError> {
        self.storage.set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> Result<(), WidgetError> {
        self.storage.remove_item(key).map_err(storage_error)
    }
}
