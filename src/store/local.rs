use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::KvStore;

/// `window.localStorage`, scoped to the page origin.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// `None` when storage is disabled (private mode, sandboxed frames).
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(LocalStorage { storage })
    }
}

impl KvStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
