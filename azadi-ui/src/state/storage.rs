//! Browser Local Storage
//!
//! `WishStore` over `window.localStorage`.

use azadi::wishes::{WishError, WishResult, WishStore};
use wasm_bindgen::JsValue;

/// Wish store backed by the browser's local storage
///
/// Holds no storage when the page has none (privacy mode, sandboxed frames);
/// every call then reports the store as unavailable.
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        Self { storage }
    }

    fn storage(&self) -> WishResult<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| WishError::Unavailable("localStorage not available".to_string()))
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WishStore for LocalStore {
    fn get_item(&self, key: &str) -> WishResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> WishResult<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> WishError {
    WishError::Unavailable(format!("{:?}", err))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use azadi::wishes::WishBoard;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const KEY: &str = "azadi-wishes-test";

    #[wasm_bindgen_test]
    fn test_local_store_roundtrip() {
        let mut store = LocalStore::new();
        store.set_item(KEY, "[]").unwrap();
        assert_eq!(store.get_item(KEY).unwrap().as_deref(), Some("[]"));
    }

    #[wasm_bindgen_test]
    fn test_board_survives_reload() {
        let mut store = LocalStore::new();
        store.set_item(KEY, "garbage").unwrap();

        let mut board = WishBoard::load_with_key(store, KEY);
        assert!(board.is_empty());
        board.submit("", "Azadi Mubarak");

        let reloaded = WishBoard::load_with_key(LocalStore::new(), KEY);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.wishes()[0].author, "Guest");
    }
}
