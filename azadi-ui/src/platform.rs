//! Browser Platform Calls
//!
//! Share sheet, clipboard, page URL and scrolling. The share and clipboard
//! functions are looked up at runtime since not every browser has them.

use async_trait::async_trait;
use azadi::share::{ShareError, SharePayload, SharePlatform};
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// `navigator.share` / `navigator.clipboard.writeText`
pub struct BrowserPlatform {
    navigator: Option<web_sys::Navigator>,
}

impl BrowserPlatform {
    pub fn new() -> Self {
        Self {
            navigator: web_sys::window().map(|window| window.navigator()),
        }
    }

    fn share_fn(&self) -> Option<(&web_sys::Navigator, Function)> {
        let navigator = self.navigator.as_ref()?;
        let share = method(navigator.as_ref(), "share")?;
        Some((navigator, share))
    }

    fn clipboard_fn(&self) -> Option<(JsValue, Function)> {
        let navigator = self.navigator.as_ref()?;
        let clipboard = Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard")).ok()?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return None;
        }
        let write_text = method(&clipboard, "writeText")?;
        Some((clipboard, write_text))
    }
}

#[async_trait(?Send)]
impl SharePlatform for BrowserPlatform {
    fn can_share(&self) -> bool {
        self.share_fn().is_some()
    }

    fn can_copy(&self) -> bool {
        self.clipboard_fn().is_some()
    }

    async fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        let (navigator, share) = self
            .share_fn()
            .ok_or_else(|| ShareError::Share("navigator.share missing".to_string()))?;

        let data = Object::new();
        for (field, value) in [
            ("title", &payload.title),
            ("text", &payload.text),
            ("url", &payload.url),
        ] {
            Reflect::set(&data, &JsValue::from_str(field), &JsValue::from_str(value))
                .map_err(|e| ShareError::Share(describe(e)))?;
        }

        let pending = share
            .call1(navigator.as_ref(), &data)
            .map_err(|e| ShareError::Share(describe(e)))?;
        settle(pending).await.map_err(ShareError::Share)
    }

    async fn copy_text(&self, text: &str) -> Result<(), ShareError> {
        let (clipboard, write_text) = self
            .clipboard_fn()
            .ok_or_else(|| ShareError::Clipboard("navigator.clipboard missing".to_string()))?;

        let pending = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| ShareError::Clipboard(describe(e)))?;
        settle(pending).await.map_err(ShareError::Clipboard)
    }
}

/// Current page address, empty if unknown
pub fn page_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_default()
}

/// Bring the element with `id` into view
pub fn scroll_to(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Wait for a promise (or plain value) to settle
async fn settle(value: JsValue) -> Result<(), String> {
    JsFuture::from(Promise::resolve(&value))
        .await
        .map(|_| ())
        .map_err(describe)
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
