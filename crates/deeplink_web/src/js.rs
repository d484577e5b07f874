//! `wasm-bindgen` surface mirroring the two-call page-script API.

use deeplink::{Deeplink, DeeplinkOptions};
use wasm_bindgen::prelude::*;

/// JS-facing dispatcher handle exported to the embedding page.
#[wasm_bindgen]
pub struct BrowserDeeplink {
    inner: Deeplink,
}

#[wasm_bindgen]
impl BrowserDeeplink {
    /// Merges an options object over the defaults; must run before `open`.
    ///
    /// # Errors
    ///
    /// Rejects options that do not decode into the recognized shape.
    pub fn setup(&self, options: JsValue) -> Result<(), JsValue> {
        let options: DeeplinkOptions = if options.is_undefined() || options.is_null() {
            DeeplinkOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(JsValue::from)?
        };
        self.inner.setup(&options);
        Ok(())
    }

    /// Attempts to open a deep link, returning whether an attempt was made.
    ///
    /// # Errors
    ///
    /// Rejects malformed URIs on the Android rewrite path.
    pub fn open(&self, uri: &str) -> Result<bool, JsValue> {
        self.inner
            .open(uri)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

/// Returns a dispatcher bound to the current page, or a disabled one when no
/// page environment is reachable.
#[wasm_bindgen(js_name = browserDeeplink)]
pub fn browser_deeplink_js() -> BrowserDeeplink {
    BrowserDeeplink {
        inner: crate::adapters::browser_deeplink(),
    }
}
