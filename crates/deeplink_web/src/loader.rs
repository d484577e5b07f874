//! Hidden-iframe loader adapter.

use deeplink::UriLoader;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone, Copy, Default)]
/// Browser-backed [`UriLoader`] using a hidden, zero-visible-area iframe.
///
/// The frame's load event removes it from the document and then navigates
/// the top-level page to the URI.
pub struct WebFrameLoader;

impl UriLoader for WebFrameLoader {
    fn load(&self, uri: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            load_through_hidden_frame(uri);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = uri;
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_through_hidden_frame(uri: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(element) = document.create_element("iframe") else {
        return;
    };
    let Ok(frame) = element.dyn_into::<web_sys::HtmlIFrameElement>() else {
        return;
    };

    let target = uri.to_string();
    let frame_for_load = frame.clone();
    let on_load = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        frame_for_load.remove();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&target);
        }
    }));
    frame.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();

    frame.set_src(uri);
    let _ = frame.set_attribute("style", "display:none;");
    if let Some(body) = document.body() {
        let _ = body.append_child(&frame);
    }
}
