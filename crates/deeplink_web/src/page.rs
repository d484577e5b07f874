//! Browser page adapter: user-agent, location, and top-level navigation.

use deeplink::HostPage;

#[derive(Debug, Clone, Copy, Default)]
/// Browser-backed [`HostPage`] reading `navigator` and `location`.
pub struct WebHostPage;

impl HostPage for WebHostPage {
    fn user_agent(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window().and_then(|window| window.navigator().user_agent().ok())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn location_href(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window().and_then(|window| window.location().href().ok())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn navigate(&self, url: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(url);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
        }
    }
}
