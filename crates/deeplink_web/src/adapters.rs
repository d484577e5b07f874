//! Browser wiring for the deep-link dispatcher.

use std::rc::Rc;

use deeplink::{Deeplink, HostBindings};

use crate::{WebFallbackTimer, WebFrameLoader, WebHostPage};

/// Returns whether a browser page environment is reachable.
pub fn host_available() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().is_some_and(|window| window.document().is_some())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Wires a dispatcher to the browser adapters.
///
/// When no page environment is reachable (no `window` or `document`) this
/// returns the disabled posture instead of failing.
pub fn browser_deeplink() -> Deeplink {
    if !host_available() {
        return Deeplink::disabled();
    }
    Deeplink::new(HostBindings {
        page: Rc::new(WebHostPage),
        timer: Rc::new(WebFallbackTimer),
        loader: Rc::new(WebFrameLoader),
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn wiring_off_browser_yields_the_disabled_posture() {
        assert!(!host_available());
        let deeplink = browser_deeplink();
        assert!(deeplink.is_disabled());
        assert_eq!(deeplink.open("myapp://open/profile"), Ok(false));
    }
}
