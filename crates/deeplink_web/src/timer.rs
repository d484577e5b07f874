//! Browser timer adapter over `setTimeout`/`clearTimeout`.

use deeplink::{FallbackAction, FallbackTimer, ScheduledFallback};

#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone, Copy, Default)]
/// Browser-backed [`FallbackTimer`] scheduling through `window.setTimeout`.
pub struct WebFallbackTimer;

impl FallbackTimer for WebFallbackTimer {
    fn schedule(&self, delay_ms: u32, action: FallbackAction) -> Box<dyn ScheduledFallback> {
        #[cfg(target_arch = "wasm32")]
        {
            match WebScheduledFallback::arm(delay_ms, action) {
                Some(handle) => Box::new(handle),
                None => Box::new(InertHandle),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (delay_ms, action);
            Box::new(InertHandle)
        }
    }
}

/// Handle used when no scheduler is reachable; trivially cancelled.
struct InertHandle;

impl ScheduledFallback for InertHandle {
    fn cancel(&self) {}

    fn is_cancelled(&self) -> bool {
        true
    }
}

#[cfg(target_arch = "wasm32")]
struct WebScheduledFallback {
    window: web_sys::Window,
    timeout_id: i32,
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
    cancelled: Cell<bool>,
}

#[cfg(target_arch = "wasm32")]
impl WebScheduledFallback {
    fn arm(delay_ms: u32, action: FallbackAction) -> Option<Self> {
        let window = web_sys::window()?;
        let mut action = Some(action);
        let closure = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            if let Some(action) = action.take() {
                action();
            }
        }));
        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .ok()?;
        Some(Self {
            window,
            timeout_id,
            closure: RefCell::new(Some(closure)),
            cancelled: Cell::new(false),
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl ScheduledFallback for WebScheduledFallback {
    fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        self.window.clear_timeout_with_handle(self.timeout_id);
        self.closure.borrow_mut().take();
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for WebScheduledFallback {
    fn drop(&mut self) {
        // An armed timeout outlives its handle; the callback closure must
        // stay alive for the browser to invoke it.
        if let Some(closure) = self.closure.borrow_mut().take() {
            closure.forget();
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn schedule_off_browser_returns_a_cancelled_handle() {
        let timer = WebFallbackTimer;
        let timer_obj: &dyn FallbackTimer = &timer;
        let handle = timer_obj.schedule(700, Box::new(|| panic!("must not run")));
        assert!(handle.is_cancelled());
        handle.cancel();
    }
}
