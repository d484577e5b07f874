//! Browser (`wasm32`) implementations of the `deeplink` host seams.
//!
//! This crate is the concrete browser-side wiring layer: the page adapter
//! reads `navigator.userAgent` and `location.href` and assigns `location.href`
//! to navigate, the timer adapter wraps `setTimeout`/`clearTimeout`, and the
//! loader adapter drives the hidden-iframe load attempt. `adapters` composes
//! them into a ready dispatcher; `js` exports a `wasm-bindgen` surface for
//! direct use from page scripts.
//!
//! Non-wasm builds compile with inert fallbacks, so the crate surface stays
//! testable natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
#[cfg(target_arch = "wasm32")]
pub mod js;
pub mod loader;
pub mod page;
pub mod timer;

pub use adapters::{browser_deeplink, host_available};
pub use loader::WebFrameLoader;
pub use page::WebHostPage;
pub use timer::WebFallbackTimer;
