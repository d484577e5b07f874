//! Deep-link dispatch contracts and core algorithm.
//!
//! Attempts to open a native application from a web page via a custom URI
//! scheme, racing the attempt against a cancellable web-fallback timer. The
//! dispatcher touches its environment only through three injected host seams
//! (page, timer, loader), so the whole algorithm is testable without a real
//! document. Concrete browser adapters live in `deeplink_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dispatch;
pub mod loader;
pub mod page;
pub mod platform;
pub mod settings;
pub mod timer;

pub use dispatch::{Deeplink, DispatchError, HostBindings};
pub use loader::{MemoryUriLoader, NoopUriLoader, UriLoader};
pub use page::{HostPage, MemoryHostPage, NoopHostPage};
pub use platform::{user_agent_is_firefox, Platform};
pub use settings::{
    AndroidOptions, DeeplinkOptions, Settings, DEFAULT_ANDROID_APP_ID, DEFAULT_DELAY_MS,
    DEFAULT_FALLBACK_WEB_URL,
};
pub use timer::{
    FallbackAction, FallbackTimer, ManualFallbackTimer, NoopFallbackTimer, ScheduledFallback,
};
