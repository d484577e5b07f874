//! Host page contract: environment reads and the navigation side effect.

use std::{cell::RefCell, rc::Rc};

/// Host access to the embedding page.
///
/// The environment inputs are read-only; [`HostPage::navigate`] is the single
/// outward side effect of a dispatch. All methods are best-effort: a host
/// without page access reports `None` and swallows navigations.
pub trait HostPage {
    /// Returns the host user-agent string, when available.
    fn user_agent(&self) -> Option<String>;

    /// Returns the current page URL, when available.
    fn location_href(&self) -> Option<String>;

    /// Navigates the top-level page. Failures are silent.
    fn navigate(&self, url: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op page adapter for environments without page access.
pub struct NoopHostPage;

impl HostPage for NoopHostPage {
    fn user_agent(&self) -> Option<String> {
        None
    }

    fn location_href(&self) -> Option<String> {
        None
    }

    fn navigate(&self, _url: &str) {}
}

#[derive(Debug, Clone, Default)]
/// In-memory page adapter with scripted inputs and recorded navigations.
///
/// Clones share the navigation log, so a test can keep one handle while the
/// dispatcher owns another.
pub struct MemoryHostPage {
    user_agent: Option<String>,
    location_href: Option<String>,
    navigations: Rc<RefCell<Vec<String>>>,
}

impl MemoryHostPage {
    /// Returns an adapter scripted with the given user-agent and page URL.
    pub fn new(user_agent: impl Into<String>, location_href: impl Into<String>) -> Self {
        Self {
            user_agent: Some(user_agent.into()),
            location_href: Some(location_href.into()),
            navigations: Rc::default(),
        }
    }

    /// Returns the navigations recorded so far, in order.
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl HostPage for MemoryHostPage {
    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn location_href(&self) -> Option<String> {
        self.location_href.clone()
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }
}
