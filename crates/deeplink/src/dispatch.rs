//! Deep-link dispatch: configuration holder and the open/fallback race.

use std::{cell::RefCell, rc::Rc};

use crate::loader::UriLoader;
use crate::page::HostPage;
use crate::platform::{user_agent_is_firefox, Platform};
use crate::settings::{DeeplinkOptions, Settings};
use crate::timer::{FallbackAction, FallbackTimer};

/// Host seams injected into a [`Deeplink`] instance.
#[derive(Clone)]
pub struct HostBindings {
    /// Page environment reads and the top-level navigation side effect.
    pub page: Rc<dyn HostPage>,
    /// One-shot fallback scheduler.
    pub timer: Rc<dyn FallbackTimer>,
    /// Hidden URI loader.
    pub loader: Rc<dyn UriLoader>,
}

impl HostBindings {
    /// Inert bindings backed by the no-op adapters.
    pub fn noop() -> Self {
        Self {
            page: Rc::new(crate::page::NoopHostPage),
            timer: Rc::new(crate::timer::NoopFallbackTimer),
            loader: Rc::new(crate::loader::NoopUriLoader),
        }
    }
}

/// Typed failure raised by [`Deeplink::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The URI does not split as `scheme://rest`, which Android intent
    /// rewriting requires.
    MalformedUri {
        /// The rejected input URI.
        uri: String,
    },
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedUri { uri } => write!(f, "malformed deep-link uri: {uri}"),
        }
    }
}

impl std::error::Error for DispatchError {}

/// Deep-link dispatcher bound to one set of host seams.
///
/// Configure once with [`Deeplink::setup`], then dispatch per link with
/// [`Deeplink::open`]. Single-actor: settings are shared page-wide state with
/// no concurrent-writer protection.
pub struct Deeplink {
    bindings: HostBindings,
    settings: Rc<RefCell<Option<Settings>>>,
    disabled: bool,
}

impl Deeplink {
    /// Binds a dispatcher to the given host seams.
    pub fn new(bindings: HostBindings) -> Self {
        Self {
            bindings,
            settings: Rc::new(RefCell::new(None)),
            disabled: false,
        }
    }

    /// Returns a disabled dispatcher whose operations are inert.
    ///
    /// This is the posture for hosts with no page or user-agent access;
    /// construction never fails.
    pub fn disabled() -> Self {
        Self {
            bindings: HostBindings::noop(),
            settings: Rc::new(RefCell::new(None)),
            disabled: true,
        }
    }

    /// Returns whether this instance was constructed disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Merges `options` over the defaults and replaces all prior settings.
    ///
    /// The platform is detected here, exactly once per call, from the host
    /// user-agent. Must run before [`Deeplink::open`] for platform-specific
    /// dispatch behavior to apply.
    pub fn setup(&self, options: &DeeplinkOptions) {
        if self.disabled {
            return;
        }
        let user_agent = self.bindings.page.user_agent();
        let settings = Settings::from_options(options, user_agent.as_deref());
        *self.settings.borrow_mut() = Some(settings);
    }

    /// Returns a copy of the current settings, when setup has run.
    pub fn settings(&self) -> Option<Settings> {
        self.settings.borrow().clone()
    }

    /// Attempts to open `uri` in the native application, arming the web
    /// fallback according to the current settings.
    ///
    /// Returns `Ok(true)` when a dispatch attempt was made. The result is a
    /// best-effort signal, not confirmation that the application opened.
    /// Returns `Ok(false)` from the disabled posture and from the
    /// android-disabled early exit.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MalformedUri`] when Android intent rewriting
    /// applies and `uri` does not split as `scheme://rest`; no load is
    /// attempted in that case.
    pub fn open(&self, uri: &str) -> Result<bool, DispatchError> {
        if self.disabled {
            return Ok(false);
        }

        let mut guard = self.settings.borrow_mut();
        let Some(settings) = guard.as_mut() else {
            // Never configured: no platform knowledge and no fallback
            // configuration to honor. Best-effort load of the URI as given.
            self.bindings.loader.load(uri);
            return Ok(true);
        };

        let android = settings.platform == Platform::Android;
        if android && settings.android_disabled {
            return Ok(false);
        }

        if settings.cleared {
            // A prior dispatch already cancelled its fallback once;
            // re-trigger the fallback before attempting the app again.
            if let Some(link) = settings.web_link(self.bindings.page.as_ref()) {
                self.bindings.page.navigate(&link);
            }
        }

        let fallback = (settings.fallback || settings.fallback_to_web).then(|| {
            self.bindings
                .timer
                .schedule(settings.delay_ms, self.fallback_action())
        });

        let mut target = uri.to_string();
        let user_agent = self.bindings.page.user_agent();
        if android && !user_agent_is_firefox(user_agent.as_deref()) {
            if !settings.cleared {
                if let Some(handle) = fallback.as_deref() {
                    handle.cancel();
                }
                settings.cleared = true;
            }
            target = rewrite_intent_uri(uri, settings, self.bindings.page.as_ref())?;
        }

        self.bindings.loader.load(&target);
        Ok(true)
    }

    /// Builds the deferred fallback action: navigate to the web link resolved
    /// at fire time.
    fn fallback_action(&self) -> FallbackAction {
        let page = Rc::clone(&self.bindings.page);
        let settings = Rc::clone(&self.settings);
        Box::new(move || {
            let link = settings
                .borrow()
                .as_ref()
                .and_then(|settings| settings.web_link(page.as_ref()));
            if let Some(link) = link {
                page.navigate(&link);
            }
        })
    }
}

/// Rewrites a custom-scheme URI into Android's intent representation.
fn rewrite_intent_uri(
    uri: &str,
    settings: &Settings,
    page: &dyn HostPage,
) -> Result<String, DispatchError> {
    let malformed = || DispatchError::MalformedUri {
        uri: uri.to_string(),
    };
    let (scheme, rest) = uri.split_once("://").ok_or_else(malformed)?;
    if scheme.is_empty() || scheme.contains(':') || rest.is_empty() {
        return Err(malformed());
    }
    let fallback_url = settings.web_link(page).unwrap_or_default();
    Ok(format!(
        "intent://{rest}#Intent;scheme={scheme};package={};S.browser_fallback_url={fallback_url};end",
        settings.android_app_id
    ))
}
