//! Configuration options, defaults, and the merged settings record.

use serde::{Deserialize, Serialize};

use crate::page::HostPage;
use crate::platform::Platform;

/// Default Android package injected into rewritten intent URIs.
pub const DEFAULT_ANDROID_APP_ID: &str = "com.grabtaxi.passenger";

/// Default web fallback URL.
pub const DEFAULT_FALLBACK_WEB_URL: &str = "https://www.grab.com";

/// Default fallback delay in milliseconds.
pub const DEFAULT_DELAY_MS: u32 = 700;

/// Android-specific option block (`android.appId`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidOptions {
    /// Package name injected into rewritten intent URIs.
    #[serde(default)]
    pub app_id: Option<String>,
}

/// Partial caller-supplied configuration merged over the defaults by
/// [`crate::Deeplink::setup`].
///
/// Every absent key keeps its default. Unrecognized keys in serialized input
/// are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeeplinkOptions {
    /// Android option block.
    #[serde(default)]
    pub android: Option<AndroidOptions>,
    /// Disables dispatch entirely when the platform is Android.
    #[serde(default)]
    pub android_disabled: Option<bool>,
    /// Enables the fallback timer.
    #[serde(default)]
    pub fallback: Option<bool>,
    /// Enables the web-fallback timer.
    #[serde(default)]
    pub fallback_to_web: Option<bool>,
    /// Web URL the fallback navigates to. An empty string means "unset",
    /// deferring to the current page URL at use time.
    #[serde(default)]
    pub fallback_web_url: Option<String>,
    /// Fallback delay in milliseconds.
    #[serde(default)]
    pub delay: Option<u32>,
}

impl DeeplinkOptions {
    /// Parses options from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }
}

/// Immutable-after-setup dispatch configuration.
///
/// Built wholesale by each [`crate::Deeplink::setup`] call; never partially
/// updated across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Platform detected once at setup time; never recomputed.
    pub platform: Platform,
    /// Android package for intent rewriting.
    pub android_app_id: String,
    /// Disables dispatch entirely when the platform is Android.
    pub android_disabled: bool,
    /// Enables the fallback timer.
    pub fallback: bool,
    /// Enables the web-fallback timer.
    pub fallback_to_web: bool,
    /// Web URL the fallback navigates to; `None` defers to the current page
    /// URL at use time.
    pub fallback_web_url: Option<String>,
    /// Fallback delay in milliseconds.
    pub delay_ms: u32,
    /// Tracks that a fallback timer was already cancelled once under this
    /// configuration; a later dispatch re-triggers the fallback up front.
    pub(crate) cleared: bool,
}

impl Settings {
    /// Merges `options` over the defaults and stamps the platform detected
    /// from `user_agent`.
    pub fn from_options(options: &DeeplinkOptions, user_agent: Option<&str>) -> Self {
        let android_app_id = options
            .android
            .as_ref()
            .and_then(|android| android.app_id.clone())
            .unwrap_or_else(|| DEFAULT_ANDROID_APP_ID.to_string());
        let fallback_web_url = match options.fallback_web_url.as_deref() {
            Some("") => None,
            Some(url) => Some(url.to_string()),
            None => Some(DEFAULT_FALLBACK_WEB_URL.to_string()),
        };
        Self {
            platform: Platform::from_user_agent(user_agent),
            android_app_id,
            android_disabled: options.android_disabled.unwrap_or(false),
            fallback: options.fallback.unwrap_or(true),
            fallback_to_web: options.fallback_to_web.unwrap_or(true),
            fallback_web_url,
            delay_ms: options.delay.unwrap_or(DEFAULT_DELAY_MS),
            cleared: false,
        }
    }

    /// Resolves the web fallback link, deferring to the current page URL when
    /// no URL is configured.
    pub fn web_link(&self, page: &dyn HostPage) -> Option<String> {
        self.fallback_web_url
            .clone()
            .or_else(|| page.location_href())
    }
}

#[cfg(test)]
mod tests {
    use crate::page::{MemoryHostPage, NoopHostPage};

    use super::*;

    #[test]
    fn defaults_apply_when_no_options_are_given() {
        let settings = Settings::from_options(&DeeplinkOptions::default(), None);
        assert_eq!(settings.platform, Platform::Other);
        assert_eq!(settings.android_app_id, DEFAULT_ANDROID_APP_ID);
        assert!(!settings.android_disabled);
        assert!(settings.fallback);
        assert!(settings.fallback_to_web);
        assert_eq!(
            settings.fallback_web_url.as_deref(),
            Some(DEFAULT_FALLBACK_WEB_URL)
        );
        assert_eq!(settings.delay_ms, DEFAULT_DELAY_MS);
        assert!(!settings.cleared);
    }

    #[test]
    fn present_keys_override_defaults_and_absent_keys_keep_them() {
        let options = DeeplinkOptions {
            android: Some(AndroidOptions {
                app_id: Some("com.example.app".to_string()),
            }),
            fallback: Some(false),
            delay: Some(250),
            ..DeeplinkOptions::default()
        };
        let settings = Settings::from_options(&options, None);
        assert_eq!(settings.android_app_id, "com.example.app");
        assert!(!settings.fallback);
        assert_eq!(settings.delay_ms, 250);
        // untouched keys keep defaults
        assert!(settings.fallback_to_web);
        assert!(!settings.android_disabled);
        assert_eq!(
            settings.fallback_web_url.as_deref(),
            Some(DEFAULT_FALLBACK_WEB_URL)
        );
    }

    #[test]
    fn merge_is_idempotent_across_calls() {
        let options = DeeplinkOptions {
            android_disabled: Some(true),
            fallback_web_url: Some("https://example.com".to_string()),
            ..DeeplinkOptions::default()
        };
        let first = Settings::from_options(&options, Some("Android"));
        let second = Settings::from_options(&options, Some("Android"));
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_json_keys_are_ignored() {
        let options = DeeplinkOptions::from_json(
            r#"{"delay": 300, "ios": {"storeUrl": "x"}, "analytics": true}"#,
        )
        .expect("parse options");
        assert_eq!(options.delay, Some(300));
        assert_eq!(options.android, None);
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(DeeplinkOptions::from_json("{delay}").is_err());
    }

    #[test]
    fn empty_fallback_web_url_defers_to_page_location() {
        let options = DeeplinkOptions {
            fallback_web_url: Some(String::new()),
            ..DeeplinkOptions::default()
        };
        let settings = Settings::from_options(&options, None);
        assert_eq!(settings.fallback_web_url, None);

        let page = MemoryHostPage::new("ua", "https://landing.example/download");
        assert_eq!(
            settings.web_link(&page).as_deref(),
            Some("https://landing.example/download")
        );
        assert_eq!(settings.web_link(&NoopHostPage), None);
    }

    #[test]
    fn configured_fallback_web_url_wins_over_page_location() {
        let settings = Settings::from_options(&DeeplinkOptions::default(), None);
        let page = MemoryHostPage::new("ua", "https://landing.example/download");
        assert_eq!(
            settings.web_link(&page).as_deref(),
            Some(DEFAULT_FALLBACK_WEB_URL)
        );
    }
}
