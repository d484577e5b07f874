//! Platform classification from the host user-agent string.

/// Mobile platform classification derived exactly once at setup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Android user-agent signature.
    Android,
    /// iPad/iPhone/iPod user-agent signature.
    Ios,
    /// Any other environment, including desktop browsers.
    Other,
}

impl Platform {
    /// Classifies a user-agent string.
    ///
    /// Android wins over iOS when both signatures appear; absent input
    /// classifies as [`Platform::Other`].
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        let Some(ua) = user_agent else {
            return Self::Other;
        };
        if ua.contains("Android") {
            Self::Android
        } else if ua.contains("iPad") || ua.contains("iPhone") || ua.contains("iPod") {
            Self::Ios
        } else {
            Self::Other
        }
    }

    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Other => "other",
        }
    }

    /// Returns whether this is a mobile platform.
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Android | Self::Ios)
    }
}

/// Returns whether the user-agent identifies a Firefox-based browser.
///
/// Android intent rewriting is gated on this: Firefox on Android does not
/// honor the intent URI form.
pub fn user_agent_is_firefox(user_agent: Option<&str>) -> bool {
    user_agent.is_some_and(|ua| ua.contains("Firefox"))
}
