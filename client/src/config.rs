//! Client configuration baked in at compile time.
//!
//! Values come from `NUTRIPATROL_*` environment variables read with
//! `option_env!` when the WASM bundle is built, so the browser never needs a
//! config round-trip. `from_lookup` holds the parsing so tests can feed
//! values directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_IDENTITY_URL: &str = "https://world.openfoodfacts.net";
pub const DEFAULT_PRODUCT_OPENER_URL: &str = "https://world.openfoodfacts.net";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Ticket API base URL.
    pub api_url: String,
    /// Identity provider base URL (session check and sign-in page).
    pub identity_url: String,
    /// Product Opener base URL used for "Edit" links.
    pub product_opener_url: String,
    /// Development override forcing a logged-in state.
    pub dev_always_logged_in: bool,
    /// Seconds between forced session re-checks. `0` disables them.
    pub recheck_interval_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            identity_url: DEFAULT_IDENTITY_URL.to_owned(),
            product_opener_url: DEFAULT_PRODUCT_OPENER_URL.to_owned(),
            dev_always_logged_in: false,
            recheck_interval_secs: 0,
        }
    }
}

impl ClientConfig {
    /// Configuration captured from the build environment.
    ///
    /// Recognized variables:
    /// - `NUTRIPATROL_API_URL`
    /// - `NUTRIPATROL_IDENTITY_URL`
    /// - `NUTRIPATROL_PO_URL`
    /// - `NUTRIPATROL_DEV_LOGGED_IN`: `1|true|yes|on` to force login
    /// - `NUTRIPATROL_RECHECK_SECS`: re-check interval, default 0
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "NUTRIPATROL_API_URL" => option_env!("NUTRIPATROL_API_URL"),
                "NUTRIPATROL_IDENTITY_URL" => option_env!("NUTRIPATROL_IDENTITY_URL"),
                "NUTRIPATROL_PO_URL" => option_env!("NUTRIPATROL_PO_URL"),
                "NUTRIPATROL_DEV_LOGGED_IN" => option_env!("NUTRIPATROL_DEV_LOGGED_IN"),
                "NUTRIPATROL_RECHECK_SECS" => option_env!("NUTRIPATROL_RECHECK_SECS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build a config from an arbitrary key lookup. Unset or unparsable
    /// values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let url = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().trim_end_matches('/').to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        let dev_always_logged_in = match lookup("NUTRIPATROL_DEV_LOGGED_IN") {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                log::warn!("ignoring NUTRIPATROL_DEV_LOGGED_IN={raw:?}");
                defaults.dev_always_logged_in
            }),
            None => defaults.dev_always_logged_in,
        };
        let recheck_interval_secs = match lookup("NUTRIPATROL_RECHECK_SECS") {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                log::warn!("ignoring NUTRIPATROL_RECHECK_SECS={raw:?}");
                defaults.recheck_interval_secs
            }),
            None => defaults.recheck_interval_secs,
        };

        Self {
            api_url: url("NUTRIPATROL_API_URL", defaults.api_url),
            identity_url: url("NUTRIPATROL_IDENTITY_URL", defaults.identity_url),
            product_opener_url: url("NUTRIPATROL_PO_URL", defaults.product_opener_url),
            dev_always_logged_in,
            recheck_interval_secs,
        }
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
