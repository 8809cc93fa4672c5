//! Session cookie access and username extraction.
//!
//! The identity provider encodes its session as `&`-joined tokens, e.g.
//! `user_id&alice&user_session&abc123`. The token following `user_id` is
//! the username.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Name of the cookie set by the identity provider.
pub const SESSION_COOKIE: &str = "session";

const USER_ID_TOKEN: &str = "user_id";

/// Return the value of cookie `name` from a raw `Cookie` header string.
///
/// Entries are split on `;` and trimmed; the first entry starting with
/// `{name}=` wins. Absence yields an empty string.
pub fn read_cookie(header: &str, name: &str) -> String {
    let prefix = format!("{name}=");
    header
        .split(';')
        .map(str::trim)
        .find(|entry| entry.starts_with(&prefix))
        .map(|entry| {
            // The value stops at a second `=`.
            let value = &entry[prefix.len()..];
            value.split('=').next().unwrap_or_default().to_owned()
        })
        .unwrap_or_default()
}

/// Extract the username from a session cookie value.
///
/// Returns the token immediately following the first exact `user_id` token,
/// or an empty string if there is none.
pub fn extract_username(cookie_value: &str) -> String {
    if cookie_value.is_empty() {
        return String::new();
    }

    let mut tokens = cookie_value.split('&');
    while let Some(token) = tokens.next() {
        if token == USER_ID_TOKEN {
            return tokens.next().unwrap_or_default().to_owned();
        }
    }
    String::new()
}

/// Read access to an ambient cookie store.
pub trait CookieSource {
    /// The full raw cookie header (`a=1; b=2`).
    fn cookie_header(&self) -> String;

    /// Value of cookie `name`, or empty if absent.
    fn read(&self, name: &str) -> String {
        read_cookie(&self.cookie_header(), name)
    }
}

/// `document.cookie` in the browser. Always empty during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl CookieSource for BrowserCookies {
    fn cookie_header(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
                .and_then(|doc| doc.cookie().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }
}
