//! Identity-provider session check.
//!
//! ERROR HANDLING
//! ==============
//! The check never fails from the caller's point of view. Transport errors
//! and non-success statuses both collapse into `Verification::NotAuthenticated`
//! so an unverifiable session degrades to "logged out" instead of surfacing
//! an error in the shell.

#[cfg(test)]
#[path = "verifier_test.rs"]
mod verifier_test;

use std::future::Future;

/// Path of the provider's session-status endpoint, relative to its base URL.
pub const SESSION_STATUS_PATH: &str = "/cgi/auth.pl";

/// Outcome of a session check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    Authenticated,
    NotAuthenticated,
}

impl Verification {
    #[must_use]
    pub fn from_success(ok: bool) -> Self {
        if ok { Self::Authenticated } else { Self::NotAuthenticated }
    }
}

/// Asks the identity provider whether the ambient session is valid.
///
/// Implementations must not touch `AuthState`; the reconciler owns it.
pub trait SessionVerifier {
    fn verify(&self) -> impl Future<Output = Verification>;
}

/// Build the session-status URL for a provider base URL.
pub fn session_status_url(identity_url: &str) -> String {
    format!("{}{SESSION_STATUS_PATH}", identity_url.trim_end_matches('/'))
}

/// Credentialed HTTP check against the identity provider.
#[derive(Clone, Debug)]
pub struct HttpSessionVerifier {
    url: String,
}

impl HttpSessionVerifier {
    #[must_use]
    pub fn new(identity_url: &str) -> Self {
        Self { url: session_status_url(identity_url) }
    }
}

impl SessionVerifier for HttpSessionVerifier {
    fn verify(&self) -> impl Future<Output = Verification> {
        let url = self.url.clone();
        async move {
            #[cfg(feature = "hydrate")]
            {
                let result = gloo_net::http::Request::get(&url)
                    .credentials(web_sys::RequestCredentials::Include)
                    .send()
                    .await;
                match result {
                    Ok(resp) => {
                        if !resp.ok() {
                            log::debug!("session check rejected: status {}", resp.status());
                        }
                        Verification::from_success(resp.ok())
                    }
                    Err(e) => {
                        log::warn!("session check failed: {e}");
                        Verification::NotAuthenticated
                    }
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                // Server renders never carry the browser's provider cookie.
                let _ = url;
                Verification::NotAuthenticated
            }
        }
    }
}

/// Path of the provider's sign-in page, relative to its base URL.
pub const SIGN_IN_PATH: &str = "/cgi/session.pl";

/// Where the login prompt sends moderators to sign in.
pub fn sign_in_url(identity_url: &str) -> String {
    format!("{}{SIGN_IN_PATH}", identity_url.trim_end_matches('/'))
}
