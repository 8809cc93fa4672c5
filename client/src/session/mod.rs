//! Session reconciliation against the external identity provider.
//!
//! ARCHITECTURE
//! ============
//! `cookie` reads the provider's session cookie, `verifier` asks the
//! provider whether that session is still valid, and `reconciler` combines
//! both behind a cache so repeated refreshes with an unchanged cookie never
//! hit the network. `browser` wires a reconciler into the running app.
//!
//! ERROR HANDLING
//! ==============
//! Every path is total: absent cookies, malformed values and failed checks
//! all end in a logged-out `AuthState`, never in an error value.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod cookie;
pub mod reconciler;
pub mod verifier;

pub use cookie::{BrowserCookies, CookieSource, SESSION_COOKIE, extract_username, read_cookie};
pub use reconciler::{ReconcilerOptions, SessionReconciler};
pub use verifier::{HttpSessionVerifier, SessionVerifier, Verification, sign_in_url};
