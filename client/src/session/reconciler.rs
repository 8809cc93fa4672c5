//! Derives `AuthState` from the session cookie.
//!
//! DESIGN
//! ======
//! The reconciler is the single writer of the auth snapshot. It remembers the
//! cookie value the current snapshot was computed for; a refresh that reads
//! the same value again returns the cached answer without asking the identity
//! provider. The remembered cookie and the snapshot are stored in one cell and
//! always replaced together.
//!
//! CONCURRENCY
//! ===========
//! Refreshes are serialized through an async mutex. A second caller waits for
//! the in-flight refresh and then normally hits the cache, so one cookie
//! change costs exactly one provider call. Serialization also means a slow
//! verification can never land after a newer cookie has been processed.
//!
//! TRADE-OFFS
//! ==========
//! A cookie the provider has revoked keeps reading as logged in until the
//! cookie itself changes or the cache entry is expired with `expire`.

#[cfg(test)]
#[path = "reconciler_test.rs"]
mod reconciler_test;

use std::cell::{Cell, RefCell};

use futures::lock::Mutex;

use super::cookie::{CookieSource, SESSION_COOKIE, extract_username};
use super::verifier::{SessionVerifier, Verification};
use crate::state::auth::AuthState;

/// Behavior switches for a reconciler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcilerOptions {
    /// Development override: every refresh yields a logged-in state without
    /// calling the provider.
    pub always_logged_in: bool,
}

/// Last processed cookie paired with the snapshot derived from it.
#[derive(Debug, Default)]
struct CachedSession {
    /// `None` until the first refresh completes.
    last_seen: Option<String>,
    state: AuthState,
    expired: bool,
}

impl CachedSession {
    fn hit(&self, cookie: &str) -> Option<&AuthState> {
        match &self.last_seen {
            Some(seen) if !self.expired && seen == cookie => Some(&self.state),
            _ => None,
        }
    }
}

/// Orchestrates cookie reads, caching, and provider checks.
pub struct SessionReconciler<C, V> {
    cookies: C,
    verifier: V,
    options: ReconcilerOptions,
    cache: RefCell<CachedSession>,
    /// Bumped by every `expire`, so an expiry during a verification survives
    /// that verification's commit.
    expirations: Cell<u64>,
    in_flight: Mutex<()>,
}

impl<C, V> SessionReconciler<C, V>
where
    C: CookieSource,
    V: SessionVerifier,
{
    pub fn new(cookies: C, verifier: V, options: ReconcilerOptions) -> Self {
        Self {
            cookies,
            verifier,
            options,
            cache: RefCell::new(CachedSession::default()),
            expirations: Cell::new(0),
            in_flight: Mutex::new(()),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> AuthState {
        self.cache.borrow().state.clone()
    }

    /// Force the next refresh to re-verify even if the cookie is unchanged.
    ///
    /// The snapshot is left as is until that refresh completes.
    pub fn expire(&self) {
        self.expirations.set(self.expirations.get().wrapping_add(1));
        self.cache.borrow_mut().expired = true;
    }

    /// Re-derive the auth state from the current cookie.
    ///
    /// Returns the resulting `is_logged_in`. Never fails.
    pub async fn refresh(&self) -> bool {
        let _guard = self.in_flight.lock().await;

        let cookie = self.cookies.read(SESSION_COOKIE);
        let expirations = self.expirations.get();
        if let Some(state) = self.cache.borrow().hit(&cookie) {
            log::trace!("session cookie unchanged, reusing auth state");
            return state.is_logged_in;
        }

        let state = if self.options.always_logged_in {
            AuthState::logged_in("")
        } else if cookie.is_empty() {
            AuthState::logged_out()
        } else {
            match self.verifier.verify().await {
                Verification::Authenticated => AuthState::logged_in(extract_username(&cookie)),
                Verification::NotAuthenticated => AuthState::logged_out(),
            }
        };

        self.commit(cookie, state, expirations)
    }

    fn commit(&self, cookie: String, state: AuthState, expirations: u64) -> bool {
        let mut cache = self.cache.borrow_mut();
        if cache.state != state {
            log::info!("auth state changed: logged_in={} user={:?}", state.is_logged_in, state.user_name);
        }
        let logged_in = state.is_logged_in;
        *cache = CachedSession { last_seen: Some(cookie), state, expired: self.expirations.get() != expirations };
        logged_in
    }
}
