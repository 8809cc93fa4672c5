//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Produced only by `session::reconciler::SessionReconciler`; read by the
//! view gate, the app bar, and any page that needs the moderator's name.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

/// Snapshot of the derived login state.
///
/// Snapshots are replaced wholesale on every completed refresh. Consumers
/// receive copies through a context-provided `RwSignal<AuthState>` and never
/// build their own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user_name: String,
    pub is_logged_in: bool,
}

impl AuthState {
    /// The start-of-session state: not logged in, no username.
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// A verified session for `user_name` (may be empty for malformed cookies).
    #[must_use]
    pub fn logged_in(user_name: impl Into<String>) -> Self {
        Self { user_name: user_name.into(), is_logged_in: true }
    }

    /// Name to show in the UI, if any.
    pub fn display_name(&self) -> Option<&str> {
        if self.is_logged_in && !self.user_name.is_empty() { Some(&self.user_name) } else { None }
    }
}

/// Request handle for session refreshes, provided via context.
///
/// Components call `request` on mount, on navigation, or from a "check
/// again" button; the browser wiring in `session::browser` reacts to it.
#[derive(Clone, Copy, Debug)]
pub struct SessionRefresh(RwSignal<u64>);

impl SessionRefresh {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    pub fn request(self) {
        self.0.update(|n| *n = n.wrapping_add(1));
    }

    /// Subscribe the current reactive scope to refresh requests.
    pub fn track(self) {
        self.0.track();
    }
}

impl Default for SessionRefresh {
    fn default() -> Self {
        Self::new()
    }
}
