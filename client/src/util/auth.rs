//! View gate: choose between protected content and the login prompt.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through `AuthGate`, so the decision lives in
//! one pure function that tests can exercise without a browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

/// What a gated route should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    Protected,
    Login,
}

/// Depends on `is_logged_in` only.
pub fn gate_view(state: &AuthState) -> GateView {
    if state.is_logged_in { GateView::Protected } else { GateView::Login }
}
