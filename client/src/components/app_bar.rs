//! Top bar shown on every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits inside the router, so it is also where navigation triggers a session
//! refresh: each path change requests one, and the reconciler's cache makes
//! that free unless the cookie changed.

#[cfg(test)]
#[path = "app_bar_test.rs"]
mod app_bar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::auth::{AuthState, SessionRefresh};

/// Label for the signed-in moderator, `None` when logged out.
pub(crate) fn user_label(state: &AuthState) -> Option<String> {
    if !state.is_logged_in {
        return None;
    }
    Some(state.display_name().unwrap_or("moderator").to_owned())
}

#[component]
pub fn AppBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let refresh = expect_context::<SessionRefresh>();
    let location = use_location();

    Effect::new(move || {
        location.pathname.track();
        refresh.request();
    });

    view! {
        <header class="app-bar">
            <span class="app-bar__brand">
                <A href="/">"Nutripatrol"</A>
            </span>
            <nav class="app-bar__nav">
                <A href="/moderation">"Moderation"</A>
            </nav>
            <span class="app-bar__spacer"></span>
            <Show
                when=move || auth.get().is_logged_in
                fallback=|| view! { <span class="app-bar__login"><A href="/login">"Login"</A></span> }
            >
                <span class="app-bar__user">{move || user_label(&auth.get()).unwrap_or_default()}</span>
            </Show>
        </header>
    }
}
