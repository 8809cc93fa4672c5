//! Route guard rendering children only for a logged-in moderator.

use leptos::prelude::*;

use super::login_prompt::LoginPrompt;
use crate::state::auth::AuthState;
use crate::util::auth::{GateView, gate_view};

#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show
            when=move || gate_view(&auth.get()) == GateView::Protected
            fallback=|| view! { <LoginPrompt/> }
        >
            {children()}
        </Show>
    }
}
