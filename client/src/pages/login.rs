//! Login page: the sign-in prompt, or a confirmation once signed in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::login_prompt::LoginPrompt;
use crate::state::auth::AuthState;

pub(crate) fn signed_in_message(state: &AuthState) -> String {
    match state.display_name() {
        Some(name) => format!("You are signed in as {name}."),
        None => "You are signed in.".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="login-page">
            <Show when=move || auth.get().is_logged_in fallback=|| view! { <LoginPrompt/> }>
                <div class="login-card">
                    <h1>"Signed in"</h1>
                    <p class="login-card__subtitle">{move || signed_in_message(&auth.get())}</p>
                    <A href="/moderation">"Go to moderation"</A>
                </div>
            </Show>
        </div>
    }
}
