//! Login prompt shown in place of protected content.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::session::sign_in_url;
use crate::state::auth::SessionRefresh;

/// Sends the moderator to the identity provider and lets them re-check once
/// they have signed in there.
#[component]
pub fn LoginPrompt() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let refresh = expect_context::<SessionRefresh>();
    let href = sign_in_url(&config.identity_url);

    view! {
        <div class="login-card">
            <h1>"Login"</h1>
            <p class="login-card__subtitle">
                "Sign in with your Open Food Facts account to moderate tickets."
            </p>
            <a class="btn btn--primary" href=href target="_blank" rel="noopener">
                "Sign in on Open Food Facts"
            </a>
            <button class="btn" on:click=move |_| refresh.request()>
                "I have signed in"
            </button>
        </div>
    }
}
