//! Fallback page for unknown routes. Rendered regardless of auth state.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h2>"404"</h2>
            <h3>"🇫🇷 Page inexistante"</h3>
            <h3>"🇺🇸 / 🇬🇧 Page not found"</h3>
        </div>
    }
}
