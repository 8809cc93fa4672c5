//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_bar::AppBar;
use crate::config::ClientConfig;
use crate::pages::{
    home::HomePage, login::LoginPage, moderation::ModerationPage, not_found::NotFoundPage,
};
use crate::state::auth::{AuthState, SessionRefresh};
use crate::state::tickets::TicketsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, auth, and ticket contexts, starts session reconciliation
/// in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::default());
    let refresh = SessionRefresh::new();
    let tickets = RwSignal::new(TicketsState::default());

    #[cfg(feature = "hydrate")]
    crate::session::browser::install(&config, auth, refresh);

    provide_context(config);
    provide_context(auth);
    provide_context(refresh);
    provide_context(tickets);

    view! {
        <Stylesheet id="leptos" href="/pkg/nutripatrol.css"/>
        <Title text="Nutripatrol"/>

        <Router>
            <div class="main-container">
                <AppBar/>
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("moderation") view=ModerationPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
