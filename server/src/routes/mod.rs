//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos SSR app together with a couple of plain endpoints. The
//! ticket API and the identity provider are separate services; this router
//! only hosts the moderation UI.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use nutripatrol_client::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

const ROBOTS_TXT: &str = "User-agent: *\nDisallow: /";

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Endpoints that do not depend on Leptos.
pub fn base_routes() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/robots.txt", get(robots_txt))
}

/// Full router: base endpoints plus Leptos SSR and static assets.
///
/// Unknown paths fall through to the Leptos file-and-error handler, which
/// serves files from the site root or renders the app's not-found page.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `[workspace.metadata.leptos]` and no `LEPTOS_*` environment).
pub fn leptos_app() -> Result<Router, RouterError> {
    let conf = get_configuration(None).map_err(|e| RouterError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    Ok(base_routes()
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn robots_txt() -> &'static str {
    ROBOTS_TXT
}
