//! # nutripatrol-client
//!
//! Leptos + WASM front end for Nutripatrol, the Open Food Facts moderation
//! tool. Lists flagged-product tickets, lets moderators close or archive
//! them, and gates the moderation view behind the Open Food Facts session.
//!
//! The `session` module holds the login reconciliation core and has no UI
//! dependencies; everything else is pages, components, and shared state.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
