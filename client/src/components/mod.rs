//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome, the auth gate, and ticket cards while
//! reading shared state from Leptos context providers.

pub mod app_bar;
pub mod auth_gate;
pub mod login_prompt;
pub mod ticket_actions;
pub mod ticket_card;
