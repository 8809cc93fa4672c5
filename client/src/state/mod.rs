//! Client state modules shared through Leptos context.
//!
//! DESIGN
//! ======
//! `auth` is written only by the session reconciler; `tickets` belongs to
//! the moderation page.

pub mod auth;
pub mod tickets;
