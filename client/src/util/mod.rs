//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers kept out of components so they can be tested without a
//! browser.

pub mod auth;
pub mod date;
