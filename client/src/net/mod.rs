//! Networking modules for the ticket API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoints and performs REST calls, `types` defines the ticket
//! wire schema. The identity-provider check lives in `session::verifier`.

pub mod api;
pub mod types;
