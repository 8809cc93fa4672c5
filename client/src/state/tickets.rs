//! Ticket-list state for the moderation page.

#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;

use crate::net::types::Ticket;

/// Tickets fetched from the API plus request status.
#[derive(Clone, Debug, Default)]
pub struct TicketsState {
    pub items: Vec<Ticket>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TicketsState {
    /// Mark a fetch as started and clear the previous error.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Tickets still awaiting a moderator.
    pub fn open_tickets(&self) -> Vec<Ticket> {
        self.items.iter().filter(|t| t.is_open()).cloned().collect()
    }
}
