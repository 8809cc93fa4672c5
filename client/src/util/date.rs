//! Ticket timestamp formatting.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Render the date part of an ISO timestamp as `DD/MM/YYYY`.
///
/// Only the first ten characters (`YYYY-MM-DD`) are used; the time part is
/// dropped. Shorter or unusual input is reordered on `-` as far as it goes.
pub fn format_ticket_date(created_at: &str) -> String {
    let date: String = created_at.chars().take(10).collect();
    let mut parts: Vec<&str> = date.split('-').collect();
    parts.reverse();
    parts.join("/")
}
