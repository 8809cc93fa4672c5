//! Ticket wire types shared with the moderation API.
//!
//! DESIGN
//! ======
//! Only `id`, `barcode`, `url`, `created_at` and `status` are needed to
//! render a ticket. The remaining columns are optional so older or trimmed
//! API responses still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Moderation status of a ticket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    Open,
    Closed,
    Archived,
    /// Any status this client does not know about.
    #[serde(other)]
    Other,
}

impl TicketStatus {
    /// Query-string form used by the status endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Archived => "archived",
            Self::Other => "other",
        }
    }
}

/// A flagged product awaiting moderation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub barcode: String,
    /// Image or product URL shown on the ticket card.
    pub url: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    pub status: TicketStatus,
    /// Kind of issue (`image`, `product`, `search`, ...).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub flavour: Option<String>,
}

impl Ticket {
    pub fn is_open(&self) -> bool {
        self.status == TicketStatus::Open
    }
}

/// `GET /tickets` body. The API has served both a bare array and a wrapped
/// `{"tickets": [...]}` object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TicketsResponse {
    Wrapped { tickets: Vec<Ticket> },
    Bare(Vec<Ticket>),
}

impl TicketsResponse {
    pub fn into_tickets(self) -> Vec<Ticket> {
        match self {
            Self::Wrapped { tickets } | Self::Bare(tickets) => tickets,
        }
    }
}
