//! REST helpers for the ticket API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): calls return `ApiError::Unavailable` since the ticket
//! list is only fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `ApiError`s instead of panics so a failing ticket API
//! shows a message on the page without breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Ticket, TicketStatus, TicketsResponse};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("ticket API returned status {status}")]
    Status { status: u16 },

    /// The response body did not match the ticket schema.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// HTTP is not available in this build (server render).
    #[error("not available on server")]
    Unavailable,
}

pub fn tickets_endpoint(api_url: &str) -> String {
    format!("{}/tickets", api_url.trim_end_matches('/'))
}

pub fn ticket_status_endpoint(api_url: &str, ticket_id: i64, status: TicketStatus) -> String {
    format!("{}/tickets/{ticket_id}/status?status={}", api_url.trim_end_matches('/'), status.as_str())
}

/// Link to the product editor for `barcode`.
pub fn product_edit_url(product_opener_url: &str, barcode: &str) -> String {
    format!("{}/cgi/product.pl?type=edit&code={barcode}", product_opener_url.trim_end_matches('/'))
}

/// Decode a `GET /tickets` body in either supported shape.
///
/// # Errors
///
/// Returns `ApiError::Decode` if the body is neither a ticket array nor a
/// `{"tickets": [...]}` object.
pub fn decode_tickets(body: &str) -> Result<Vec<Ticket>, ApiError> {
    serde_json::from_str::<TicketsResponse>(body)
        .map(TicketsResponse::into_tickets)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch every ticket from `GET {api_url}/tickets`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, the status is not 2xx, or the
/// body cannot be decoded.
pub async fn fetch_tickets(api_url: &str) -> Result<Vec<Ticket>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&tickets_endpoint(api_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_tickets(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_url;
        Err(ApiError::Unavailable)
    }
}

/// Move a ticket to `status` via `PUT {api_url}/tickets/{id}/status`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the status is not 2xx.
pub async fn update_ticket_status(api_url: &str, ticket_id: i64, status: TicketStatus) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&ticket_status_endpoint(api_url, ticket_id, status))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_url, ticket_id, status);
        Err(ApiError::Unavailable)
    }
}
