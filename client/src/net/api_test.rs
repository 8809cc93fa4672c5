use super::*;

#[test]
fn tickets_endpoint_formats_expected_path() {
    assert_eq!(tickets_endpoint("https://api.example.test/api/v1"), "https://api.example.test/api/v1/tickets");
    assert_eq!(tickets_endpoint("https://api.example.test/"), "https://api.example.test/tickets");
}

#[test]
fn ticket_status_endpoint_includes_status_query() {
    assert_eq!(
        ticket_status_endpoint("http://localhost:8000", 42, TicketStatus::Closed),
        "http://localhost:8000/tickets/42/status?status=closed"
    );
    assert_eq!(
        ticket_status_endpoint("http://localhost:8000", 3, TicketStatus::Archived),
        "http://localhost:8000/tickets/3/status?status=archived"
    );
}

#[test]
fn product_edit_url_targets_product_editor() {
    assert_eq!(
        product_edit_url("https://world.openfoodfacts.org/", "3274080005003"),
        "https://world.openfoodfacts.org/cgi/product.pl?type=edit&code=3274080005003"
    );
}

#[test]
fn decode_tickets_rejects_garbage() {
    let err = decode_tickets(r#"{"items": []}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_tickets_empty_array() {
    assert!(decode_tickets("[]").unwrap().is_empty());
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status { status: 502 }.to_string(), "ticket API returned status 502");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_tickets_is_unavailable_on_server() {
    let result = futures::executor::block_on(fetch_tickets("http://localhost:8000"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
