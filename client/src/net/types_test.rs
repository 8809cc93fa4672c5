use super::*;

const TICKET_JSON: &str = r#"{
    "id": 7,
    "barcode": "3274080005003",
    "url": "https://images.openfoodfacts.net/images/products/327/408/000/5003/1.400.jpg",
    "created_at": "2024-03-05T10:20:30",
    "status": "open",
    "type": "image",
    "image_id": "1",
    "flavour": "off"
}"#;

#[test]
fn ticket_decodes_all_fields() {
    let ticket: Ticket = serde_json::from_str(TICKET_JSON).unwrap();
    assert_eq!(ticket.id, 7);
    assert_eq!(ticket.barcode, "3274080005003");
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.kind.as_deref(), Some("image"));
    assert_eq!(ticket.image_id.as_deref(), Some("1"));
    assert!(ticket.is_open());
}

#[test]
fn ticket_optional_columns_default_to_none() {
    let json = r#"{"id":1,"barcode":"123","url":"u","created_at":"2024-01-01","status":"closed"}"#;
    let ticket: Ticket = serde_json::from_str(json).unwrap();
    assert!(ticket.kind.is_none());
    assert!(ticket.flavour.is_none());
    assert!(!ticket.is_open());
}

#[test]
fn unknown_status_decodes_as_other() {
    let json = r#"{"id":1,"barcode":"123","url":"u","created_at":"2024-01-01","status":"escalated"}"#;
    let ticket: Ticket = serde_json::from_str(json).unwrap();
    assert_eq!(ticket.status, TicketStatus::Other);
}

#[test]
fn status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&TicketStatus::Archived).unwrap(), r#""archived""#);
    assert_eq!(TicketStatus::Closed.as_str(), "closed");
}

#[test]
fn tickets_response_accepts_bare_array() {
    let json = format!("[{TICKET_JSON}]");
    let resp: TicketsResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.into_tickets().len(), 1);
}

#[test]
fn tickets_response_accepts_wrapped_object() {
    let json = format!(r#"{{"tickets":[{TICKET_JSON},{TICKET_JSON}]}}"#);
    let resp: TicketsResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.into_tickets().len(), 2);
}
