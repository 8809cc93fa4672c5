use super::*;
use crate::net::types::TicketStatus;

fn open_ticket() -> Ticket {
    Ticket {
        id: 1,
        barcode: "123".to_owned(),
        url: String::new(),
        created_at: "2024-01-01".to_owned(),
        status: TicketStatus::Open,
        kind: None,
        image_id: None,
        flavour: None,
    }
}

#[test]
fn empty_message_when_nothing_is_open() {
    assert!(empty_message(&TicketsState::default()).is_some());
}

#[test]
fn no_empty_message_while_loading_or_failed() {
    let loading = TicketsState { loading: true, ..TicketsState::default() };
    assert!(empty_message(&loading).is_none());
    let failed = TicketsState { error: Some("boom".to_owned()), ..TicketsState::default() };
    assert!(empty_message(&failed).is_none());
}

#[test]
fn no_empty_message_once_a_fetch_begins() {
    let mut state = TicketsState::default();
    state.begin_loading();
    assert!(empty_message(&state).is_none());
}

#[test]
fn no_empty_message_with_open_tickets() {
    let state = TicketsState { items: vec![open_ticket()], ..TicketsState::default() };
    assert!(empty_message(&state).is_none());
}
