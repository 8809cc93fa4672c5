//! Card for a single open ticket.

use leptos::prelude::*;

use super::ticket_actions::{EditLink, StatusButton};
use crate::net::types::{Ticket, TicketStatus};
use crate::util::date::format_ticket_date;

#[component]
pub fn TicketCard(ticket: Ticket) -> impl IntoView {
    let date = format_ticket_date(&ticket.created_at);

    view! {
        <article class="ticket-card">
            <img class="ticket-card__image" src=ticket.url.clone() alt=ticket.barcode.clone() width="100" height="100"/>
            <p class="ticket-card__date">{date}</p>
            <div class="ticket-card__actions">
                <EditLink barcode=ticket.barcode.clone()/>
                <StatusButton
                    ticket_id=ticket.id
                    status=TicketStatus::Closed
                    label="No problem"
                    class="btn btn--danger"
                />
                <StatusButton
                    ticket_id=ticket.id
                    status=TicketStatus::Archived
                    label="Archive"
                    class="btn"
                />
            </div>
        </article>
    }
}
