//! Ticket action buttons: edit the product, close, or archive.
//!
//! ERROR HANDLING
//! ==============
//! A failed status update leaves the page as is and reports the error through
//! `TicketsState::error`; only a successful update reloads the page.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::product_edit_url;
use crate::net::types::TicketStatus;
use crate::state::tickets::TicketsState;

/// Opens the product editor in a new tab.
#[component]
pub fn EditLink(barcode: String) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let href = product_edit_url(&config.product_opener_url, &barcode);

    view! {
        <a class="btn btn--primary" href=href target="_blank" rel="noopener">
            "Edit"
        </a>
    }
}

/// Moves a ticket to `status` and reloads the page on success.
#[component]
pub fn StatusButton(ticket_id: i64, status: TicketStatus, label: &'static str, class: &'static str) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let tickets = expect_context::<RwSignal<TicketsState>>();
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api_url = config.api_url.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_ticket_status(&api_url, ticket_id, status).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }
                    Err(e) => {
                        log::error!("ticket {ticket_id} -> {}: {e}", status.as_str());
                        tickets.update(|t| t.error = Some(format!("Could not update ticket {ticket_id}: {e}")));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, tickets, ticket_id, status);
        }
    };

    view! {
        <button class=class on:click=on_click disabled=move || busy.get()>
            {label}
        </button>
    }
}
