//! Moderation page listing open tickets.
//!
//! SYSTEM CONTEXT
//! ==============
//! The ticket list only mounts behind `AuthGate`, so tickets are requested
//! once a session has been verified and never for anonymous visitors.

#[cfg(test)]
#[path = "moderation_test.rs"]
mod moderation_test;

use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::components::ticket_card::TicketCard;
use crate::config::ClientConfig;
use crate::net::types::Ticket;
use crate::state::tickets::TicketsState;

pub(crate) fn empty_message(state: &TicketsState) -> Option<&'static str> {
    if state.loading || state.error.is_some() || !state.open_tickets().is_empty() {
        return None;
    }
    Some("No open tickets. Nice work!")
}

#[component]
pub fn ModerationPage() -> impl IntoView {
    view! {
        <div class="moderation-page">
            <AuthGate>
                <TicketList/>
            </AuthGate>
        </div>
    }
}

#[component]
fn TicketList() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let tickets = expect_context::<RwSignal<TicketsState>>();

    // Loading from the first render, so the empty message never flashes
    // before the fetch starts.
    tickets.update_untracked(TicketsState::begin_loading);
    let api_url = config.api_url;
    Effect::new(move || load_tickets(api_url.clone(), tickets));

    view! {
        <Show when=move || tickets.get().error.is_some()>
            <p class="moderation-page__error">{move || tickets.get().error.unwrap_or_default()}</p>
        </Show>
        <Show when=move || !tickets.get().loading fallback=|| view! { <p>"Loading tickets..."</p> }>
            <div class="ticket-stack">
                <For
                    each=move || tickets.get().open_tickets()
                    key=|ticket| ticket.id
                    children=|ticket: Ticket| view! { <TicketCard ticket=ticket/> }
                />
            </div>
            {move || empty_message(&tickets.get()).map(|msg| view! { <p class="moderation-page__empty">{msg}</p> })}
        </Show>
    }
}

fn load_tickets(api_url: String, tickets: RwSignal<TicketsState>) {
    tickets.update(TicketsState::begin_loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_tickets(&api_url).await;
        tickets.update(|s| {
            s.loading = false;
            match result {
                Ok(items) => s.items = items,
                Err(e) => {
                    log::error!("ticket fetch failed: {e}");
                    s.error = Some(format!("Could not load tickets: {e}"));
                }
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_url;
    }
}
