//! Browser-side session wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the app's only `SessionReconciler`. Every bump of the refresh
//! counter runs one `refresh` and mirrors the resulting snapshot into the
//! context `RwSignal<AuthState>` that the view gate reads.

use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;

use super::{BrowserCookies, HttpSessionVerifier, ReconcilerOptions, SessionReconciler};
use crate::config::ClientConfig;
use crate::state::auth::{AuthState, SessionRefresh};

type BrowserReconciler = SessionReconciler<BrowserCookies, HttpSessionVerifier>;

/// Start reconciling the session for the lifetime of the current owner.
pub fn install(config: &ClientConfig, auth: RwSignal<AuthState>, refresh: SessionRefresh) {
    let options = ReconcilerOptions { always_logged_in: config.dev_always_logged_in };
    if options.always_logged_in {
        log::warn!("development override active: session is always logged in");
    }
    let reconciler: Rc<BrowserReconciler> =
        Rc::new(SessionReconciler::new(BrowserCookies, HttpSessionVerifier::new(&config.identity_url), options));

    let on_request = Rc::clone(&reconciler);
    Effect::new(move || {
        refresh.track();
        let reconciler = Rc::clone(&on_request);
        leptos::task::spawn_local(async move {
            reconciler.refresh().await;
            let state = reconciler.state();
            if auth.get_untracked() != state {
                auth.set(state);
            }
        });
    });

    if config.recheck_interval_secs > 0 {
        let interval = Duration::from_secs(config.recheck_interval_secs);
        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(interval).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                reconciler.expire();
                refresh.request();
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
}
