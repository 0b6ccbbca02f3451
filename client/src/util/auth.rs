//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, logout and the admin route guard all go through one
//! [`SessionGate`] bound to browser storage, so every page agrees on the flag.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use content::session::SessionGate;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::storage::BrowserStorage;
use crate::state::auth::AuthState;

pub type BrowserGate = SessionGate<BrowserStorage>;

pub fn session_gate() -> BrowserGate {
    SessionGate::new(BrowserStorage)
}

/// Read the session flag once hydrated. Effects never run during server
/// rendering, so SSR output always shows the loading state.
pub fn install_session_loader(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        auth.set(AuthState::resolved(session_gate().state()));
    });
}

/// Navigate away from `path` whenever the resolved session forbids it.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(to) = auth.get().redirect_for(path) {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
