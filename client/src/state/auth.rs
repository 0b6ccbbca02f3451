//! Admin session state as seen by the UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session flag lives in browser storage, which the server cannot read.
//! Every render therefore starts in `loading` and the flag is read once the
//! app has hydrated; route guards wait for that before redirecting.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use content::session::{RouteAccess, SessionState, route_access};

/// Session flag plus whether it has been read yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: SessionState,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: SessionState::LoggedOut, loading: true }
    }
}

impl AuthState {
    pub fn resolved(session: SessionState) -> Self {
        Self { session, loading: false }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session == SessionState::LoggedIn
    }

    /// Redirect target for `path`, or `None` to render it. Never redirects
    /// before the flag has been read.
    pub fn redirect_for(&self, path: &str) -> Option<&'static str> {
        if self.loading {
            return None;
        }
        match route_access(path, self.is_logged_in()) {
            RouteAccess::Allow => None,
            RouteAccess::Redirect(to) => Some(to),
        }
    }
}
