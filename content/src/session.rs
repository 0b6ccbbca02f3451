//! Admin session gate.
//!
//! ARCHITECTURE
//! ============
//! Login is a credential check plus a flag in client storage. The check sits
//! behind [`CredentialVerifier`] so a delegated verifier can replace the
//! built-in pair without touching the login page or the route guard.
//!
//! TRADE-OFFS
//! ==========
//! The flag is unsigned and never expires. Anyone who can write to the
//! browser's storage can open the admin view; the panel only ever edits
//! data held in that same browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::storage::KeyValueStore;
use crate::{Error, Result};

/// Storage key holding the session flag.
pub const SESSION_KEY: &str = "isAdminLoggedIn";
const SESSION_VALUE: &str = "true";

const ADMIN_EMAIL: &str = "Kyim@dev.org";
const ADMIN_PASSWORD: &str = "5EEC3488";

/// Route that requires the session flag.
pub const ADMIN_ROUTE: &str = "/admin";
/// Where unauthenticated visitors to [`ADMIN_ROUTE`] are sent.
pub const LOGIN_ROUTE: &str = "/login";

/// Decides whether an email/password pair may open the admin view.
pub trait CredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// Exact-match check against one fixed pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticCredentials {
    email: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(ADMIN_EMAIL, ADMIN_PASSWORD)
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.password
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Outcome of the route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    Redirect(&'static str),
}

/// Route guard: only [`ADMIN_ROUTE`] needs a session.
#[must_use]
pub fn route_access(path: &str, authenticated: bool) -> RouteAccess {
    let path = path.trim_end_matches('/');
    if path == ADMIN_ROUTE && !authenticated {
        return RouteAccess::Redirect(LOGIN_ROUTE);
    }
    RouteAccess::Allow
}

/// Login/logout against a key-value store.
#[derive(Clone, Debug)]
pub struct SessionGate<S, V = StaticCredentials> {
    store: S,
    verifier: V,
}

impl<S: KeyValueStore> SessionGate<S> {
    /// Gate using the built-in credential pair.
    pub fn new(store: S) -> Self {
        Self::with_verifier(store, StaticCredentials::default())
    }
}

impl<S: KeyValueStore, V: CredentialVerifier> SessionGate<S, V> {
    pub fn with_verifier(store: S, verifier: V) -> Self {
        Self { store, verifier }
    }

    /// Check the pair and set the session flag on success.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCredentials`] on mismatch (the flag is left as
    /// it was) and [`Error::Storage`] if the flag cannot be written.
    pub fn attempt_login(&self, email: &str, password: &str) -> Result<()> {
        if !self.verifier.verify(email, password) {
            tracing::warn!("admin login rejected");
            return Err(Error::InvalidCredentials);
        }
        self.store.set(SESSION_KEY, SESSION_VALUE)?;
        tracing::info!("admin logged in");
        Ok(())
    }

    /// Whether the session flag is present. Unreadable storage counts as
    /// logged out.
    pub fn is_authenticated(&self) -> bool {
        match self.store.get(SESSION_KEY) {
            Ok(value) => value.as_deref() == Some(SESSION_VALUE),
            Err(e) => {
                tracing::warn!(error = %e, "session flag unreadable");
                false
            }
        }
    }

    pub fn state(&self) -> SessionState {
        if self.is_authenticated() { SessionState::LoggedIn } else { SessionState::LoggedOut }
    }

    /// Clear the session flag. Safe to call when already logged out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the flag cannot be removed.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(SESSION_KEY)?;
        tracing::info!("admin logged out");
        Ok(())
    }

    /// Route guard for `path` given the current flag.
    pub fn access(&self, path: &str) -> RouteAccess {
        route_access(path, self.is_authenticated())
    }
}
