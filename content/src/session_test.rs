use super::*;
use crate::storage::MemoryStorage;

fn gate() -> (SessionGate<MemoryStorage>, MemoryStorage) {
    let store = MemoryStorage::new();
    (SessionGate::new(store.clone()), store)
}

struct AllowList(Vec<(&'static str, &'static str)>);

impl CredentialVerifier for AllowList {
    fn verify(&self, email: &str, password: &str) -> bool {
        self.0.iter().any(|(e, p)| *e == email && *p == password)
    }
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn fresh_storage_is_logged_out() {
    let (gate, _) = gate();
    assert_eq!(gate.state(), SessionState::LoggedOut);
    assert_eq!(gate.access("/admin"), RouteAccess::Redirect("/login"));
}

#[test]
fn valid_login_sets_flag_and_opens_admin() {
    let (gate, store) = gate();
    gate.attempt_login("Kyim@dev.org", "5EEC3488").unwrap();

    assert_eq!(store.get(SESSION_KEY).unwrap().as_deref(), Some("true"));
    assert!(gate.is_authenticated());
    assert_eq!(gate.access("/admin"), RouteAccess::Allow);
}

#[test]
fn wrong_pair_is_rejected_and_flag_stays_unset() {
    let (gate, store) = gate();
    for (email, password) in [("kyim@dev.org", "5EEC3488"), ("Kyim@dev.org", "5eec3488"), ("", ""), ("admin@portfolio.dev", "admin123")] {
        assert_eq!(gate.attempt_login(email, password), Err(Error::InvalidCredentials));
    }
    assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    assert_eq!(gate.access("/admin"), RouteAccess::Redirect("/login"));
}

#[test]
fn failed_login_does_not_clear_an_existing_session() {
    let (gate, _) = gate();
    gate.attempt_login("Kyim@dev.org", "5EEC3488").unwrap();
    assert!(gate.attempt_login("Kyim@dev.org", "nope").is_err());
    assert!(gate.is_authenticated());
}

#[test]
fn logout_is_idempotent() {
    let (gate, _) = gate();
    gate.attempt_login("Kyim@dev.org", "5EEC3488").unwrap();
    gate.logout().unwrap();
    gate.logout().unwrap();
    assert_eq!(gate.state(), SessionState::LoggedOut);
}

#[test]
fn login_logout_cycle_repeats() {
    let (gate, _) = gate();
    for _ in 0..2 {
        gate.attempt_login("Kyim@dev.org", "5EEC3488").unwrap();
        assert_eq!(gate.state(), SessionState::LoggedIn);
        gate.logout().unwrap();
        assert_eq!(gate.state(), SessionState::LoggedOut);
    }
}

#[test]
fn flag_with_other_value_is_not_a_session() {
    let (gate, store) = gate();
    store.set(SESSION_KEY, "false").unwrap();
    assert!(!gate.is_authenticated());
}

#[test]
fn injected_verifier_replaces_builtin_pair() {
    let store = MemoryStorage::new();
    let gate = SessionGate::with_verifier(store, AllowList(vec![("ops@folio.dev", "hunter2")]));
    assert_eq!(gate.attempt_login("Kyim@dev.org", "5EEC3488"), Err(Error::InvalidCredentials));
    gate.attempt_login("ops@folio.dev", "hunter2").unwrap();
    assert!(gate.is_authenticated());
}

// =============================================================
// route_access
// =============================================================

#[test]
fn only_admin_route_is_gated() {
    for path in ["/", "/about", "/contact", "/projects", "/blog", "/upcoming", "/login", "/payment", "/missing"] {
        assert_eq!(route_access(path, false), RouteAccess::Allow, "{path}");
    }
    assert_eq!(route_access("/admin/", false), RouteAccess::Redirect("/login"));
    assert_eq!(route_access("/admin", true), RouteAccess::Allow);
}
