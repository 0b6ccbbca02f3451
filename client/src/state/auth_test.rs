use content::session::{ADMIN_ROUTE, LOGIN_ROUTE};

use super::*;

#[test]
fn default_state_is_loading_and_logged_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_logged_in());
}

#[test]
fn no_redirect_while_loading() {
    assert_eq!(AuthState::default().redirect_for(ADMIN_ROUTE), None);
}

#[test]
fn logged_out_admin_visit_redirects_to_login() {
    let state = AuthState::resolved(SessionState::LoggedOut);
    assert_eq!(state.redirect_for(ADMIN_ROUTE), Some(LOGIN_ROUTE));
    assert_eq!(state.redirect_for("/admin/"), Some(LOGIN_ROUTE));
}

#[test]
fn public_routes_and_logged_in_admin_render() {
    let out = AuthState::resolved(SessionState::LoggedOut);
    assert_eq!(out.redirect_for("/projects"), None);
    let admin = AuthState::resolved(SessionState::LoggedIn);
    assert_eq!(admin.redirect_for(ADMIN_ROUTE), None);
}
