use content::session::SessionState;

use super::*;

#[test]
fn gate_without_browser_storage_is_logged_out() {
    assert_eq!(session_gate().state(), SessionState::LoggedOut);
}

#[test]
fn login_with_wrong_pair_is_rejected() {
    assert_eq!(session_gate().attempt_login("admin@portfolio.dev", "admin123"), Err(content::Error::InvalidCredentials));
}
