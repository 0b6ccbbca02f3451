//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, submissions, dialogs)
//! and delegates rendering details to `components`.

pub mod about;
pub mod admin;
pub mod blog;
pub mod contact;
pub mod home;
pub mod login;
pub mod not_found;
pub mod payment;
pub mod projects;
pub mod upcoming;
