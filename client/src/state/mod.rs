//! Reactive state containers provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Domain data (`admin`) and presentation state (`ui`, `purchase`) live in
//! separate signals so a tab switch or dialog toggle never touches a store.

pub mod admin;
pub mod auth;
pub mod purchase;
pub mod toast;
pub mod ui;
