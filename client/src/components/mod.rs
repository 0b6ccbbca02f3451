//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, admin tab panels and dialogs while reading
//! and writing shared state from Leptos context providers.

pub mod admin_dashboard;
pub mod admin_messages;
pub mod admin_payments;
pub mod admin_posts;
pub mod admin_settings;
pub mod delete_confirmation;
pub mod image_picker;
pub mod nav;
pub mod post_card;
pub mod post_editor;
pub mod purchase_modal;
pub mod toast_host;
