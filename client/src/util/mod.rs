//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clipboard, file reading,
//! timers) from page and component logic. Each one degrades to a no-op
//! outside the `hydrate` build so server rendering and tests need no browser.

pub mod auth;
pub mod clipboard;
pub mod file;
pub mod qr;
pub mod settle;
pub mod storage;
