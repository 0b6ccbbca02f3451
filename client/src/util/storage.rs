//! Browser `localStorage` behind the domain crate's `KeyValueStore`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only web-sys glue so the stores, the session gate and
//! the pages share one storage binding. Server rendering has no storage: reads
//! see nothing and writes are dropped, which renders every page in its
//! logged-out, empty-collection state until hydration takes over.

use content::Result;
use content::inbox::{InboxStore, Message};
use content::payments::{Payment, PaymentLedger};
use content::storage::{JsonRepository, KeyValueStore, MESSAGES_KEY, PAYMENTS_KEY};

/// Zero-sized handle; each call looks up `window.localStorage` afresh.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| content::Error::Storage("localStorage unavailable".into()))
}

#[cfg(feature = "hydrate")]
fn js_error(op: &str, key: &str) -> content::Error {
    content::Error::Storage(format!("{op} {key} failed"))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|_| js_error("read", key))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|_| js_error("write", key))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<()> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|_| js_error("remove", key))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

pub type BrowserRepo<T> = JsonRepository<BrowserStorage, T>;
pub type Inbox = InboxStore<BrowserRepo<Message>>;
pub type Ledger = PaymentLedger<BrowserRepo<Payment>>;

pub fn messages_repo() -> BrowserRepo<Message> {
    JsonRepository::new(BrowserStorage, MESSAGES_KEY)
}

pub fn payments_repo() -> BrowserRepo<Payment> {
    JsonRepository::new(BrowserStorage, PAYMENTS_KEY)
}

/// Inbox hydrated from `localStorage`.
///
/// # Errors
///
/// Returns a storage error if the stored snapshot cannot be decoded.
pub fn load_inbox() -> Result<Inbox> {
    InboxStore::load(messages_repo())
}

/// Ledger hydrated from `localStorage`.
///
/// # Errors
///
/// Returns a storage error if the stored snapshot cannot be decoded.
pub fn load_ledger() -> Result<Ledger> {
    PaymentLedger::load(payments_repo())
}
