//! Domain state behind the admin panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin page owns one `RwSignal<AdminState>`. Buttons translate clicks
//! into [`AdminAction`]s and hand them to [`AdminState::dispatch`], which
//! forwards to the store and returns the toast to show. Views are derived
//! from the stores plus the ephemeral [`AdminUi`] on every render.
//!
//! The signal is provided at the app root so public pages list the posts
//! published during this visit. Posts live only in memory; the inbox and
//! ledger are re-read from storage whenever the admin page mounts, since the
//! contact and payment pages append to storage directly.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use content::clock::{Clock, SystemClock};
use content::inbox::{InboxStore, Message};
use content::payments::{Payment, PaymentLedger, PaymentStatus};
use content::posts::{ContentStore, Post, PostDraft, PostPatch};
use content::storage::Repository;

use leptos::prelude::*;

use super::toast::{Toast, ToastQueue, notify};
use super::ui::AdminUi;
use crate::util::storage::{self, BrowserRepo};

/// Number of entries in the dashboard's recent lists.
pub const RECENT_LIMIT: usize = 3;

/// A mutation requested from the admin UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdminAction {
    CreatePost(PostDraft),
    SavePost(i64, PostPatch),
    DeletePost(i64),
    DuplicatePost(i64),
    TogglePublish(i64),
    MarkRead(i64),
    SetPaymentStatus(i64, PaymentStatus),
}

/// Headline numbers and recent activity for the dashboard tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub total_posts: usize,
    pub published_posts: usize,
    pub messages: usize,
    pub unread_messages: usize,
    pub payments: usize,
    pub pending_payments: usize,
    pub recent_messages: Vec<Message>,
    pub recent_payments: Vec<Payment>,
}

/// Posts, inbox and ledger for one admin session.
#[derive(Clone, Debug)]
pub struct AdminState<I = BrowserRepo<Message>, P = BrowserRepo<Payment>> {
    pub posts: ContentStore,
    pub inbox: InboxStore<I>,
    pub ledger: PaymentLedger<P>,
}

impl Default for AdminState {
    /// Seeded posts with an empty inbox and ledger; storage is not read.
    fn default() -> Self {
        Self {
            posts: ContentStore::seeded(),
            inbox: InboxStore::new(storage::messages_repo()),
            ledger: PaymentLedger::new(storage::payments_repo()),
        }
    }
}

impl AdminState {
    /// Re-read the inbox and ledger from browser storage, keeping the posts.
    ///
    /// # Errors
    ///
    /// Returns a storage error if either snapshot cannot be decoded; nothing
    /// is replaced in that case.
    pub fn reload_records(&mut self) -> content::Result<()> {
        let inbox = storage::load_inbox()?;
        let ledger = storage::load_ledger()?;
        self.inbox = inbox;
        self.ledger = ledger;
        Ok(())
    }
}

/// Dispatch `action` against the shared admin state and toast the result.
pub fn apply(admin: RwSignal<AdminState>, toasts: RwSignal<ToastQueue>, action: AdminAction) {
    try_apply(admin, toasts, action);
}

/// [`apply`], returning whether the store accepted the action. Forms use it
/// to stay open on a rejected submit.
pub fn try_apply(admin: RwSignal<AdminState>, toasts: RwSignal<ToastQueue>, action: AdminAction) -> bool {
    match admin.try_update(|state| state.dispatch(action, &SystemClock)) {
        Some(Ok(toast)) => {
            notify(toasts, toast);
            true
        }
        Some(Err(e)) => {
            #[cfg(feature = "hydrate")]
            log::warn!("admin action failed: {e}");
            notify(toasts, Toast::from_error(&e));
            false
        }
        None => false,
    }
}

impl<I: Repository<Message>, P: Repository<Payment>> AdminState<I, P> {
    /// Apply `action` and describe the result for a toast.
    ///
    /// # Errors
    ///
    /// Propagates the store's error; render it with [`Toast::from_error`].
    pub fn dispatch(&mut self, action: AdminAction, clock: &impl Clock) -> content::Result<Toast> {
        let toast = match action {
            AdminAction::CreatePost(draft) => {
                self.posts.create(draft, clock)?;
                Toast::info("Post Created! ✨", "New post has been added successfully.")
            }
            AdminAction::SavePost(id, patch) => {
                self.posts.update(id, patch)?;
                Toast::info("Post Updated! 📝", "Changes have been saved successfully.")
            }
            AdminAction::DeletePost(id) => {
                self.posts.delete(id)?;
                Toast::info("Post Deleted! 🗑️", "Post has been removed successfully.")
            }
            AdminAction::DuplicatePost(id) => {
                self.posts.duplicate(id, clock)?;
                Toast::info("Post Duplicated! 📋", "Post has been duplicated successfully.")
            }
            AdminAction::TogglePublish(id) => {
                if self.posts.toggle_publish(id)? {
                    Toast::info("Post Published! 📢", "Post is now visible on public pages.")
                } else {
                    Toast::info("Post Unpublished! 📤", "Post is now hidden from public pages.")
                }
            }
            AdminAction::MarkRead(id) => {
                self.inbox.mark_read(id)?;
                Toast::info("Message Read ✉️", "Message marked as read.")
            }
            AdminAction::SetPaymentStatus(id, status) => {
                self.ledger.set_status(id, status)?;
                Toast::info("Payment Status Updated! 💰", format!("Payment marked as {status}."))
            }
        };
        Ok(toast)
    }

    /// Posts tab contents under the current search, category and sort.
    pub fn visible_posts(&self, ui: &AdminUi) -> Vec<Post> {
        self.posts.query(&ui.post_filter(), ui.sort).to_vec()
    }

    /// Messages tab contents under the current search.
    pub fn visible_messages(&self, ui: &AdminUi) -> Vec<Message> {
        self.inbox.query(ui.effective_search()).into_iter().cloned().collect()
    }

    /// Payments tab contents under the current search.
    pub fn visible_payments(&self, ui: &AdminUi) -> Vec<Payment> {
        self.ledger.query(ui.effective_search()).into_iter().cloned().collect()
    }

    pub fn dashboard(&self, ui: &AdminUi) -> Dashboard {
        let stats = self.posts.stats();
        let search = ui.effective_search();
        Dashboard {
            total_posts: stats.total,
            published_posts: stats.published,
            messages: self.inbox.len(),
            unread_messages: self.inbox.unread_count(),
            payments: self.ledger.len(),
            pending_payments: self.ledger.pending_count(),
            recent_messages: self.inbox.recent(search, RECENT_LIMIT).into_iter().cloned().collect(),
            recent_payments: self.ledger.recent(search, RECENT_LIMIT).into_iter().cloned().collect(),
        }
    }
}
