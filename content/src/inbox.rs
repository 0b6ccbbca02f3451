//! Contact-form messages and the admin inbox.
//!
//! SYSTEM CONTEXT
//! ==============
//! The contact page appends through [`InboxStore::append`]; the admin
//! "Messages" tab reads and marks messages read. Both sides share one
//! [`Repository`] so every mutation overwrites the stored snapshot.

#[cfg(test)]
#[path = "inbox_test.rs"]
mod inbox_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, bump_id, stamp_id};
use crate::search::contains_ci;
use crate::storage::Repository;
use crate::{Error, Result};

const KIND: &str = "message";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Unread,
    Read,
}

/// One contact-form submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    /// Message body.
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub status: MessageStatus,
}

impl Message {
    fn matches(&self, search: &str) -> bool {
        contains_ci(&self.name, search)
            || contains_ci(&self.email, search)
            || contains_ci(&self.subject, search)
            || contains_ci(&self.message, search)
    }
}

/// Raw contact-form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    /// Validate the form and build an unread [`Message`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first blank field, or when
    /// the email has no `@`.
    pub fn submit(&self, clock: &impl Clock) -> Result<Message> {
        let fields = [("name", &self.name), ("email", &self.email), ("subject", &self.subject), ("message", &self.message)];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(Error::validation(format!("{field} is required")));
        }
        let email = self.email.trim();
        if !email.contains('@') {
            return Err(Error::validation("enter a valid email address"));
        }
        let now = clock.now();
        Ok(Message {
            id: stamp_id(now, None),
            name: self.name.trim().to_owned(),
            email: email.to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
            timestamp: now,
            status: MessageStatus::Unread,
        })
    }
}

/// Inbox backed by a write-through repository.
#[derive(Clone, Debug)]
pub struct InboxStore<R> {
    repo: R,
    messages: Vec<Message>,
}

impl<R: Repository<Message>> InboxStore<R> {
    /// Start with an empty inbox without reading the repository.
    pub fn new(repo: R) -> Self {
        Self { repo, messages: Vec::new() }
    }

    /// Hydrate the inbox from the repository snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the snapshot cannot be read.
    pub fn load(repo: R) -> Result<Self> {
        let messages = repo.load()?;
        tracing::debug!(count = messages.len(), "inbox loaded");
        Ok(Self { repo, messages })
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| m.status == MessageStatus::Unread).count()
    }

    /// Add a submission and persist the inbox.
    /// An id that collides with or predates the newest stored id is moved
    /// past it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the snapshot write fails; the inbox is
    /// unchanged in that case.
    pub fn append(&mut self, mut message: Message) -> Result<()> {
        message.id = bump_id(message.id, self.messages.iter().map(|m| m.id).max());
        let id = message.id;
        let mut next = self.messages.clone();
        next.push(message);
        self.commit(next)?;
        tracing::info!(id, "message received");
        Ok(())
    }

    /// Mark a message read. Already-read messages are left alone and nothing
    /// is written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id and [`Error::Storage`] if
    /// the snapshot write fails.
    pub fn mark_read(&mut self, id: i64) -> Result<()> {
        let index = self.messages.iter().position(|m| m.id == id).ok_or(Error::NotFound { kind: KIND, id })?;
        if self.messages[index].status == MessageStatus::Read {
            return Ok(());
        }
        let mut next = self.messages.clone();
        next[index].status = MessageStatus::Read;
        self.commit(next)?;
        tracing::debug!(id, "message marked read");
        Ok(())
    }

    /// Messages whose name, email, subject or body contain `search`.
    #[must_use]
    pub fn query(&self, search: &str) -> Vec<&Message> {
        self.messages.iter().filter(|m| m.matches(search)).collect()
    }

    /// Up to `n` messages, newest first.
    #[must_use]
    pub fn recent(&self, search: &str, n: usize) -> Vec<&Message> {
        self.messages.iter().rev().filter(|m| m.matches(search)).take(n).collect()
    }

    fn commit(&mut self, next: Vec<Message>) -> Result<()> {
        self.repo.save_all(&next)?;
        self.messages = next;
        Ok(())
    }
}
