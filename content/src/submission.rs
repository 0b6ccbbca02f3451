//! Cancellable submissions with a settle delay.
//!
//! DESIGN
//! ======
//! Form submissions validate synchronously, then wait on an injected
//! [`Settle`] before applying their mutation. The browser settles on a timer;
//! tests use [`Immediate`]. A [`CancelToken`] checked before and after the
//! wait drops the mutation if the page was left or the dialog closed.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::{Error, Result};

/// Delay before a contact message is stored.
pub const CONTACT_DELAY: Duration = Duration::from_secs(2);
/// Delay before a payment is recorded.
pub const PAYMENT_DELAY: Duration = Duration::from_secs(2);
/// Delay of the purchase modal's "processing" step.
pub const PURCHASE_DELAY: Duration = Duration::from_secs(3);

/// Asynchronous wait standing in for network latency.
#[async_trait(?Send)]
pub trait Settle {
    async fn settle(&self, delay: Duration);
}

/// Settles without waiting.
#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

#[async_trait(?Send)]
impl Settle for Immediate {
    async fn settle(&self, _delay: Duration) {}
}

/// Shared cancellation flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// How a submission ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    Failed(Error),
    Cancelled,
}

impl<T> Outcome<T> {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Wait on `settle`, then run `apply` unless `token` was cancelled.
pub async fn run<S, T, F>(settle: &S, delay: Duration, token: &CancelToken, apply: F) -> Outcome<T>
where
    S: Settle + ?Sized,
    F: FnOnce() -> Result<T>,
{
    if token.is_cancelled() {
        return Outcome::Cancelled;
    }
    settle.settle(delay).await;
    if token.is_cancelled() {
        tracing::debug!("submission cancelled while settling");
        return Outcome::Cancelled;
    }
    match apply() {
        Ok(value) => Outcome::Completed(value),
        Err(e) => {
            tracing::warn!(error = %e, "submission failed");
            Outcome::Failed(e)
        }
    }
}
