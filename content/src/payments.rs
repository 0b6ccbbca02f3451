//! Payment submissions and the admin ledger.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `/payment` page appends pending records; the admin "Payments" tab
//! approves or rejects them. Completed and rejected are terminal, so a
//! payment changes status at most once.

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, bump_id, stamp_id};
use crate::search::contains_ci;
use crate::storage::Repository;
use crate::{Error, Result};

const KIND: &str = "payment";

/// The only payment rail the site accepts.
pub const PAYMENT_METHOD: &str = "binance";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Rejected,
}

impl PaymentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "rejected" => Ok(Self::Rejected),
            other => Err(Error::validation(format!("unknown payment status: {other}"))),
        }
    }
}

/// One submitted payment awaiting or past review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub email: String,
    /// USD amount.
    pub amount: Decimal,
    /// `data:` URI of the uploaded receipt.
    pub screenshot: Option<String>,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, rename = "transactionId", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub status: PaymentStatus,
}

impl Payment {
    fn matches(&self, search: &str) -> bool {
        contains_ci(&self.email, search) || self.amount.to_string().contains(search) || contains_ci(self.status.as_str(), search)
    }
}

/// Raw payment-form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentDraft {
    pub email: String,
    pub amount: String,
    pub screenshot: Option<String>,
    pub message: String,
    pub transaction_id: String,
}

impl PaymentDraft {
    /// Validate the form and build a pending [`Payment`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the email, amount or screenshot is
    /// missing, or the amount is not a positive number.
    pub fn submit(&self, clock: &impl Clock) -> Result<Payment> {
        let email = self.email.trim();
        let amount = self.amount.trim();
        let screenshot = self.screenshot.as_deref().filter(|s| !s.is_empty());
        let (false, false, Some(screenshot)) = (email.is_empty(), amount.is_empty(), screenshot) else {
            return Err(Error::validation("Please fill in all required fields and upload payment screenshot."));
        };
        let amount = parse_amount(amount)?;
        let now = clock.now();
        Ok(Payment {
            id: stamp_id(now, None),
            email: email.to_owned(),
            amount,
            screenshot: Some(screenshot.to_owned()),
            method: PAYMENT_METHOD.to_owned(),
            message: optional(&self.message),
            transaction_id: optional(&self.transaction_id),
            timestamp: now,
            status: PaymentStatus::Pending,
        })
    }
}

/// Parse a user-entered USD amount, accepting a leading `$`.
///
/// # Errors
///
/// Returns [`Error::Validation`] unless the text is a number greater than zero.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let digits = raw.trim().trim_start_matches('$');
    let amount = Decimal::from_str(digits).map_err(|_| Error::validation(format!("invalid amount: {raw}")))?;
    if amount <= Decimal::ZERO {
        return Err(Error::validation("amount must be greater than zero"));
    }
    Ok(amount)
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Payment ledger backed by a write-through repository.
#[derive(Clone, Debug)]
pub struct PaymentLedger<R> {
    repo: R,
    payments: Vec<Payment>,
}

impl<R: Repository<Payment>> PaymentLedger<R> {
    /// Start with an empty ledger without reading the repository.
    pub fn new(repo: R) -> Self {
        Self { repo, payments: Vec::new() }
    }

    /// Hydrate the ledger from the repository snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the snapshot cannot be read.
    pub fn load(repo: R) -> Result<Self> {
        let payments = repo.load()?;
        tracing::debug!(count = payments.len(), "ledger loaded");
        Ok(Self { repo, payments })
    }

    #[must_use]
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.payments.iter().filter(|p| p.status == PaymentStatus::Pending).count()
    }

    /// Record a submission and persist the ledger.
    /// An id that collides with or predates the newest stored id is moved
    /// past it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the snapshot write fails; the ledger is
    /// unchanged in that case.
    pub fn append(&mut self, mut payment: Payment) -> Result<()> {
        payment.id = bump_id(payment.id, self.payments.iter().map(|p| p.id).max());
        let id = payment.id;
        let amount = payment.amount;
        let mut next = self.payments.clone();
        next.push(payment);
        self.commit(next)?;
        tracing::info!(id, %amount, "payment submitted");
        Ok(())
    }

    /// Move a pending payment to `status`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id,
    /// [`Error::InvalidTransition`] if the payment is already terminal or the
    /// target is `pending`, and [`Error::Storage`] if the write fails.
    pub fn set_status(&mut self, id: i64, status: PaymentStatus) -> Result<()> {
        let index = self.payments.iter().position(|p| p.id == id).ok_or(Error::NotFound { kind: KIND, id })?;
        let current = self.payments[index].status;
        if current.is_terminal() || !status.is_terminal() {
            return Err(Error::InvalidTransition { from: current, to: status });
        }
        let mut next = self.payments.clone();
        next[index].status = status;
        self.commit(next)?;
        tracing::info!(id, %status, "payment reviewed");
        Ok(())
    }

    /// Payments whose email, amount or status contain `search`.
    #[must_use]
    pub fn query(&self, search: &str) -> Vec<&Payment> {
        self.payments.iter().filter(|p| p.matches(search)).collect()
    }

    /// Up to `n` payments, newest first.
    #[must_use]
    pub fn recent(&self, search: &str, n: usize) -> Vec<&Payment> {
        self.payments.iter().rev().filter(|p| p.matches(search)).take(n).collect()
    }

    fn commit(&mut self, next: Vec<Payment>) -> Result<()> {
        self.repo.save_all(&next)?;
        self.payments = next;
        Ok(())
    }
}
