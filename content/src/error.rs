//! Error taxonomy shared by every store.
//!
//! Nothing here is fatal: callers render each variant as a transient
//! notification and leave the collections as they were.

use crate::payments::PaymentStatus;

/// Error returned by store, session and upload operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),
    /// The identifier does not name a record in the collection.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: i64 },
    /// The payment is already in a terminal status.
    #[error("payment status cannot change from {from} to {to}")]
    InvalidTransition { from: PaymentStatus, to: PaymentStatus },
    /// The email/password pair was rejected.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// The uploaded file exceeds the size limit.
    #[error("file is {size} bytes; uploads are limited to {limit} bytes")]
    UploadTooLarge { size: u64, limit: u64 },
    /// The key-value store rejected a read or write, or held undecodable JSON.
    #[error("storage error: {0}")]
    Storage(String),
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
