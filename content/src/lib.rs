//! Domain model and stores behind the portfolio admin panel.
//!
//! This crate owns the posts, inbox and payment collections, the session gate
//! and the key-value repository they persist through. It has no browser
//! dependencies: the `client` crate supplies a `localStorage`-backed
//! [`storage::KeyValueStore`] and a timer-backed [`submission::Settle`], while
//! tests use [`storage::MemoryStorage`] and [`submission::Immediate`].

pub mod clock;
pub mod error;
pub mod inbox;
pub mod payments;
pub mod posts;
pub mod search;
pub mod session;
pub mod storage;
pub mod submission;
pub mod upload;

pub use error::{Error, Result};
