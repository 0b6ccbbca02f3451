//! Time source injected into stores so ids and dates are testable.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date of [`Clock::now`] in UTC.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Derive a record id from `now` in epoch milliseconds.
///
/// When `floor` is given the result is strictly greater than it, so records
/// created within the same millisecond still get distinct ids.
#[must_use]
pub fn stamp_id(now: DateTime<Utc>, floor: Option<i64>) -> i64 {
    bump_id(now.timestamp_millis(), floor)
}

/// `id` unchanged, or one past `floor` if `id` does not exceed it.
#[must_use]
pub fn bump_id(id: i64, floor: Option<i64>) -> i64 {
    floor.map_or(id, |last| id.max(last.saturating_add(1)))
}
