//! Timer-backed settle for form submissions.

#[cfg(test)]
#[path = "settle_test.rs"]
mod settle_test;

use std::time::Duration;

use async_trait::async_trait;
use content::submission::Settle;

/// Sleeps on a browser timer. Outside the browser it returns at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerSettle;

#[async_trait(?Send)]
impl Settle for TimerSettle {
    async fn settle(&self, delay: Duration) {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(delay).await;
        #[cfg(not(feature = "hydrate"))]
        let _ = delay;
    }
}
