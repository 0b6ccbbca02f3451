use content::submission::{CancelToken, Outcome, PAYMENT_DELAY, run};
use futures::executor::block_on;

use super::*;

#[test]
fn settles_and_applies_outside_browser() {
    let outcome = block_on(run(&TimerSettle, PAYMENT_DELAY, &CancelToken::new(), || Ok(7)));
    assert_eq!(outcome, Outcome::Completed(7));
}

#[test]
fn cancelled_token_skips_apply() {
    let token = CancelToken::new();
    token.cancel();
    let outcome: Outcome<()> = block_on(run(&TimerSettle, PAYMENT_DELAY, &token, || panic!("must not apply")));
    assert_eq!(outcome, Outcome::Cancelled);
}
