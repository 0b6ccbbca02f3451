use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use super::*;
use crate::clock::FixedClock;
use crate::storage::{JsonRepository, KeyValueStore, MemoryStorage, PAYMENTS_KEY};
use crate::upload;

const SCREENSHOT: &str = "data:image/png;base64,iVBORw0KGgo=";

fn clock_at(secs: u32) -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, secs).unwrap())
}

fn draft(email: &str, amount: &str) -> PaymentDraft {
    PaymentDraft {
        email: email.into(),
        amount: amount.into(),
        screenshot: Some(SCREENSHOT.into()),
        ..PaymentDraft::default()
    }
}

fn ledger(store: &MemoryStorage) -> PaymentLedger<JsonRepository<MemoryStorage, Payment>> {
    PaymentLedger::load(JsonRepository::new(store.clone(), PAYMENTS_KEY)).unwrap()
}

fn ledger_with_one(store: &MemoryStorage) -> (PaymentLedger<JsonRepository<MemoryStorage, Payment>>, i64) {
    let mut ledger = ledger(store);
    let payment = draft("buyer@example.com", "50").submit(&clock_at(0)).unwrap();
    let id = payment.id;
    ledger.append(payment).unwrap();
    (ledger, id)
}

// =============================================================
// PaymentDraft
// =============================================================

#[test]
fn draft_builds_pending_binance_payment() {
    let payment = draft("buyer@example.com", "50").submit(&clock_at(0)).unwrap();
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.method, "binance");
    assert_eq!(payment.amount, Decimal::from(50));
    assert_eq!(payment.message, None);
    assert_eq!(payment.transaction_id, None);
}

#[test]
fn draft_requires_email_amount_and_screenshot() {
    let mut missing_shot = draft("buyer@example.com", "50");
    missing_shot.screenshot = None;
    for d in [draft("", "50"), draft("buyer@example.com", " "), missing_shot] {
        assert!(matches!(d.submit(&clock_at(0)), Err(Error::Validation(_))));
    }
}

#[test]
fn draft_keeps_optional_note_and_transaction_id() {
    let mut d = draft("buyer@example.com", "$19.50");
    d.message = " for the component library ".into();
    d.transaction_id = "TX-991".into();
    let payment = d.submit(&clock_at(0)).unwrap();
    assert_eq!(payment.amount, Decimal::new(195, 1));
    assert_eq!(payment.message.as_deref(), Some("for the component library"));
    assert_eq!(payment.transaction_id.as_deref(), Some("TX-991"));
}

#[test]
fn parse_amount_rejects_non_positive_and_garbage() {
    assert!(parse_amount("0").is_err());
    assert!(parse_amount("-5").is_err());
    assert!(parse_amount("fifty").is_err());
}

#[test]
fn parse_amount_keeps_entered_scale() {
    assert_eq!(parse_amount("50.00").unwrap().to_string(), "50.00");
    assert_eq!(parse_amount("$7.5").unwrap().to_string(), "7.5");
}

#[test]
fn oversized_screenshot_is_rejected_before_anything_reaches_the_ledger() {
    let store = MemoryStorage::new();
    let ledger = ledger(&store);
    let too_big = upload::MAX_UPLOAD_BYTES + 1;

    assert_eq!(upload::check_size(too_big), Err(Error::UploadTooLarge { size: too_big, limit: upload::MAX_UPLOAD_BYTES }));

    let mut d = draft("buyer@example.com", "50");
    d.screenshot = None;
    assert!(d.submit(&clock_at(0)).is_err());
    assert!(ledger.is_empty());
    assert_eq!(store.get(PAYMENTS_KEY).unwrap(), None);
}

// =============================================================
// PaymentLedger
// =============================================================

#[test]
fn append_persists_amount_as_string() {
    let store = MemoryStorage::new();
    let _ = ledger_with_one(&store);
    let raw = store.get(PAYMENTS_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["amount"], "50");
    assert_eq!(json[0]["status"], "pending");
    assert_eq!(json[0]["method"], "binance");
}

#[test]
fn set_status_completes_pending_payment() {
    let store = MemoryStorage::new();
    let (mut ledger, id) = ledger_with_one(&store);
    ledger.set_status(id, PaymentStatus::Completed).unwrap();
    assert_eq!(ledger.payments()[0].status, PaymentStatus::Completed);
    assert_eq!(ledger.pending_count(), 0);
    assert_eq!(self::ledger(&store).payments()[0].status, PaymentStatus::Completed);
}

#[test]
fn terminal_status_cannot_be_changed() {
    let store = MemoryStorage::new();
    let (mut ledger, id) = ledger_with_one(&store);
    ledger.set_status(id, PaymentStatus::Completed).unwrap();

    let err = ledger.set_status(id, PaymentStatus::Rejected).unwrap_err();
    assert_eq!(err, Error::InvalidTransition { from: PaymentStatus::Completed, to: PaymentStatus::Rejected });
    assert_eq!(ledger.payments()[0].status, PaymentStatus::Completed);
}

#[test]
fn set_status_back_to_pending_is_invalid() {
    let store = MemoryStorage::new();
    let (mut ledger, id) = ledger_with_one(&store);
    let snapshot = store.get(PAYMENTS_KEY).unwrap();
    assert!(matches!(ledger.set_status(id, PaymentStatus::Pending), Err(Error::InvalidTransition { .. })));
    assert_eq!(store.get(PAYMENTS_KEY).unwrap(), snapshot);
}

#[test]
fn set_status_unknown_id_is_not_found() {
    let store = MemoryStorage::new();
    let (mut ledger, _) = ledger_with_one(&store);
    assert_eq!(ledger.set_status(1, PaymentStatus::Rejected).unwrap_err(), Error::NotFound { kind: "payment", id: 1 });
}

#[test]
fn query_matches_email_amount_and_status() {
    let store = MemoryStorage::new();
    let (mut ledger, id) = ledger_with_one(&store);
    ledger.append(draft("other@shop.dev", "125").submit(&clock_at(1)).unwrap()).unwrap();
    ledger.set_status(id, PaymentStatus::Rejected).unwrap();

    assert_eq!(ledger.query("BUYER").len(), 1);
    assert_eq!(ledger.query("12").len(), 1);
    assert_eq!(ledger.query("5").len(), 2);
    assert_eq!(ledger.query("rejected").len(), 1);
    assert_eq!(ledger.query("pending")[0].email, "other@shop.dev");
    assert_eq!(ledger.recent("", 3)[0].email, "other@shop.dev");
}

#[test]
fn query_matches_amount_as_entered() {
    let store = MemoryStorage::new();
    let mut ledger = ledger(&store);
    ledger.append(draft("buyer@example.com", "50.00").submit(&clock_at(0)).unwrap()).unwrap();

    assert_eq!(ledger.query("50.00").len(), 1);
    assert_eq!(ledger.payments()[0].amount.to_string(), "50.00");
}

#[test]
fn append_gives_same_millisecond_payments_distinct_ids() {
    let store = MemoryStorage::new();
    let mut ledger = ledger(&store);
    let first = draft("a@example.com", "10").submit(&clock_at(0)).unwrap();
    let second = draft("b@example.com", "20").submit(&clock_at(0)).unwrap();
    assert_eq!(first.id, second.id);

    ledger.append(first).unwrap();
    ledger.append(second).unwrap();
    let ids: Vec<i64> = ledger.payments().iter().map(|p| p.id).collect();
    assert!(ids[1] > ids[0]);

    ledger.set_status(ids[1], PaymentStatus::Completed).unwrap();
    assert_eq!(ledger.payments()[0].status, PaymentStatus::Pending);
    assert_eq!(ledger.payments()[1].status, PaymentStatus::Completed);
    let reloaded = PaymentLedger::load(JsonRepository::new(store.clone(), PAYMENTS_KEY)).unwrap();
    assert_eq!(reloaded.payments()[1].id, ids[1]);
}

#[test]
fn status_parses_and_displays_lowercase() {
    assert_eq!("completed".parse::<PaymentStatus>().unwrap(), PaymentStatus::Completed);
    assert_eq!(PaymentStatus::Rejected.to_string(), "rejected");
    assert!("refunded".parse::<PaymentStatus>().is_err());
}
