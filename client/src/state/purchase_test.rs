use std::str::FromStr;

use super::*;

fn item() -> PurchaseItem {
    PurchaseItem { title: "ML Prediction Dashboard".into(), price: "$29".into() }
}

#[test]
fn price_label_parses_to_dollars() {
    assert_eq!(parse_price("$29").unwrap(), Decimal::from(29));
    assert_eq!(item().amount().unwrap(), Decimal::from(29));
    assert_eq!(parse_price("19.50").unwrap(), Decimal::from_str("19.5").unwrap());
}

#[test]
fn bad_price_label_is_rejected() {
    assert!(parse_price("free").is_err());
    assert!(parse_price("$0").is_err());
}

#[test]
fn steps_advance_in_order() {
    let mut dialog = PurchaseDialog::default();
    assert!(!dialog.start_processing());

    dialog.open(item());
    assert_eq!(dialog.step, PurchaseStep::Payment);
    assert!(dialog.start_processing());
    assert!(!dialog.start_processing());
    dialog.finish_processing();
    assert_eq!(dialog.step, PurchaseStep::Redirect);
}

#[test]
fn close_resets_and_ignores_late_timer() {
    let mut dialog = PurchaseDialog::default();
    dialog.open(item());
    dialog.copied = true;
    dialog.start_processing();
    dialog.close();
    dialog.finish_processing();
    assert_eq!(dialog, PurchaseDialog::default());
}

#[test]
fn reopening_starts_from_payment() {
    let mut dialog = PurchaseDialog::default();
    dialog.open(item());
    dialog.start_processing();
    dialog.finish_processing();
    dialog.open(PurchaseItem { title: "AI Content Generator".into(), price: "$59".into() });
    assert_eq!(dialog.step, PurchaseStep::Payment);
    assert_eq!(dialog.item.as_ref().unwrap().price, "$59");
}
