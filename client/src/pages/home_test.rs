use super::*;

#[test]
fn step_wraps_forward_and_back() {
    assert_eq!(step_slide(3, 1, 4), 0);
    assert_eq!(step_slide(0, -1, 4), 3);
    assert_eq!(step_slide(1, 1, 4), 2);
}

#[test]
fn step_on_empty_deck_stays_at_zero() {
    assert_eq!(step_slide(0, 1, 0), 0);
}
