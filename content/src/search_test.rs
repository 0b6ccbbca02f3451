use super::*;

#[test]
fn contains_ci_ignores_case() {
    assert!(contains_ci("Machine Learning in Healthcare", "MACHINE"));
    assert!(contains_ci("Machine Learning in Healthcare", "healthcare"));
}

#[test]
fn contains_ci_empty_needle_matches() {
    assert!(contains_ci("anything", ""));
    assert!(contains_ci("", ""));
}

#[test]
fn contains_ci_rejects_missing_text() {
    assert!(!contains_ci("Analytics Dashboard", "robotics"));
}

#[test]
fn locale_cmp_ignores_case_on_first_pass() {
    assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
    assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
}

#[test]
fn locale_cmp_sorts_accents_with_base_letter() {
    assert_eq!(locale_cmp("Éclair", "Zebra"), Ordering::Less);
    assert_eq!(locale_cmp("éclair", "Ecstasy"), Ordering::Less);
}

#[test]
fn locale_cmp_puts_lowercase_before_uppercase() {
    assert_eq!(locale_cmp("a", "A"), Ordering::Less);
    assert_eq!(locale_cmp("blog", "Blog"), Ordering::Less);
    assert_eq!(locale_cmp("blog", "blog"), Ordering::Equal);
}
