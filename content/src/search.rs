//! Text matching and ordering helpers used by the store queries.

use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::Collator;

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Case-insensitive substring test. An empty needle matches everything.
#[must_use]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Locale-aware string ordering using the CLDR root collation: accents sort
/// with their base letter and lowercase precedes uppercase. Strings that
/// collate equal fall back to code-point order.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;
