use super::*;

#[test]
fn preview_text_shows_placeholder_until_something_is_typed() {
    assert_eq!(preview_text("", "Untitled Post"), "Untitled Post");
    assert_eq!(preview_text("  \n", "No content yet..."), "No content yet...");
    assert_eq!(preview_text("Rust Notes", "Untitled Post"), "Rust Notes");
}
