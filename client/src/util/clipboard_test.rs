use super::*;

#[test]
fn write_text_reports_failure_without_a_browser() {
    assert!(!futures::executor::block_on(write_text("508-888-8888")));
}
