use leptos::prelude::*;

use super::*;

#[test]
fn receipt_link_points_anchor_and_thumbnail_at_same_image() {
    let src = "data:image/png;base64,iVBORw0KGgo=";
    let html = Owner::new().with(|| view! { <ReceiptLink src=src.to_owned()/> }.to_html());
    assert!(html.contains(&format!("href=\"{src}\"")), "{html}");
    assert!(html.contains(&format!("src=\"{src}\"")), "{html}");
    assert!(html.contains("target=\"_blank\""));
}
