use super::*;

#[test]
fn encodes_pay_id_and_size() {
    assert_eq!(
        qr_code_url("508-888-8888", 250),
        "https://api.qrserver.com/v1/create-qr-code/?size=250x250&data=508-888-8888"
    );
}

#[test]
fn escapes_reserved_characters() {
    let url = qr_code_url("binancepay:5088 888", 200);
    assert!(url.ends_with("&data=binancepay%3A5088%20888"));
}
