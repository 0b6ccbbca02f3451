use super::*;

#[test]
fn check_size_accepts_limit_exactly() {
    assert!(check_size(MAX_UPLOAD_BYTES).is_ok());
    assert!(check_size(0).is_ok());
}

#[test]
fn check_size_rejects_one_byte_over() {
    assert_eq!(
        check_size(MAX_UPLOAD_BYTES + 1),
        Err(Error::UploadTooLarge { size: MAX_UPLOAD_BYTES + 1, limit: 5_242_880 })
    );
}

#[test]
fn check_image_mime_accepts_images_only() {
    assert!(check_image_mime("image/png").is_ok());
    assert!(check_image_mime("image/jpeg").is_ok());
    assert!(check_image_mime("application/pdf").is_err());
    assert_eq!(
        check_image_mime(""),
        Err(Error::Validation("expected an image file, got unknown type".into()))
    );
}

#[test]
fn to_data_uri_prefixes_mime_and_base64() {
    assert_eq!(to_data_uri("image/png", b"hi"), "data:image/png;base64,aGk=");
}
