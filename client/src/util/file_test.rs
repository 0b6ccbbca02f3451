use content::Error;
use content::upload::MAX_UPLOAD_BYTES;

use super::*;

#[test]
fn accepts_image_at_limit() {
    assert_eq!(check_image(MAX_UPLOAD_BYTES, "image/png"), Ok(()));
}

#[test]
fn size_is_checked_before_type() {
    let err = check_image(MAX_UPLOAD_BYTES + 1, "application/pdf").unwrap_err();
    assert_eq!(err, Error::UploadTooLarge { size: MAX_UPLOAD_BYTES + 1, limit: MAX_UPLOAD_BYTES });
}

#[test]
fn rejects_non_images() {
    assert!(matches!(check_image(1024, "text/plain"), Err(Error::Validation(_))));
}
