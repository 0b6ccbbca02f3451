//! Image upload limits and `data:` URI encoding.
//!
//! The browser hands over the file size before reading, so oversized files are
//! turned away without ever being loaded into memory.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::{Error, Result};

/// Largest accepted upload, 5 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Reject files larger than [`MAX_UPLOAD_BYTES`].
///
/// # Errors
///
/// Returns [`Error::UploadTooLarge`] when `size` exceeds the limit.
pub fn check_size(size: u64) -> Result<()> {
    if size > MAX_UPLOAD_BYTES {
        return Err(Error::UploadTooLarge { size, limit: MAX_UPLOAD_BYTES });
    }
    Ok(())
}

/// Reject anything that is not an `image/*` MIME type.
///
/// # Errors
///
/// Returns [`Error::Validation`] for non-image types.
pub fn check_image_mime(mime: &str) -> Result<()> {
    if mime.starts_with("image/") {
        return Ok(());
    }
    Err(Error::Validation(format!("expected an image file, got {}", if mime.is_empty() { "unknown type" } else { mime })))
}

/// Encode file bytes as a base64 `data:` URI.
#[must_use]
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;
