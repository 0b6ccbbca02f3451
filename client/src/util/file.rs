//! Image file input -> `data:` URI.
//!
//! DESIGN
//! ======
//! Size and type are checked from the `File` metadata before any bytes are
//! read, so an oversized screenshot never reaches memory or the ledger.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use content::Result;
use content::upload::{check_image_mime, check_size};

/// Validate an upload from its metadata.
///
/// # Errors
///
/// Returns `UploadTooLarge` or a validation error for non-image types.
pub fn check_image(size: u64, mime: &str) -> Result<()> {
    check_size(size)?;
    check_image_mime(mime)
}

/// First file picked in the `<input type="file">` that fired `ev`.
#[cfg(feature = "hydrate")]
pub fn picked_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast as _;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Read `file` into a base64 `data:` URI.
///
/// # Errors
///
/// Returns the metadata check's error, or a validation error if the browser
/// fails to read the file.
#[cfg(feature = "hydrate")]
pub async fn read_data_uri(file: web_sys::File) -> Result<String> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size() as u64;
    let mime = file.type_();
    check_image(size, &mime)?;
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| content::Error::Validation(format!("could not read {}", file.name())))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(content::upload::to_data_uri(&mime, &bytes))
}
