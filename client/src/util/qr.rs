//! QR code image URLs for the Binance Pay id.

#[cfg(test)]
#[path = "qr_test.rs"]
mod qr_test;

const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Square QR image of `data`, `size` pixels per side.
pub fn qr_code_url(data: &str, size: u32) -> String {
    format!("{QR_ENDPOINT}?size={size}x{size}&data={}", urlencoding::encode(data))
}
